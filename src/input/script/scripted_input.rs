use std::collections::VecDeque;

use log::debug;

use crate::controllers::explorer::ports::input_source::{BackendInput, InputSourcePort};
use crate::input::script::parser::{ScriptParseError, parse_script};

/// Replays a parsed script, then reports exhaustion.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    pending: VecDeque<BackendInput>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(inputs: impl IntoIterator<Item = BackendInput>) -> Self {
        Self {
            pending: inputs.into_iter().collect(),
        }
    }

    pub fn from_script(script: &str) -> Result<Self, ScriptParseError> {
        let inputs = parse_script(script)?;
        debug!("Parsed {} scripted inputs", inputs.len());

        Ok(Self::new(inputs))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl InputSourcePort for ScriptedInput {
    fn next_input(&mut self) -> Option<BackendInput> {
        self.pending.pop_front()
    }
}
