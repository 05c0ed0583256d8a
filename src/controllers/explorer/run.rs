use log::{debug, error, info};

use crate::controllers::explorer::controller::ExplorerController;
use crate::controllers::explorer::data::frame_data::FrameData;
use crate::controllers::explorer::data::run_summary::RunSummary;
use crate::controllers::explorer::errors::explorer::ExplorerError;
use crate::controllers::explorer::ports::frame_presenter::FramePresenterPort;
use crate::controllers::explorer::ports::input_source::{BackendInput, InputSourcePort};

/// What happened to one input handed to [`handle_input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Presented,
    Quit,
}

/// Renders and presents the frame for the current viewport.
pub fn start_session<P>(
    controller: &mut ExplorerController,
    presenter: &mut P,
) -> Result<(), ExplorerError>
where
    P: FramePresenterPort + ?Sized,
{
    let frame = controller.start()?;
    present_frame(presenter, frame)
}

/// Applies one backend input: a command is rendered and presented before
/// this returns.
pub fn handle_input<P>(
    controller: &mut ExplorerController,
    input: BackendInput,
    presenter: &mut P,
) -> Result<InputOutcome, ExplorerError>
where
    P: FramePresenterPort + ?Sized,
{
    match input {
        BackendInput::Command(command) => {
            let frame = controller.navigate(command)?;
            present_frame(presenter, frame)?;
            Ok(InputOutcome::Presented)
        }
        BackendInput::Quit => {
            debug!("Quit requested");
            Ok(InputOutcome::Quit)
        }
    }
}

/// Drives a session until the input source quits or runs dry.
///
/// The initial frame is presented before any input is read. Each command is
/// applied and rendered before the next input is taken, so commands are
/// handled strictly in arrival order. A presenter failure ends the run.
pub fn run_explorer<I, P>(
    controller: &mut ExplorerController,
    input: &mut I,
    presenter: &mut P,
) -> Result<RunSummary, ExplorerError>
where
    I: InputSourcePort + ?Sized,
    P: FramePresenterPort + ?Sized,
{
    start_session(controller, presenter)?;
    let mut frames_presented = 1;
    let mut commands_applied = 0;

    while let Some(input) = input.next_input() {
        if handle_input(controller, input, presenter)? == InputOutcome::Quit {
            break;
        }
        commands_applied += 1;
        frames_presented += 1;
    }

    let summary = RunSummary {
        frames_presented,
        commands_applied,
        final_viewport: controller.viewport(),
    };
    info!(
        "Session ended after {} commands, {} frames; final view {}",
        summary.commands_applied, summary.frames_presented, summary.final_viewport
    );

    Ok(summary)
}

/// Hands `frame` to the presenter, logging a rejection before returning it.
pub fn present_frame<P>(presenter: &mut P, frame: FrameData) -> Result<(), ExplorerError>
where
    P: FramePresenterPort + ?Sized,
{
    let generation = frame.generation;

    presenter.present(frame).map_err(|err| {
        error!("Presenter rejected frame {}: {}", generation, err);
        ExplorerError::from(err)
    })
}
