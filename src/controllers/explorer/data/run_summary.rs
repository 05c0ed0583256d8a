use crate::core::data::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames_presented: u64,
    pub commands_applied: u64,
    pub final_viewport: Viewport,
}
