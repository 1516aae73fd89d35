use std::fmt;
use uuid::Uuid;

use super::IdentificationResult;
use crate::global_constants::PROGRESS_COMPLETE_PERCENT;

/// Identifies one identification attempt so that late progress ticks and
/// results from an abandoned attempt can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IdentificationTicket(Uuid);

impl IdentificationTicket {
    pub fn issue() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for IdentificationTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PipelineState {
    #[default]
    Idle,
    Previewing,
    Identifying {
        progress: u8,
    },
    Succeeded(IdentificationResult),
    Failed(String),
}

impl PipelineState {
    pub fn progress(&self) -> u8 {
        match self {
            PipelineState::Identifying { progress } => *progress,
            PipelineState::Succeeded(_) => PROGRESS_COMPLETE_PERCENT,
            _ => 0,
        }
    }

    pub fn is_identifying(&self) -> bool {
        matches!(self, PipelineState::Identifying { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            PipelineState::Idle => "idle",
            PipelineState::Previewing => "previewing",
            PipelineState::Identifying { .. } => "identifying",
            PipelineState::Succeeded(_) => "succeeded",
            PipelineState::Failed(_) => "failed",
        }
    }
}
