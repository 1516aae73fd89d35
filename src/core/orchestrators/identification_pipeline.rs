use crate::core::models::{
    EncodedImage, IdentificationResult, IdentificationTicket, PipelineError, PipelineState,
};
use crate::global_constants::LOG_TAG_PIPELINE;

use super::ProgressTicker;

/// State machine for one image at a time:
/// idle -> previewing -> identifying -> succeeded | failed -> idle.
#[derive(Debug, Default)]
pub struct IdentificationPipeline {
    state: PipelineState,
    preview: Option<EncodedImage>,
    active_ticket: Option<IdentificationTicket>,
    progress_ticker: ProgressTicker,
}

impl IdentificationPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn preview(&self) -> Option<&EncodedImage> {
        self.preview.as_ref()
    }

    pub fn progress(&self) -> u8 {
        self.state.progress()
    }

    pub fn progress_ticker(&self) -> &ProgressTicker {
        &self.progress_ticker
    }

    /// The ticket whose progress ticks are currently wanted, if any.
    pub fn ticking_ticket(&self) -> Option<IdentificationTicket> {
        if self.state.is_identifying() {
            self.active_ticket
        } else {
            None
        }
    }

    pub fn is_intake_enabled(&self) -> bool {
        !self.state.is_identifying()
    }

    pub fn accept_image(&mut self, image: EncodedImage) -> bool {
        if !self.is_intake_enabled() {
            log::warn!(
                "{} Ignoring new {} image while an identification is in flight",
                LOG_TAG_PIPELINE,
                image.mime_type()
            );
            return false;
        }

        log::info!(
            "{} {} -> previewing ({})",
            LOG_TAG_PIPELINE,
            self.state.label(),
            image.mime_type()
        );

        self.active_ticket = None;
        self.preview = Some(image);
        self.state = PipelineState::Previewing;
        true
    }

    pub fn begin_identification(&mut self) -> Option<(IdentificationTicket, EncodedImage)> {
        if self.state != PipelineState::Previewing {
            log::warn!(
                "{} Cannot start identification from state {}",
                LOG_TAG_PIPELINE,
                self.state.label()
            );
            return None;
        }

        let image = self.preview.clone()?;
        let ticket = IdentificationTicket::issue();

        log::info!(
            "{} previewing -> identifying (ticket {})",
            LOG_TAG_PIPELINE,
            ticket
        );

        self.active_ticket = Some(ticket);
        self.state = PipelineState::Identifying { progress: 0 };
        Some((ticket, image))
    }

    pub fn advance_progress(&mut self, ticket: IdentificationTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        let PipelineState::Identifying { progress } = self.state else {
            return false;
        };

        let next_progress = self.progress_ticker.next_progress(progress);
        log::debug!("{} progress {} -> {}", LOG_TAG_PIPELINE, progress, next_progress);
        self.state = PipelineState::Identifying {
            progress: next_progress,
        };
        true
    }

    /// Returns false when the result belongs to an abandoned attempt and was dropped.
    pub fn complete_identification(
        &mut self,
        ticket: IdentificationTicket,
        outcome: Result<IdentificationResult, PipelineError>,
    ) -> bool {
        if !self.is_current(ticket) || !self.state.is_identifying() {
            log::info!(
                "{} Discarding result for stale ticket {} (state {})",
                LOG_TAG_PIPELINE,
                ticket,
                self.state.label()
            );
            return false;
        }

        self.active_ticket = None;

        match outcome {
            Ok(result) => {
                log::info!(
                    "{} identifying -> succeeded: {} ({}%)",
                    LOG_TAG_PIPELINE,
                    result.name,
                    result.confidence_percent()
                );
                self.state = PipelineState::Succeeded(result);
            }
            Err(error) => {
                log::warn!("{} identifying -> failed: {}", LOG_TAG_PIPELINE, error);
                self.preview = None;
                self.state = PipelineState::Failed(error.to_string());
            }
        }

        true
    }

    pub fn clear_preview(&mut self) {
        if let Some(ticket) = self.active_ticket.take() {
            log::info!(
                "{} Abandoning in-flight identification {}",
                LOG_TAG_PIPELINE,
                ticket
            );
        }

        log::info!("{} {} -> idle", LOG_TAG_PIPELINE, self.state.label());
        self.preview = None;
        self.state = PipelineState::Idle;
    }

    fn is_current(&self, ticket: IdentificationTicket) -> bool {
        self.active_ticket == Some(ticket)
    }
}
