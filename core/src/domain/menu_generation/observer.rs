use std::time::Duration;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_generation::value_objects::{GenerationKind, GenerationStage},
};

/// Receives attempt lifecycle events from the generator. Has no effect on control flow.
pub trait GenerationObserver: Send + Sync {
    fn attempt_started(&self, _kind: GenerationKind, _attempt: u32) {}

    fn stage_entered(&self, _kind: GenerationKind, _attempt: u32, _stage: GenerationStage) {}

    fn attempt_failed(&self, _kind: GenerationKind, _attempt: u32, _error: &str) {}

    fn generation_succeeded(&self, _kind: GenerationKind, _attempt: u32, _elapsed: Duration) {}

    fn generation_aborted(&self, _kind: GenerationKind, _attempt: u32, _error: &CoreError) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}

/// Emits every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GenerationObserver for TracingObserver {
    fn attempt_started(&self, kind: GenerationKind, attempt: u32) {
        tracing::debug!(event = "generation_attempt_started", %kind, attempt);
    }

    fn stage_entered(&self, kind: GenerationKind, attempt: u32, stage: GenerationStage) {
        tracing::trace!(event = "generation_stage_entered", %kind, attempt, %stage);
    }

    fn attempt_failed(&self, kind: GenerationKind, attempt: u32, error: &str) {
        tracing::warn!(
            event = "generation_attempt_failed",
            %kind,
            attempt,
            error,
            "AI generation attempt failed validation"
        );
    }

    fn generation_succeeded(&self, kind: GenerationKind, attempt: u32, elapsed: Duration) {
        tracing::info!(
            event = "generation_succeeded",
            %kind,
            attempt,
            duration_ms = elapsed.as_millis() as u64,
            "AI generation succeeded"
        );
    }

    fn generation_aborted(&self, kind: GenerationKind, attempt: u32, error: &CoreError) {
        tracing::error!(
            event = "generation_aborted",
            %kind,
            attempt,
            error = %error,
            "AI generation aborted"
        );
    }
}

impl<T: GenerationObserver + ?Sized> GenerationObserver for std::sync::Arc<T> {
    fn attempt_started(&self, kind: GenerationKind, attempt: u32) {
        (**self).attempt_started(kind, attempt)
    }

    fn stage_entered(&self, kind: GenerationKind, attempt: u32, stage: GenerationStage) {
        (**self).stage_entered(kind, attempt, stage)
    }

    fn attempt_failed(&self, kind: GenerationKind, attempt: u32, error: &str) {
        (**self).attempt_failed(kind, attempt, error)
    }

    fn generation_succeeded(&self, kind: GenerationKind, attempt: u32, elapsed: Duration) {
        (**self).generation_succeeded(kind, attempt, elapsed)
    }

    fn generation_aborted(&self, kind: GenerationKind, attempt: u32, error: &CoreError) {
        (**self).generation_aborted(kind, attempt, error)
    }
}
