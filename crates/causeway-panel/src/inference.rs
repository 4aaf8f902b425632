//! InferenceRequester — per-kind loading/result state with explicit
//! begin/complete transitions.
//!
//! Both kinds' states are retained, but beginning one estimation hides the
//! other's displayed result, so at most one result panel shows at a time.
//! A `begin` while the same kind is already loading is permitted; the later
//! completion overwrites the earlier one.

use causeway_core::{EffectEstimate, EffectKind, PanelResult};

/// State of one estimation kind.
#[derive(Debug, Clone, Default)]
pub struct EstimateState {
    loading: bool,
    available: bool,
    result: Option<EffectEstimate>,
    error: Option<String>,
}

impl EstimateState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the result should currently be presented.
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn result(&self) -> Option<EffectEstimate> {
        self.result
    }

    /// Retryable failure message from the last attempt, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Tracks both estimation kinds.
#[derive(Debug, Clone, Default)]
pub struct InferenceRequester {
    ate: EstimateState,
    cate: EstimateState,
}

impl InferenceRequester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, kind: EffectKind) -> &EstimateState {
        match kind {
            EffectKind::Ate => &self.ate,
            EffectKind::Cate => &self.cate,
        }
    }

    fn state_mut(&mut self, kind: EffectKind) -> &mut EstimateState {
        match kind {
            EffectKind::Ate => &mut self.ate,
            EffectKind::Cate => &mut self.cate,
        }
    }

    /// Mark a request of `kind` as outstanding and hide the other kind's
    /// displayed result.
    pub fn begin(&mut self, kind: EffectKind) {
        let other = self.state_mut(kind.other());
        other.available = false;
        other.error = None;

        let state = self.state_mut(kind);
        state.loading = true;
        state.error = None;
        tracing::debug!("inference: {} request started", kind.label());
    }

    /// Commit a request outcome. Loading is cleared on success and failure
    /// alike; failures surface as a retryable error message.
    pub fn complete(&mut self, kind: EffectKind, outcome: PanelResult<EffectEstimate>) {
        let state = self.state_mut(kind);
        state.loading = false;
        match outcome {
            Ok(estimate) => {
                state.result = Some(estimate);
                state.available = true;
                state.error = None;
                tracing::info!(
                    "inference: {} estimated {} (true {})",
                    kind.label(),
                    estimate.estimated,
                    estimate.ground_truth
                );
            }
            Err(e) => {
                state.available = false;
                state.error = Some(e.to_string());
                tracing::warn!("inference: {} failed: {e}", kind.label());
            }
        }
    }
}
