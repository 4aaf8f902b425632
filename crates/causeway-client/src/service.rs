//! InferenceService — the real backend over HTTP, behind the
//! `InferenceBackend` seam the panel engine consumes.

use causeway_core::constants::{ATE_ENDPOINT, CATE_ENDPOINT, MAX_STATE_ENDPOINT};
use causeway_core::{ConditionVar, EffectEstimate, PanelResult, ServiceConfig, StateBounds};

use crate::transport::protocol::{
    AteResponse, BoundsRequest, BoundsResponse, CateResponse, EstimationRequest,
};
use crate::transport::HttpClient;

/// The seam between the panel engine and the remote service. Implemented by
/// `InferenceService` for production and by stubs in tests.
pub trait InferenceBackend {
    /// One-time lookup of per-variable maximum discrete state values.
    fn max_state_bounds(&self, request: &BoundsRequest<'_>) -> PanelResult<StateBounds>;

    /// Estimate the average treatment effect.
    fn estimate_ate(&self, request: &EstimationRequest<'_>) -> PanelResult<EffectEstimate>;

    /// Estimate the conditional average treatment effect.
    fn estimate_cate(
        &self,
        request: &EstimationRequest<'_>,
        conditions: &[ConditionVar],
    ) -> PanelResult<EffectEstimate>;
}

/// HTTP-backed inference service.
#[derive(Debug)]
pub struct InferenceService {
    client: HttpClient,
}

impl InferenceService {
    pub fn new(config: &ServiceConfig) -> PanelResult<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
        })
    }

    pub fn from_client(client: HttpClient) -> Self {
        Self { client }
    }
}

impl InferenceBackend for InferenceService {
    fn max_state_bounds(&self, request: &BoundsRequest<'_>) -> PanelResult<StateBounds> {
        let fields = request.to_form()?;
        let response: BoundsResponse = self.client.post_form(MAX_STATE_ENDPOINT, &fields)?;
        tracing::info!(
            "client: fetched max state values for {} variables",
            response.max_state_val.len()
        );
        Ok(response.max_state_val.into())
    }

    fn estimate_ate(&self, request: &EstimationRequest<'_>) -> PanelResult<EffectEstimate> {
        let fields = request.to_ate_form()?;
        let response: AteResponse = self.client.post_form(ATE_ENDPOINT, &fields)?;
        tracing::info!(
            "client: ATE estimated {} (true {})",
            response.est_ate,
            response.true_ate
        );
        Ok(response.into())
    }

    fn estimate_cate(
        &self,
        request: &EstimationRequest<'_>,
        conditions: &[ConditionVar],
    ) -> PanelResult<EffectEstimate> {
        let fields = request.to_cate_form(conditions)?;
        let response: CateResponse = self.client.post_form(CATE_ENDPOINT, &fields)?;
        tracing::info!(
            "client: CATE estimated {} (true {})",
            response.est_cate,
            response.true_cate
        );
        Ok(response.into())
    }
}
