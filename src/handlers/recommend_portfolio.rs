//! Handler for the `recommendPortfolio` intent

use tracing::{debug, info};

use super::IntentHandler;
use crate::{
    recommendation::select_risk_level,
    request::IntentRequest,
    response::DialogResponse,
    validation::{ValidationLimits, validate_investor_data},
    value_objects::{FulfillmentState, InvocationSource, Message, SlotName},
};

/// Intent name served by [`RecommendPortfolioHandler`]
pub const RECOMMEND_PORTFOLIO_INTENT: &str = "recommendPortfolio";

/// Validates investor slots while they are collected and recommends a
/// portfolio once they all are
#[derive(Debug, Clone, Default)]
pub struct RecommendPortfolioHandler {
    limits: ValidationLimits,
}

impl RecommendPortfolioHandler {
    /// Create a handler with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler with custom limits
    pub fn with_limits(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    fn validate_slots(&self, request: &IntentRequest) -> DialogResponse {
        let result = validate_investor_data(
            request.slot(SlotName::Age),
            request.slot(SlotName::InvestmentAmount),
            &self.limits,
        );

        match result.into_violation() {
            Some((slot, message)) => {
                info!(slot = %slot, "re-eliciting invalid slot");
                let mut slots = request.slots().clone();
                slots.clear(slot);
                DialogResponse::elicit_slot(
                    request.session_attributes.clone(),
                    request.intent_name(),
                    slots,
                    slot,
                    message,
                )
            }
            None => {
                debug!("slots valid, delegating");
                DialogResponse::delegate(
                    request.session_attributes.clone(),
                    request.slots().clone(),
                )
            }
        }
    }

    fn fulfill(&self, request: &IntentRequest) -> DialogResponse {
        let allocation = select_risk_level(request.slot(SlotName::RiskLevel));
        info!(
            risk_level = request.slot(SlotName::RiskLevel),
            allocation, "fulfilling portfolio recommendation"
        );

        DialogResponse::close(
            request.session_attributes.clone(),
            FulfillmentState::Fulfilled,
            Message::plain_text(format!(
                "Thank you for your information; your recommended portfolio is {allocation}."
            )),
        )
    }
}

impl IntentHandler for RecommendPortfolioHandler {
    fn intent_name(&self) -> &str {
        RECOMMEND_PORTFOLIO_INTENT
    }

    fn handle(&self, request: &IntentRequest) -> DialogResponse {
        match request.invocation_source {
            InvocationSource::DialogCodeHook => self.validate_slots(request),
            InvocationSource::FulfillmentCodeHook => self.fulfill(request),
        }
    }
}
