//! Intent handlers

pub mod recommend_portfolio;

pub use recommend_portfolio::RecommendPortfolioHandler;

use crate::request::IntentRequest;
use crate::response::DialogResponse;

/// Handler for a single intent
pub trait IntentHandler: Send + Sync {
    /// Intent name this handler serves
    fn intent_name(&self) -> &str;

    /// Produce the response for one turn
    fn handle(&self, request: &IntentRequest) -> DialogResponse;
}
