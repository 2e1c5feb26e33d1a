//! Portfolio advisor dialog module
//!
//! Fulfillment logic for the `recommendPortfolio` bot intent. On every turn
//! the conversational platform sends an intent request and this crate answers
//! with one dialog action:
//! - While slots are collected, age and investment amount are validated and
//!   the user is re-prompted for the first invalid slot
//! - Once all slots are in, the risk level is mapped to a bond/equity
//!   allocation and the conversation is closed
//!
//! Session attributes belong to the platform and are passed through
//! untouched. The only fatal condition is a request for an intent nobody
//! handles.

pub mod error;
pub mod handlers;
pub mod recommendation;
pub mod request;
pub mod response;
pub mod routing;
pub mod validation;
pub mod value_objects;

// Re-export main types
pub use error::{DialogError, DialogResult};

pub use handlers::{IntentHandler, RecommendPortfolioHandler};
pub use handlers::recommend_portfolio::RECOMMEND_PORTFOLIO_INTENT;

pub use recommendation::{INVALID_RISK_LEVEL, RiskLevel, select_risk_level};
pub use request::{BotInfo, CurrentIntent, IntentRequest};
pub use response::{DialogAction, DialogResponse};
pub use routing::{IntentDispatcher, handle_event};

pub use validation::{
    InconsistentValidationResult, ParsedNumber, ValidationLimits, ValidationResult,
    validate_investor_data,
};

pub use value_objects::{
    ContentType, FulfillmentState, InvocationSource, Message,
    SessionAttributes, SlotName, Slots,
};
