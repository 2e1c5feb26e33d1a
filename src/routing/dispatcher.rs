//! Intent dispatcher for platform requests

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, error};

use crate::{
    error::{DialogError, DialogResult},
    handlers::{IntentHandler, RecommendPortfolioHandler},
    request::IntentRequest,
    response::DialogResponse,
};

/// Routes each request to the handler registered for its intent
///
/// Building one allocates the handler table, so hosts should create a
/// dispatcher once and reuse it across invocations.
pub struct IntentDispatcher {
    handlers: HashMap<String, Box<dyn IntentHandler>>,
}

impl IntentDispatcher {
    /// Create a dispatcher with no handlers
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Create a dispatcher serving `recommendPortfolio`
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher.register(RecommendPortfolioHandler::new());
        dispatcher
    }

    /// Register a handler, replacing any handler for the same intent
    pub fn register(&mut self, handler: impl IntentHandler + 'static) {
        self.handlers
            .insert(handler.intent_name().to_string(), Box::new(handler));
    }

    pub fn supports(&self, intent_name: &str) -> bool {
        self.handlers.contains_key(intent_name)
    }

    /// Route a request to its intent handler
    pub fn dispatch(&self, request: &IntentRequest) -> DialogResult<DialogResponse> {
        let intent_name = request.intent_name();
        let handler = self.handlers.get(intent_name).ok_or_else(|| {
            error!(intent = intent_name, "no handler for intent");
            DialogError::UnsupportedIntent(intent_name.to_string())
        })?;

        debug!(
            intent = intent_name,
            source = ?request.invocation_source,
            "dispatching intent"
        );
        let response = handler.handle(request);
        debug!(action = response.action_type(), "turn handled");

        Ok(response)
    }

    /// Deserialize a raw platform event, dispatch it, and serialize the response
    pub fn handle_event(&self, event: serde_json::Value) -> DialogResult<serde_json::Value> {
        let request: IntentRequest =
            serde_json::from_value(event).map_err(DialogError::MalformedRequest)?;
        let response = self.dispatch(&request)?;
        serde_json::to_value(&response).map_err(DialogError::Serialization)
    }
}

impl Default for IntentDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_DISPATCHER: LazyLock<IntentDispatcher> = LazyLock::new(IntentDispatcher::new);

/// Dispatcher behind [`handle_event`], built on first use
fn default_dispatcher() -> &'static IntentDispatcher {
    &DEFAULT_DISPATCHER
}

/// Entry point for the hosting platform, using a process-wide default dispatcher
pub fn handle_event(event: serde_json::Value) -> DialogResult<serde_json::Value> {
    default_dispatcher().handle_event(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{InvocationSource, Slots};

    struct EchoHandler;

    impl IntentHandler for EchoHandler {
        fn intent_name(&self) -> &str {
            "echo"
        }

        fn handle(&self, request: &IntentRequest) -> DialogResponse {
            DialogResponse::delegate(request.session_attributes.clone(), request.slots().clone())
        }
    }

    #[test]
    fn test_default_supports_recommend_portfolio() {
        let dispatcher = IntentDispatcher::default();
        assert!(dispatcher.supports("recommendPortfolio"));
        assert!(!dispatcher.supports("orderPizza"));
    }

    #[test]
    fn test_unsupported_intent() {
        let dispatcher = IntentDispatcher::new();
        let request =
            IntentRequest::new("orderPizza", InvocationSource::DialogCodeHook, Slots::new());

        match dispatcher.dispatch(&request) {
            Err(DialogError::UnsupportedIntent(name)) => assert_eq!(name, "orderPizza"),
            other => panic!("expected UnsupportedIntent, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_dispatcher_rejects_everything() {
        let dispatcher = IntentDispatcher::empty();
        let request = IntentRequest::new(
            "recommendPortfolio",
            InvocationSource::DialogCodeHook,
            Slots::new(),
        );

        assert!(matches!(
            dispatcher.dispatch(&request),
            Err(DialogError::UnsupportedIntent(_))
        ));
    }

    #[test]
    fn test_registered_handler_is_used() {
        let mut dispatcher = IntentDispatcher::empty();
        dispatcher.register(EchoHandler);
        let request =
            IntentRequest::new("echo", InvocationSource::FulfillmentCodeHook, Slots::new());

        let response = dispatcher.dispatch(&request).unwrap();
        assert_eq!(response.action_type(), "Delegate");
    }

    #[test]
    fn test_default_dispatcher_is_built_once() {
        assert!(std::ptr::eq(default_dispatcher(), default_dispatcher()));
        assert!(default_dispatcher().supports("recommendPortfolio"));
    }

    #[test]
    fn test_malformed_event() {
        let result = handle_event(serde_json::json!({ "currentIntent": {} }));
        assert!(matches!(result, Err(DialogError::MalformedRequest(_))));
    }
}
