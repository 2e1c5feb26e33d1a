//! Inbound intent request
//!
//! Typed form of the event the conversational platform sends on every turn.
//! Only `currentIntent`, `invocationSource` and `sessionAttributes` drive the
//! handler; the rest of the envelope is accepted so real events deserialize.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::{InvocationSource, SessionAttributes, SlotName, Slots};

/// One turn's request from the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    /// Intent the user is talking to, with its slot values
    pub current_intent: CurrentIntent,
    /// Conversation phase
    pub invocation_source: InvocationSource,
    /// Opaque platform state, echoed back unchanged
    #[serde(default)]
    pub session_attributes: SessionAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<BotInfo>,
    /// `Text` or `Voice`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dialog_mode: Option<String>,
    /// Raw user utterance for this turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_transcript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_attributes: Option<Map<String, Value>>,
}

/// The intent being served
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentIntent {
    pub name: String,
    #[serde(default)]
    pub slots: Slots,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_details: Option<Value>,
}

/// Bot that received the utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl IntentRequest {
    /// Create a bare request with no envelope metadata
    pub fn new(
        intent_name: impl Into<String>,
        invocation_source: InvocationSource,
        slots: Slots,
    ) -> Self {
        Self {
            current_intent: CurrentIntent {
                name: intent_name.into(),
                slots,
                confirmation_status: None,
                slot_details: None,
            },
            invocation_source,
            session_attributes: SessionAttributes::default(),
            message_version: None,
            user_id: None,
            bot: None,
            output_dialog_mode: None,
            input_transcript: None,
            request_attributes: None,
        }
    }

    /// Attach session attributes
    pub fn with_session_attributes(mut self, session_attributes: SessionAttributes) -> Self {
        self.session_attributes = session_attributes;
        self
    }

    pub fn intent_name(&self) -> &str {
        &self.current_intent.name
    }

    pub fn slots(&self) -> &Slots {
        &self.current_intent.slots
    }

    /// Value of a slot, if filled
    pub fn slot(&self, name: SlotName) -> Option<&str> {
        self.current_intent.slots.get(name)
    }
}
