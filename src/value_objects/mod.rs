//! Value objects for the portfolio advisor dialog

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Slots collected by the `recommendPortfolio` intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlotName {
    /// Investor's first name, carried through untouched
    FirstName,
    /// Investor's age in years
    Age,
    /// Amount to invest, in whole dollars
    InvestmentAmount,
    /// Risk tolerance (none, low, medium, high)
    RiskLevel,
}

impl SlotName {
    /// Wire name of the slot
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::FirstName => "firstName",
            SlotName::Age => "age",
            SlotName::InvestmentAmount => "investmentAmount",
            SlotName::RiskLevel => "riskLevel",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current slot values of an intent
///
/// Keys are limited to [`SlotName`], so an unknown slot in an inbound event
/// is rejected at deserialization. A present key with a `None` value is a
/// slot the user has not filled yet (or one that was cleared for re-prompt).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slots(BTreeMap<SlotName, Option<String>>);

impl Slots {
    /// Create an empty slot map
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Value of a slot, if filled
    pub fn get(&self, name: SlotName) -> Option<&str> {
        self.0.get(&name).and_then(|value| value.as_deref())
    }

    /// Fill a slot
    pub fn set(&mut self, name: SlotName, value: impl Into<String>) {
        self.0.insert(name, Some(value.into()));
    }

    /// Reset a slot so the platform asks for it again
    pub fn clear(&mut self, name: SlotName) {
        self.0.insert(name, None);
    }

    /// Builder-style variant of [`Slots::set`]
    pub fn with(mut self, name: SlotName, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Whether the map has an entry for the slot, filled or not
    pub fn contains(&self, name: SlotName) -> bool {
        self.0.contains_key(&name)
    }
}

/// Conversation state owned by the platform
///
/// The handler never looks inside; whatever arrives (including `null`) is
/// echoed back in the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionAttributes(Option<Map<String, Value>>);

impl SessionAttributes {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self(Some(attributes))
    }

    pub fn is_empty(&self) -> bool {
        self.0.as_ref().is_none_or(Map::is_empty)
    }
}

/// Phase of the conversation the platform is invoking us for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvocationSource {
    /// Slots are still being collected
    DialogCodeHook,
    /// All required slots are collected
    FulfillmentCodeHook,
}

/// Outcome reported when closing the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// Format of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    PlainText,
}

/// User-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    /// Create a plain text message
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slots_read_missing_and_null_as_absent() {
        let slots: Slots = serde_json::from_value(json!({
            "age": null,
            "riskLevel": "Low",
        }))
        .unwrap();

        assert_eq!(slots.get(SlotName::Age), None);
        assert_eq!(slots.get(SlotName::InvestmentAmount), None);
        assert_eq!(slots.get(SlotName::RiskLevel), Some("Low"));
        assert!(slots.contains(SlotName::Age));
        assert!(!slots.contains(SlotName::FirstName));
    }

    #[test]
    fn test_slots_reject_unknown_names() {
        let result = serde_json::from_value::<Slots>(json!({ "favoriteColor": "blue" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_cleared_slot_serializes_as_null() {
        let mut slots = Slots::new().with(SlotName::Age, "70");
        slots.clear(SlotName::Age);

        assert_eq!(serde_json::to_value(&slots).unwrap(), json!({ "age": null }));
    }

    #[test]
    fn test_session_attributes_pass_through() {
        let raw = json!({ "previousPortfolio": "low", "turns": 3 });
        let attributes: SessionAttributes = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&attributes).unwrap(), raw);

        let null: SessionAttributes = serde_json::from_value(Value::Null).unwrap();
        assert!(null.is_empty());
        assert_eq!(serde_json::to_value(&null).unwrap(), Value::Null);
    }

    #[test]
    fn test_fulfillment_state_wire_names() {
        let fulfilled = serde_json::to_value(FulfillmentState::Fulfilled).unwrap();
        let failed = serde_json::to_value(FulfillmentState::Failed).unwrap();
        assert_eq!(fulfilled, json!("Fulfilled"));
        assert_eq!(failed, json!("Failed"));
        assert_eq!(
            serde_json::from_value::<FulfillmentState>(json!("Failed")).unwrap(),
            FulfillmentState::Failed
        );
    }

    #[test]
    fn test_message_wire_shape() {
        let message = Message::plain_text("hello");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({ "contentType": "PlainText", "content": "hello" })
        );
    }
}
