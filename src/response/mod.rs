//! Outbound dialog response
//!
//! Every turn produces exactly one [`DialogAction`]:
//! - `ElicitSlot` re-prompts the user for a slot that failed validation
//! - `Delegate` hands the slots back so the platform keeps collecting
//! - `Close` ends the conversation with the recommendation

use serde::{Deserialize, Serialize};

use crate::value_objects::{FulfillmentState, Message, SessionAttributes, SlotName, Slots};

/// Response returned to the platform for one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogResponse {
    pub session_attributes: SessionAttributes,
    pub dialog_action: DialogAction,
}

/// What the platform should do next
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    /// Ask the user for `slot_to_elicit` again
    #[serde(rename_all = "camelCase")]
    ElicitSlot {
        intent_name: String,
        slots: Slots,
        slot_to_elicit: SlotName,
        message: Message,
    },
    /// Let the platform choose the next step
    #[serde(rename_all = "camelCase")]
    Delegate { slots: Slots },
    /// End the conversation
    #[serde(rename_all = "camelCase")]
    Close {
        fulfillment_state: FulfillmentState,
        message: Message,
    },
}

impl DialogResponse {
    pub fn elicit_slot(
        session_attributes: SessionAttributes,
        intent_name: impl Into<String>,
        slots: Slots,
        slot_to_elicit: SlotName,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::ElicitSlot {
                intent_name: intent_name.into(),
                slots,
                slot_to_elicit,
                message,
            },
        }
    }

    pub fn delegate(session_attributes: SessionAttributes, slots: Slots) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Delegate { slots },
        }
    }

    pub fn close(
        session_attributes: SessionAttributes,
        fulfillment_state: FulfillmentState,
        message: Message,
    ) -> Self {
        Self {
            session_attributes,
            dialog_action: DialogAction::Close {
                fulfillment_state,
                message,
            },
        }
    }

    /// Wire name of the chosen action
    pub fn action_type(&self) -> &'static str {
        match self.dialog_action {
            DialogAction::ElicitSlot { .. } => "ElicitSlot",
            DialogAction::Delegate { .. } => "Delegate",
            DialogAction::Close { .. } => "Close",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_elicit_slot_wire_shape() {
        let mut slots = Slots::new().with(SlotName::FirstName, "Ada");
        slots.clear(SlotName::Age);

        let response = DialogResponse::elicit_slot(
            SessionAttributes::default(),
            "recommendPortfolio",
            slots,
            SlotName::Age,
            Message::plain_text("try again"),
        );

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": null,
                "dialogAction": {
                    "type": "ElicitSlot",
                    "intentName": "recommendPortfolio",
                    "slots": { "firstName": "Ada", "age": null },
                    "slotToElicit": "age",
                    "message": { "contentType": "PlainText", "content": "try again" }
                }
            })
        );
    }

    #[test]
    fn test_delegate_wire_shape() {
        let response = DialogResponse::delegate(
            SessionAttributes::new(serde_json::Map::new()),
            Slots::new().with(SlotName::Age, "30"),
        );

        assert_eq!(response.action_type(), "Delegate");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "sessionAttributes": {},
                "dialogAction": { "type": "Delegate", "slots": { "age": "30" } }
            })
        );
    }

    #[test]
    fn test_close_wire_shape() {
        let response = DialogResponse::close(
            SessionAttributes::default(),
            FulfillmentState::Fulfilled,
            Message::plain_text("done"),
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["dialogAction"]["type"], "Close");
        assert_eq!(value["dialogAction"]["fulfillmentState"], "Fulfilled");
        assert_eq!(value["dialogAction"]["message"]["content"], "done");
    }
}
