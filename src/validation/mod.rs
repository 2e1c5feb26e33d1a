//! Slot validation rules
//!
//! Validation is advisory per turn: only slots the user has filled are
//! checked, in a fixed order, and the first violation wins. Unparseable
//! numbers become [`ParsedNumber::NotANumber`], which every rule rejects.

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use tracing::debug;

use crate::value_objects::{Message, SlotName};

/// Integer read from a slot value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedNumber {
    Value(i64),
    /// Input was not an integer; fails every comparison
    NotANumber,
}

impl ParsedNumber {
    /// Parse a slot value, absorbing failures into [`ParsedNumber::NotANumber`]
    ///
    /// Out-of-range integers saturate so they still compare like the number
    /// the user typed.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(value) => ParsedNumber::Value(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => ParsedNumber::Value(i64::MAX),
                IntErrorKind::NegOverflow => ParsedNumber::Value(i64::MIN),
                _ => ParsedNumber::NotANumber,
            },
        }
    }

    /// `min <= value < max`
    pub fn in_range(&self, min: i64, max: i64) -> bool {
        matches!(*self, ParsedNumber::Value(v) if v >= min && v < max)
    }

    /// `value >= min`
    pub fn at_least(&self, min: i64) -> bool {
        matches!(*self, ParsedNumber::Value(v) if v >= min)
    }
}

/// Business limits applied to investor data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Youngest accepted age (inclusive)
    pub min_age: i64,
    /// Age at which investors are turned away (exclusive)
    pub max_age: i64,
    /// Smallest accepted investment in dollars (inclusive)
    pub min_investment: i64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_age: 0,
            max_age: 65,
            min_investment: 5000,
        }
    }
}

impl ValidationLimits {
    pub fn age_message(&self) -> String {
        format!(
            "Required age must be larger than {} and under {} years.",
            self.min_age, self.max_age
        )
    }

    pub fn investment_message(&self) -> String {
        format!(
            "The amount of investment must be greater than ${}",
            self.min_investment
        )
    }
}

/// Outcome of validating one turn's slots
///
/// The violated slot and its message travel together, so an invalid result
/// always says what to re-prompt for and a valid one never does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawValidationResult")]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    violated_slot: Option<SlotName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<Message>,
}

/// Wire form of [`ValidationResult`] before its fields are checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawValidationResult {
    is_valid: bool,
    #[serde(default)]
    violated_slot: Option<SlotName>,
    #[serde(default)]
    message: Option<Message>,
}

/// Validation result whose flag, slot and message disagree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "inconsistent validation result (valid: {is_valid}, slot: {has_slot}, message: {has_message})"
)]
pub struct InconsistentValidationResult {
    pub is_valid: bool,
    pub has_slot: bool,
    pub has_message: bool,
}

impl TryFrom<RawValidationResult> for ValidationResult {
    type Error = InconsistentValidationResult;

    fn try_from(raw: RawValidationResult) -> Result<Self, Self::Error> {
        match (raw.is_valid, raw.violated_slot, raw.message) {
            (true, None, None) => Ok(Self::valid()),
            (false, Some(slot), Some(message)) => Ok(Self {
                is_valid: false,
                violated_slot: Some(slot),
                message: Some(message),
            }),
            (is_valid, slot, message) => Err(InconsistentValidationResult {
                is_valid,
                has_slot: slot.is_some(),
                has_message: message.is_some(),
            }),
        }
    }
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            violated_slot: None,
            message: None,
        }
    }

    pub fn invalid(slot: SlotName, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            violated_slot: Some(slot),
            message: Some(Message::plain_text(message)),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn violated_slot(&self) -> Option<SlotName> {
        self.violated_slot
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Violated slot and its message, if invalid
    pub fn into_violation(self) -> Option<(SlotName, Message)> {
        self.violated_slot.zip(self.message)
    }
}

/// Validate age and investment amount against `limits`
pub fn validate_investor_data(
    age: Option<&str>,
    investment_amount: Option<&str>,
    limits: &ValidationLimits,
) -> ValidationResult {
    if let Some(raw) = age {
        let parsed = ParsedNumber::parse(raw);
        if !parsed.in_range(limits.min_age, limits.max_age) {
            debug!(age = raw, ?parsed, "age outside accepted range");
            return ValidationResult::invalid(SlotName::Age, limits.age_message());
        }
    }

    if let Some(raw) = investment_amount {
        let parsed = ParsedNumber::parse(raw);
        if !parsed.at_least(limits.min_investment) {
            debug!(investment_amount = raw, ?parsed, "investment below minimum");
            return ValidationResult::invalid(
                SlotName::InvestmentAmount,
                limits.investment_message(),
            );
        }
    }

    ValidationResult::valid()
}
