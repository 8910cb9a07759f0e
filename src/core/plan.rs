//! Purpose: Narrow untrusted pasted text into a typed plan response payload.
//! Exports: `PlanResponse`, `Rejection`, `JsonKind`, `parse_plan_response`, `inspect_plan_text`,
//!          `has_itineraries_array`.
//! Role: Boundary routine between clipboard/import actions and itinerary consumers.
//! Invariants: An accepted payload is the decoded object moved as-is; nothing is copied,
//!             renamed, or dropped.
//! Invariants: Every rejection is returned as a value; no input panics or escapes as an error.
//! Invariants: `parse_plan_response(s)` is always `inspect_plan_text(s).ok()`.
use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::json::parse::{self, ParseFailureCategory};

pub const ITINERARIES_FIELD: &str = "itineraries";

/// A decoded JSON object known to carry an `itineraries` array.
///
/// Itinerary contents are opaque; they are exposed exactly as decoded.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PlanResponse(Map<String, Value>);

impl PlanResponse {
    pub fn from_value(value: Value) -> Result<Self, Rejection> {
        match value {
            Value::Object(map) => Self::from_map(map),
            other => Err(Rejection::NotObject {
                found: JsonKind::of(&other),
            }),
        }
    }

    pub fn from_map(map: Map<String, Value>) -> Result<Self, Rejection> {
        match map.get(ITINERARIES_FIELD) {
            Some(Value::Array(_)) => Ok(Self(map)),
            Some(other) => Err(Rejection::ItinerariesNotArray {
                found: JsonKind::of(other),
            }),
            None => Err(Rejection::MissingItineraries),
        }
    }

    pub fn itineraries(&self) -> &[Value] {
        // Construction guarantees the field is an array and no mutable access is handed out.
        match self.0.get(ITINERARIES_FIELD) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }

    pub fn itinerary_count(&self) -> usize {
        self.itineraries().len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl<'de> Deserialize<'de> for PlanResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_map(map).map_err(serde::de::Error::custom)
    }
}

impl From<PlanResponse> for Value {
    fn from(plan: PlanResponse) -> Self {
        plan.into_value()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a piece of text was not accepted as a plan response.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rejection {
    Empty,
    Malformed { category: ParseFailureCategory },
    NotObject { found: JsonKind },
    MissingItineraries,
    ItinerariesNotArray { found: JsonKind },
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::Empty => "empty",
            Rejection::Malformed { .. } => "malformed",
            Rejection::NotObject { .. } => "not-object",
            Rejection::MissingItineraries => "missing-itineraries",
            Rejection::ItinerariesNotArray { .. } => "itineraries-not-array",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Rejection::Empty => "input is empty".to_string(),
            Rejection::Malformed { category } => {
                format!("input is not valid JSON ({})", category.label())
            }
            Rejection::NotObject { found } => {
                format!("top-level JSON value is {found}, expected object")
            }
            Rejection::MissingItineraries => {
                format!("object has no `{ITINERARIES_FIELD}` field")
            }
            Rejection::ItinerariesNotArray { found } => {
                format!("`{ITINERARIES_FIELD}` is {found}, expected array")
            }
        }
    }

    pub fn hint(&self) -> String {
        match self {
            Rejection::Empty => "Copy a plan response before importing.".to_string(),
            Rejection::Malformed { category } => parse::hint_for_category(*category, "plan import"),
            _ => "Paste the whole plan response object, including its itineraries array."
                .to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl StdError for Rejection {}

/// Structural check: an object whose own `itineraries` field is an array.
pub fn has_itineraries_array(value: &Value) -> bool {
    value
        .as_object()
        .and_then(|map| map.get(ITINERARIES_FIELD))
        .is_some_and(Value::is_array)
}

pub fn inspect_plan_text(text: &str) -> Result<PlanResponse, Rejection> {
    if text.trim().is_empty() {
        return Err(Rejection::Empty);
    }
    let value: Value = parse::from_str(text).map_err(|err| Rejection::Malformed {
        category: parse::categorize_error(&err),
    })?;
    PlanResponse::from_value(value)
}

/// Returns the payload when `text` is a plan response, `None` otherwise.
///
/// Empty input, invalid JSON, and well-formed JSON of the wrong shape are
/// deliberately indistinguishable here; use [`inspect_plan_text`] for the reason.
pub fn parse_plan_response(text: &str) -> Option<PlanResponse> {
    match inspect_plan_text(text) {
        Ok(plan) => {
            tracing::trace!(itineraries = plan.itinerary_count(), "accepted plan response");
            Some(plan)
        }
        Err(rejection) => {
            tracing::debug!(reason = rejection.code(), "text is not a plan response");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        JsonKind, PlanResponse, Rejection, has_itineraries_array, inspect_plan_text,
        parse_plan_response,
    };
    use crate::json::parse::ParseFailureCategory;
    use serde_json::{Value, json};

    #[test]
    fn blank_input_is_absent() {
        for text in ["", " ", "\n\t  \r\n"] {
            assert!(parse_plan_response(text).is_none());
            assert_eq!(inspect_plan_text(text), Err(Rejection::Empty));
        }
    }

    #[test]
    fn malformed_json_is_absent() {
        for text in ["hello", "{", "{\"itineraries\":[}", "[1,2"] {
            assert!(parse_plan_response(text).is_none(), "{text}");
            assert!(matches!(
                inspect_plan_text(text),
                Err(Rejection::Malformed { .. })
            ));
        }
    }

    #[test]
    fn wrong_shape_is_absent() {
        let cases = [
            (r#"{"foo":"bar"}"#, Rejection::MissingItineraries),
            (
                r#"{"itineraries":"x"}"#,
                Rejection::ItinerariesNotArray {
                    found: JsonKind::String,
                },
            ),
            (
                r#"{"itineraries":null}"#,
                Rejection::ItinerariesNotArray {
                    found: JsonKind::Null,
                },
            ),
            (
                r#"{"itineraries":{"0":{}}}"#,
                Rejection::ItinerariesNotArray {
                    found: JsonKind::Object,
                },
            ),
            (
                "null",
                Rejection::NotObject {
                    found: JsonKind::Null,
                },
            ),
            (
                r#"[{"itineraries":[]}]"#,
                Rejection::NotObject {
                    found: JsonKind::Array,
                },
            ),
            (
                "42",
                Rejection::NotObject {
                    found: JsonKind::Number,
                },
            ),
            (
                r#""itineraries""#,
                Rejection::NotObject {
                    found: JsonKind::String,
                },
            ),
        ];

        for (text, expected) in cases {
            assert!(parse_plan_response(text).is_none(), "{text}");
            assert_eq!(inspect_plan_text(text), Err(expected), "{text}");
        }
    }

    #[test]
    fn empty_itineraries_are_accepted() {
        let plan = parse_plan_response(r#"{"itineraries":[]}"#).expect("plan");
        assert!(plan.itineraries().is_empty());
        assert_eq!(plan.get("itineraries"), Some(&json!([])));
    }

    #[test]
    fn itineraries_pass_through_unchanged() {
        let text = r#"{"itineraries":[{"legs":[],"duration":600}],"debugOutput":{"n":3}}"#;
        let plan = parse_plan_response(text).expect("plan");
        assert_eq!(plan.itinerary_count(), 1);
        assert_eq!(plan.itineraries()[0], json!({"legs": [], "duration": 600}));

        let decoded: Value = serde_json::from_str(text).expect("json");
        assert_eq!(plan.into_value(), decoded);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let plan = parse_plan_response("\n  {\"itineraries\":[1, \"two\", null]}  \n").expect("plan");
        assert_eq!(plan.itineraries(), &[json!(1), json!("two"), Value::Null]);
    }

    #[test]
    fn duplicate_key_uses_last_value() {
        assert!(parse_plan_response(r#"{"itineraries":[],"itineraries":"x"}"#).is_none());
        assert!(parse_plan_response(r#"{"itineraries":"x","itineraries":[]}"#).is_some());
    }

    #[test]
    fn parsing_is_idempotent() {
        for text in [
            "",
            "hello",
            r#"{"foo":"bar"}"#,
            r#"{"itineraries":[{"legs":[]}]}"#,
        ] {
            assert_eq!(parse_plan_response(text), parse_plan_response(text));
            assert_eq!(inspect_plan_text(text), inspect_plan_text(text));
        }
    }

    #[test]
    fn predicate_agrees_with_narrowing() {
        let values = [
            json!(null),
            json!(true),
            json!(1.5),
            json!("s"),
            json!([]),
            json!({}),
            json!({"itineraries": []}),
            json!({"itineraries": [1]}),
            json!({"itineraries": "x"}),
            json!({"Itineraries": []}),
            json!({"nested": {"itineraries": []}}),
        ];
        for value in values {
            assert_eq!(
                has_itineraries_array(&value),
                PlanResponse::from_value(value.clone()).is_ok(),
                "{value}"
            );
        }
    }

    #[test]
    fn deserialize_enforces_shape() {
        let plan: PlanResponse =
            serde_json::from_str(r#"{"itineraries":[{"legs":[]}],"from":{}}"#).expect("plan");
        assert_eq!(plan.itinerary_count(), 1);

        let err = serde_json::from_str::<PlanResponse>(r#"{"from":{}}"#).unwrap_err();
        assert!(err.to_string().contains("no `itineraries` field"));

        let round = serde_json::to_value(&plan).expect("serialize");
        assert_eq!(round, json!({"itineraries": [{"legs": []}], "from": {}}));
    }

    #[test]
    fn overflowing_numbers_are_accepted_verbatim() {
        let text = r#"{"itineraries":[{"duration":1e400,"id":123456789012345678901234567890}]}"#;
        let plan = parse_plan_response(text).expect("plan");
        assert_eq!(plan.itineraries()[0]["duration"].to_string(), "1e400");
        assert_eq!(serde_json::to_string(&plan).expect("serialize"), text);
    }

    #[test]
    fn nesting_up_to_depth_limit_is_accepted() {
        // The payload object and the itineraries array take two of the 128 levels.
        let inner = 120;
        let text = format!(
            r#"{{"itineraries":[{}0{}]}}"#,
            "[".repeat(inner),
            "]".repeat(inner)
        );
        assert!(parse_plan_response(&text).is_some());
    }

    #[test]
    fn nesting_past_depth_limit_is_rejected() {
        let inner = 200;
        let text = format!(
            r#"{{"itineraries":[{}0{}]}}"#,
            "[".repeat(inner),
            "]".repeat(inner)
        );
        assert_eq!(
            inspect_plan_text(&text),
            Err(Rejection::Malformed {
                category: ParseFailureCategory::DepthLimit
            })
        );

        let hostile = "[".repeat(100_000);
        assert!(parse_plan_response(&hostile).is_none());
    }

    #[test]
    fn lone_surrogate_escape_is_rejected() {
        assert_eq!(
            inspect_plan_text(r#"{"itineraries":[{"name":"\ud800"}]}"#),
            Err(Rejection::Malformed {
                category: ParseFailureCategory::Syntax
            })
        );
        let plan = parse_plan_response(r#"{"itineraries":[{"name":"\ud83d\ude8b"}]}"#)
            .expect("paired surrogates decode");
        assert_eq!(plan.itineraries()[0]["name"], "\u{1f68b}");
    }

    #[test]
    fn pasted_key_order_is_preserved() {
        let text = r#"{"zeta":1,"itineraries":[{"to":"B","from":"A"}],"alpha":2}"#;
        let plan = parse_plan_response(text).expect("plan");
        let keys: Vec<&str> = plan.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "itineraries", "alpha"]);
        assert_eq!(serde_json::to_string(&plan.into_value()).expect("serialize"), text);
    }

    #[test]
    fn rejection_codes_are_stable() {
        let cases = [
            (Rejection::Empty, "empty"),
            (
                Rejection::Malformed {
                    category: ParseFailureCategory::Syntax,
                },
                "malformed",
            ),
            (
                Rejection::NotObject {
                    found: JsonKind::Array,
                },
                "not-object",
            ),
            (Rejection::MissingItineraries, "missing-itineraries"),
            (
                Rejection::ItinerariesNotArray {
                    found: JsonKind::Bool,
                },
                "itineraries-not-array",
            ),
        ];
        for (rejection, code) in cases {
            assert_eq!(rejection.code(), code);
        }
    }

    #[test]
    fn malformed_hint_names_category_without_payload() {
        let rejection = inspect_plan_text("{\"secret\":").unwrap_err();
        assert_eq!(
            rejection,
            Rejection::Malformed {
                category: ParseFailureCategory::Eof
            }
        );
        let hint = rejection.hint();
        assert!(hint.contains("parse category: eof"));
        assert!(!hint.contains("secret"));
    }
}
