//! Purpose: Provide a stable, serializable import report model.
//! Exports: `ImportReport`, `ImportStatus`.
//! Role: Shared contract for CLI `check` output and embedding callers that log outcomes.
//! Invariants: Reports never embed payload text; only counts, codes, and fixed messages.
//! Invariants: Envelope keys are additive-only once published.

use serde_json::{Map, Value, json};

use crate::core::plan::{PlanResponse, Rejection, inspect_plan_text};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ImportStatus {
    Accepted,
    Rejected,
}

impl ImportStatus {
    pub fn label(self) -> &'static str {
        match self {
            ImportStatus::Accepted => "accepted",
            ImportStatus::Rejected => "rejected",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ImportReport {
    pub status: ImportStatus,
    pub itinerary_count: Option<usize>,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub hint: Option<String>,
    pub source: Option<String>,
}

impl ImportReport {
    pub fn accepted(itinerary_count: usize) -> Self {
        Self {
            status: ImportStatus::Accepted,
            itinerary_count: Some(itinerary_count),
            reason: None,
            message: None,
            hint: None,
            source: None,
        }
    }

    pub fn rejected(rejection: &Rejection) -> Self {
        Self {
            status: ImportStatus::Rejected,
            itinerary_count: None,
            reason: Some(rejection.code().to_string()),
            message: Some(rejection.message()),
            hint: Some(rejection.hint()),
            source: None,
        }
    }

    pub fn from_outcome(outcome: &Result<PlanResponse, Rejection>) -> Self {
        match outcome {
            Ok(plan) => Self::accepted(plan.itinerary_count()),
            Err(rejection) => Self::rejected(rejection),
        }
    }

    pub fn inspect(text: &str) -> Self {
        Self::from_outcome(&inspect_plan_text(text))
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn is_accepted(&self) -> bool {
        self.status == ImportStatus::Accepted
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("status".to_string(), json!(self.status.label()));
        if let Some(count) = self.itinerary_count {
            map.insert("itineraries".to_string(), json!(count));
        }
        if let Some(reason) = &self.reason {
            map.insert("reason".to_string(), json!(reason));
        }
        if let Some(message) = &self.message {
            map.insert("message".to_string(), json!(message));
        }
        if let Some(hint) = &self.hint {
            map.insert("hint".to_string(), json!(hint));
        }
        if let Some(source) = &self.source {
            map.insert("source".to_string(), json!(source));
        }
        Value::Object(map)
    }
}
