//! Purpose: Define the stable public Rust API boundary for plan import.
//! Exports: Plan narrowing entrypoints, payload/rejection types, reports, and errors.
//! Role: Public, additive-only surface used by the CLI and embedding callers.
//! Invariants: This module is the only public path to the JSON decode boundary.
//! Invariants: Internal modules remain private and are not directly exposed.

mod report;

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::plan::{
    ITINERARIES_FIELD, JsonKind, PlanResponse, Rejection, has_itineraries_array,
    inspect_plan_text, parse_plan_response,
};
pub use crate::json::parse::ParseFailureCategory;
pub use report::{ImportReport, ImportStatus};
