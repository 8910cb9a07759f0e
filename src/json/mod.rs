//! Purpose: Internal JSON parsing boundary shared by the plan narrowing code.
//! Exports: `parse` module with decode helpers and failure categorization.
//! Role: Single seam for decoding so callsites avoid ad hoc `serde_json` calls.
//! Invariants: Runtime JSON decoding of untrusted text goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
