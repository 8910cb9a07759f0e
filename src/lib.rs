//! Purpose: Library crate behind the `plan-import` CLI and its tests.
//! Exports: `api` (stable entrypoints) and `core` (plan narrowing, errors).
//! Role: Decide whether pasted text is a usable plan response payload.
//! Invariants: Core routines are pure; no I/O happens below the CLI layer.
//! Invariants: Untrusted text never causes a panic or an escaping error.
pub mod api;
pub mod core;
pub(crate) mod json;
