//! Purpose: Provide the internal runtime JSON decode entrypoint and failure labels.
//! Exports: `from_str`, `ParseFailureCategory`, `categorize_error`, `categorize_message`,
//!          `hint_for_category`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category mapping is deterministic for a given error message.
//! Invariants: Hints never echo input text; only the category label and caller context.
//! Invariants: Numbers pass through verbatim (`arbitrary_precision`); no float range check.
//! Invariants: Nesting is capped at serde_json's 128-level recursion limit.
//! Notes: Error mapping into domain outcomes is done by callsites so context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Eof,
    Data,
    Io,
    Utf8,
    NumericRange,
    DepthLimit,
    Unknown,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Io => "io",
            ParseFailureCategory::Utf8 => "utf8",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match categorize_message(&err.to_string()) {
        ParseFailureCategory::Unknown => match err.classify() {
            Category::Syntax => ParseFailureCategory::Syntax,
            Category::Eof => ParseFailureCategory::Eof,
            Category::Data => ParseFailureCategory::Data,
            Category::Io => ParseFailureCategory::Io,
        },
        category => category,
    }
}

// serde_json folds range and depth failures into `Category::Syntax`, so the
// message text is the only place they are distinguishable.
pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let lower = message.to_ascii_lowercase();
    if lower.contains("recursion limit") {
        return ParseFailureCategory::DepthLimit;
    }
    if lower.contains("number out of range") {
        return ParseFailureCategory::NumericRange;
    }
    if lower.contains("utf-8") || lower.contains("utf8") || lower.contains("unicode code point")
    {
        return ParseFailureCategory::Utf8;
    }
    ParseFailureCategory::Unknown
}

pub(crate) fn hint_for_category(category: ParseFailureCategory, context: &str) -> String {
    format!("parse category: {}; context: {context}", category.label())
}
