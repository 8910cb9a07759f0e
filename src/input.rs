//! Purpose: Resolve and read CLI input text from `--text`, a file path, or stdin.
//! Exports: `InputSource`, `DEFAULT_MAX_BYTES`, `read_input`, `inspect_bytes`.
//! Role: Input loading for `check`/`show`; keeps file and stdin handling out of dispatch.
//! Invariants: Reads are capped at `max_bytes`; oversized input is a usage error, never truncated.
//! Invariants: Invalid UTF-8 is a rejection outcome, not an I/O error.
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use plan_import::api::{
    Error, ErrorKind, ParseFailureCategory, PlanResponse, Rejection, inspect_plan_text,
};

pub(crate) const DEFAULT_MAX_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputSource {
    Inline(String),
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub(crate) fn resolve(text: Option<String>, path: Option<PathBuf>) -> Self {
        if let Some(text) = text {
            return InputSource::Inline(text);
        }
        match path {
            Some(path) if path != Path::new("-") => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    pub(crate) fn label(&self) -> String {
        match self {
            InputSource::Inline(_) => "inline".to_string(),
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            InputSource::File(path) => Some(path),
            _ => None,
        }
    }
}

pub(crate) fn read_input(source: &InputSource, max_bytes: u64) -> Result<Vec<u8>, Error> {
    let bytes = match source {
        InputSource::Inline(text) => text.as_bytes().to_vec(),
        InputSource::Stdin => read_capped(io::stdin().lock(), max_bytes)
            .map_err(|err| Error::from_io(err).with_message("failed to read stdin"))?,
        InputSource::File(path) => {
            let file = File::open(path).map_err(|err| {
                Error::from_io(err)
                    .with_message("failed to open input file")
                    .with_path(path)
            })?;
            read_capped(file, max_bytes).map_err(|err| {
                Error::from_io(err)
                    .with_message("failed to read input file")
                    .with_path(path)
            })?
        }
    };

    if bytes.len() as u64 > max_bytes {
        let mut err = Error::new(ErrorKind::Usage)
            .with_message(format!("input exceeds {max_bytes} bytes"))
            .with_hint("Raise --max-bytes or trim the input.");
        if let Some(path) = source.path() {
            err = err.with_path(path);
        }
        return Err(err);
    }
    tracing::debug!(source = %source.label(), bytes = bytes.len(), "read input");
    Ok(bytes)
}

// Reads one byte past the cap so the caller can tell "exactly max" from "too large".
fn read_capped<R: Read>(reader: R, max_bytes: u64) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.take(max_bytes.saturating_add(1)).read_to_end(&mut buf)?;
    Ok(buf)
}

pub(crate) fn inspect_bytes(bytes: &[u8]) -> Result<PlanResponse, Rejection> {
    match std::str::from_utf8(bytes) {
        Ok(text) => inspect_plan_text(text),
        Err(_) => Err(Rejection::Malformed {
            category: ParseFailureCategory::Utf8,
        }),
    }
}
