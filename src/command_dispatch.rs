//! Purpose: Hold top-level CLI command dispatch for `plan-import`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: `check` always prints a report; only its exit code differs by outcome.
//! Invariants: `show` prints the payload unchanged or fails with `Unrecognized`.

use super::*;
use super::input::{inspect_bytes, read_input};
use plan_import::api::{ImportReport, Rejection};

pub(super) fn dispatch_command(
    command: Command,
    color_mode: ColorMode,
) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "plan-import", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_json(
                json!({
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                }),
                color_mode,
            );
            Ok(RunOutcome::ok())
        }
        Command::Check { input } => {
            let source = input.source();
            let bytes = read_input(&source, input.max_bytes)?;
            let report =
                ImportReport::from_outcome(&inspect_bytes(&bytes)).with_source(source.label());
            tracing::info!(
                source = %source.label(),
                status = report.status.label(),
                reason = report.reason.as_deref().unwrap_or("-"),
                "checked input"
            );
            emit_json(report.to_json(), color_mode);
            if report.is_accepted() {
                Ok(RunOutcome::ok())
            } else {
                Ok(RunOutcome::with_code(to_exit_code(ErrorKind::Unrecognized)))
            }
        }
        Command::Show { input, itineraries } => {
            let source = input.source();
            let bytes = read_input(&source, input.max_bytes)?;
            let plan =
                inspect_bytes(&bytes).map_err(|rejection| unrecognized(&rejection, &source))?;
            let value = if itineraries {
                Value::Array(plan.itineraries().to_vec())
            } else {
                plan.into_value()
            };
            emit_json(value, color_mode);
            Ok(RunOutcome::ok())
        }
    }
}

fn unrecognized(rejection: &Rejection, source: &InputSource) -> Error {
    let mut err = Error::new(ErrorKind::Unrecognized)
        .with_message(format!("input is not a plan response: {rejection}"))
        .with_hint(rejection.hint());
    if let Some(path) = source.path() {
        err = err.with_path(path);
    }
    err
}
