use std::path::PathBuf;

use crate::config::Settings;
use crate::consts::OUTPUT_FILE;
use crate::core::{locate_session, merge_messages};
use crate::error::AppError;
use crate::output::{destination_dir, write_session};
use crate::utils::{debug_enabled, format_mtime};

/// What a run produced
#[derive(Debug)]
pub(crate) enum Outcome {
    /// No session mentions the workspace; nothing was written
    NotFound,
    DryRun(Report),
    Copied(Report),
}

#[derive(Debug)]
pub(crate) struct Report {
    pub(crate) session_id: String,
    pub(crate) messages: usize,
    pub(crate) skipped: usize,
    pub(crate) destination: PathBuf,
}

/// Locate, merge and write, in that order
pub(crate) fn run(settings: &Settings) -> Result<Outcome, AppError> {
    let Some(session) =
        locate_session(&settings.storage, &settings.marker, settings.scan_limit)
    else {
        return Ok(Outcome::NotFound);
    };

    if debug_enabled() {
        eprintln!(
            "[DEBUG] Selected {} (modified {})",
            session.id,
            format_mtime(session.modified)
        );
    }

    let result = merge_messages(&session);
    let dest_dir = destination_dir(&settings.workspace, &settings.log_dir);

    if debug_enabled() {
        eprintln!(
            "[DEBUG] Merged {} messages, {} skipped",
            result.session.messages.len(),
            result.skipped
        );
    }

    if settings.dry_run {
        return Ok(Outcome::DryRun(Report {
            session_id: result.session.session_id,
            messages: result.session.messages.len(),
            skipped: result.skipped,
            destination: dest_dir.join(OUTPUT_FILE),
        }));
    }

    let destination = write_session(&dest_dir, &result.session)?;
    Ok(Outcome::Copied(Report {
        messages: result.session.messages.len(),
        session_id: result.session.session_id,
        skipped: result.skipped,
        destination,
    }))
}

/// User-facing summary on stdout
pub(crate) fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::NotFound => println!("No active session found for this project."),
        Outcome::DryRun(report) => println!(
            "Session {} would be copied to {} ({} messages, {} skipped)",
            report.session_id,
            report.destination.display(),
            report.messages,
            report.skipped
        ),
        Outcome::Copied(report) => println!(
            "Session {} copied to {}",
            report.session_id,
            report.destination.display()
        ),
    }
}
