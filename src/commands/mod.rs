//! Command dispatch and handlers.

pub mod check;
pub mod generate;

use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// When `KEYMINT_REPLAY` is set, ports are served from that cassette file,
/// or from the per-port cassettes of a recorded session directory. When
/// `KEYMINT_RECORD` is set to a directory path, all port interactions are
/// recorded to per-port cassette files under that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, settings: &Settings) -> Result<(), String> {
    let (ctx, session) = if let Some(path) = &settings.replay_path {
        tracing::info!(path = %path.display(), "replaying cassette");
        let ctx = if path.is_dir() {
            ServiceContext::replaying_from(&CassetteConfig::session_dir(path))?
        } else {
            ServiceContext::replaying(path)?
        };
        (ctx, None)
    } else if let Some(dir) = &settings.record_dir {
        let (ctx, session) = ServiceContext::recording_at(dir)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    // The handler consumes the context, so every recorder reference is
    // released before the session is finished.
    let result = dispatch_with_context(command, settings, ctx);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        finish_recording(session)?;
    }

    result
}

/// Dispatch a command with the given service context.
fn dispatch_with_context(
    command: &Command,
    settings: &Settings,
    ctx: ServiceContext,
) -> Result<(), String> {
    match command {
        Command::Generate { count, layout, json } => {
            let count = usize::try_from(*count).map_err(|e| format!("Invalid count: {e}"))?;
            generate::run(ctx, count, layout.unwrap_or(settings.layout), *json)
        }
        Command::Check { ids } => check::run(ids),
    }
}

/// Finish a recording session and log the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    tracing::info!(dir = %output_dir.display(), "recording saved");
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
