/// Output: the single JSON record written to stdout, plus a debug timer.
use std::io::Write;

use serde::Serialize;

use super::args::OutputFormat;
use crate::fetch::FetchError;
use crate::types::{ErrorOutput, ProfileRecord};

/// Resolve the effective output format, handling the `--pretty` flag.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, pretty_flag: bool) -> OutputFormat {
    if pretty_flag { OutputFormat::Json } else { fmt }
}

/// Output context passed to the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    pub format: OutputFormat,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, pretty_flag: bool) -> Self {
        Self {
            format: resolve_format(fmt, pretty_flag),
        }
    }

    /// Start a named timer. Logs the elapsed time on drop at debug level.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label)
    }

    /// Serialize a value in this context's format.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; nothing has been written at that point.
    pub fn render<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        match self.format {
            OutputFormat::Compact => serde_json::to_string(value),
            OutputFormat::Json => serde_json::to_string_pretty(value),
        }
    }
}

/// Write a decoded profile to stdout.
///
/// The record is rendered in full before anything is written.
///
/// # Errors
///
/// Returns `FetchError::Encode` if the record cannot be serialized.
pub fn write_profile(record: &ProfileRecord, ctx: &OutputCtx) -> Result<(), FetchError> {
    let s = ctx.render(record).map_err(FetchError::Encode)?;
    write_stdout(&s);
    Ok(())
}

/// Write a structured error record to stdout.
pub fn write_error(err: &ErrorOutput, ctx: &OutputCtx) {
    // A single-string map cannot fail to serialize.
    let s = ctx.render(err).unwrap_or_default();
    write_stdout(&s);
}

fn write_stdout(s: &str) {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = writeln!(out, "{s}").and_then(|()| out.flush()) {
        log::warn!("failed to write to stdout: {e}");
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing unless debug logging is on.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if log::log_enabled!(log::Level::Debug) {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            log::debug!("{}: {ms:.2}ms", self.label);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_flag_forces_json() {
        assert_eq!(resolve_format(OutputFormat::Compact, true), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Compact, false), OutputFormat::Compact);
        assert_eq!(resolve_format(OutputFormat::Json, false), OutputFormat::Json);
    }

    #[test]
    fn test_render_formats() {
        let err = ErrorOutput {
            error: "Username required".to_owned(),
        };
        let compact = OutputCtx::new(OutputFormat::Compact, false).render(&err).unwrap();
        assert_eq!(compact, r#"{"error":"Username required"}"#);

        let pretty = OutputCtx::new(OutputFormat::Json, false).render(&err).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<ErrorOutput>(&pretty).unwrap(),
            err
        );
    }
}
