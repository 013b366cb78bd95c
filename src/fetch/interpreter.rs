//! Interpreter selection for the fetch routine.

/// Interpreter used on Windows-family hosts.
pub const WINDOWS_INTERPRETER: &str = "python";

/// Interpreter used everywhere else.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// The interpreter name for the host this binary was built for.
#[must_use]
pub fn host_interpreter() -> &'static str {
    interpreter_for(cfg!(windows))
}

/// Pick the interpreter for a Windows or non-Windows host.
#[must_use]
pub fn interpreter_for(windows: bool) -> &'static str {
    if windows {
        WINDOWS_INTERPRETER
    } else {
        DEFAULT_INTERPRETER
    }
}

/// Resolve the interpreter, preferring an explicit override.
#[must_use]
pub fn resolve_interpreter(explicit: Option<&str>) -> String {
    explicit
        .filter(|s| !s.trim().is_empty())
        .map_or_else(|| host_interpreter().to_owned(), str::to_owned)
}
