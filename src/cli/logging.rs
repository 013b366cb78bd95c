/// Logging setup. Logs only ever go to stderr; stdout carries the record.
use env_logger::{Builder, Env, Target};

/// Map the `-d` count to a default filter.
#[must_use]
pub fn default_filter(debug: u8) -> &'static str {
    match debug {
        0 => "warn",
        1 => "debug",
        2.. => "trace",
    }
}

/// Initialise `env_logger`. `RUST_LOG`, when set, wins over the `-d` count.
pub fn init(debug: u8) {
    let res = Builder::from_env(Env::default().default_filter_or(default_filter(debug)))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
    if let Err(err) = res {
        eprintln!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "debug");
        assert_eq!(default_filter(5), "trace");
    }
}
