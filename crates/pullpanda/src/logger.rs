//! stderr logging using env_logger
//!
//! stdout carries the report, so log records always go to stderr.
//! `RUST_LOG` overrides the level chosen here.

use env_logger::{Builder, Env, Target};

const QUIET_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,pullpanda=debug,pullpanda_config=debug,gh_search_client=debug";

/// Default filter for the `--enable-log` setting
fn default_filter(enable_log: bool) -> &'static str {
    if enable_log {
        VERBOSE_FILTER
    } else {
        QUIET_FILTER
    }
}

/// Initialize logging once at startup
pub fn init(enable_log: bool) {
    let env = Env::default().default_filter_or(default_filter(enable_log));

    let result = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp_millis()
        .try_init();

    if let Err(e) = result {
        eprintln!("Logger already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("pullpanda=debug"));
        assert!(default_filter(true).contains("gh_search_client=debug"));
    }
}
