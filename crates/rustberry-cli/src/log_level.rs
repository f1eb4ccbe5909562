use tracing::Level;

pub(crate) const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";
pub(crate) const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Picks the log level from `--verbose` and the `LOG_LEVEL` value.
///
/// `--verbose` wins and means DEBUG. Otherwise `trace`, `debug`, `info` and
/// `verbose` (an alias for `debug`) are accepted in any case. Anything else
/// falls back to [`DEFAULT_LOG_LEVEL`] and yields a warning to log once the
/// subscriber is installed.
pub(crate) fn resolve(verbose: bool, env_value: Option<&str>) -> (Level, Option<String>) {
    if verbose {
        return (Level::DEBUG, None);
    }
    let Some(raw) = env_value.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "trace" => (Level::TRACE, None),
        "debug" | "verbose" => (Level::DEBUG, None),
        "info" => (Level::INFO, None),
        _ => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Ignoring invalid `{LOG_LEVEL_ENV_VAR}` value `{raw}`.")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_overrides_env() {
        assert_eq!(resolve(true, Some("trace")), (Level::DEBUG, None));
    }

    #[test]
    fn env_values_are_case_insensitive() {
        assert_eq!(resolve(false, Some(" TRACE ")), (Level::TRACE, None));
        assert_eq!(resolve(false, Some("Verbose")), (Level::DEBUG, None));
        assert_eq!(resolve(false, Some("info")), (Level::INFO, None));
    }

    #[test]
    fn missing_env_uses_default() {
        assert_eq!(resolve(false, None), (DEFAULT_LOG_LEVEL, None));
    }

    #[test]
    fn invalid_env_warns_and_uses_default() {
        let (level, warning) = resolve(false, Some("loud"));
        assert_eq!(level, DEFAULT_LOG_LEVEL);
        assert_eq!(warning.as_deref(), Some("Ignoring invalid `LOG_LEVEL` value `loud`."));
    }
}
