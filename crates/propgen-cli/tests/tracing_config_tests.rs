use super::*;

fn settings(vars: &[(&str, &str)]) -> LogSettings {
    LogSettings::from_lookup(|key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.to_string())
    })
}

#[test]
fn test_logging_is_off_without_directives() {
    let settings = settings(&[(LOG_FORMAT_ENV, "json")]);
    assert_eq!(settings.directives, None);
    assert_eq!(settings.format, LogFormat::Json);
    assert!(init_tracing(&settings).is_ok());
}

#[test]
fn test_propgen_log_wins_over_rust_log() {
    let both = settings(&[(LOG_ENV, "propgen_introspect=trace"), ("RUST_LOG", "warn")]);
    assert_eq!(both.directives.as_deref(), Some("propgen_introspect=trace"));

    let fallback = settings(&[("RUST_LOG", "warn")]);
    assert_eq!(fallback.directives.as_deref(), Some("warn"));
    assert_eq!(fallback.format, LogFormat::Text);
}

#[test]
fn test_format_names() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
    assert_eq!(LogFormat::parse("fancy"), LogFormat::Text);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
}

#[test]
fn test_command_line_overrides_environment() {
    let settings = settings(&[(LOG_ENV, "info"), (LOG_FORMAT_ENV, "json")])
        .with_overrides(Some("debug"), Some(LogFormat::Tree));
    assert_eq!(settings.directives.as_deref(), Some("debug"));
    assert_eq!(settings.format, LogFormat::Tree);

    let unchanged = LogSettings::default().with_overrides(None, None);
    assert_eq!(unchanged, LogSettings::default());
}
