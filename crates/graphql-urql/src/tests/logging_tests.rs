use crate::logging::resolve_log_level;

#[test]
fn unset_uses_info() {
    assert_eq!(resolve_log_level(None), (tracing::Level::INFO, None));
}

#[test]
fn known_levels_are_case_insensitive() {
    assert_eq!(resolve_log_level(Some("DEBUG")).0, tracing::Level::DEBUG);
    assert_eq!(resolve_log_level(Some(" trace ")).0, tracing::Level::TRACE);
    assert_eq!(resolve_log_level(Some("verbose")).0, tracing::Level::DEBUG);
    assert_eq!(resolve_log_level(Some("Warn")).0, tracing::Level::WARN);
}

#[test]
fn unknown_level_falls_back_with_a_warning() {
    let (level, warning) = resolve_log_level(Some("loud"));
    assert_eq!(level, tracing::Level::INFO);
    assert_eq!(
        warning.as_deref(),
        Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
    );
}
