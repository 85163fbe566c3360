//! Output switches read from the environment
//!
//! Quiet mode and colour suppression shared by every command.

/// Check if quiet mode is enabled via the `PRIMER_QUIET` environment variable
pub fn is_quiet() -> bool {
    std::env::var("PRIMER_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Colour is off when `NO_COLOR` is set, whatever the config says
pub fn color_allowed(configured: bool) -> bool {
    configured && std::env::var_os("NO_COLOR").is_none()
}
