/// Environment flag set by `--verbose`.
pub const VERBOSE_ENV: &str = "TFMV_VERBOSE";

/// Whether `[VERBOSE]` diagnostics should be written to stderr.
pub fn enabled() -> bool {
    std::env::var(VERBOSE_ENV).is_ok()
}
