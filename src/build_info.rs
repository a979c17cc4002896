//! Commit and date stamped in at compile time.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// `orb 0.1.0 (abc1234, 2026-01-31)`
pub fn version_line() -> String {
    format!(
        "{} {} ({}, {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}
