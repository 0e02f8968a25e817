//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner, e.g. `fate 0.1.0 (2026-10-19, a1b2c3d, release)`.
pub fn version_line() -> String {
    format!(
        "fate {} ({}, {}, {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT,
        BUILD_PROFILE
    )
}
