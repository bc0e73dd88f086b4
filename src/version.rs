// Build-time version from Cargo.toml

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// User agent sent to the Nexus API, e.g. "nexus-board/0.1.0".
pub fn user_agent() -> String {
    format!("{}/{}", NAME, VERSION)
}
