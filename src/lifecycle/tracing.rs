//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! The output is compact and hides the module prefix (`with_target(false)`);
//! the `restaurant` field on each event already says where it came from.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Menu mutations and actor lifecycle
//! RUST_LOG=info cargo run
//!
//! # Open checks, lookups and order totals as well
//! RUST_LOG=debug cargo run
//!
//! # Only this crate
//! RUST_LOG=restaurant_recipe=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Menu**: items added or removed, with the resulting menu size
//! - **Orders**: order totals, and selected names that are not on the menu (`warn`)
//! - **Actor Lifecycle**: startup and shutdown with the final menu size
//!
//! ```text
//! INFO Actor started restaurant="Amelie's cafe" size=2
//! INFO Added to menu restaurant="Amelie's cafe" item=Momos price=319
//! WARN Remove failed: not on menu restaurant="Amelie's cafe" item="Sizzling brownie"
//! ```

/// Installs the global subscriber. Call once, at the start of `main`.
///
/// Verbosity comes from `RUST_LOG`; with it unset only errors are shown.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
