//! Embedded stub templates published into managed projects.
//!
//! The require stub is the block spliced into the bootstrap file; its
//! content must stay byte-identical between publish and unpublish so
//! removal-by-exact-match keeps working.

use std::collections::BTreeMap;

use minijinja::{Environment, context};

use crate::domain::AppError;

/// Block injected into the bootstrap file, verbatim.
pub static REQUIRE_STUB: &str = include_str!("stubs/require.stub");

/// Detector script template, rendered with the configured environment map.
pub static DETECTOR_TEMPLATE: &str = include_str!("stubs/environment_detector.stub");

/// Default `envstrap.toml` written by `envstrap init`.
pub static DEFAULT_SETTINGS: &str = include_str!("stubs/envstrap.toml");

/// Token whose presence marks a bootstrap file as carrying the detector hook.
pub const DETECTOR_TOKEN: &str = "environment_detector";

/// Render the detector script for the configured environments.
pub fn render_detector(environments: &BTreeMap<String, String>) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template("environment_detector", DETECTOR_TEMPLATE)?;
    let rendered = env
        .get_template("environment_detector")?
        .render(context! { environments })?;
    Ok(rendered)
}
