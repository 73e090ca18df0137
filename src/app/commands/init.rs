//! Init command: write the default `envstrap.toml`.

use crate::app::AppContext;
use crate::domain::{AppError, SETTINGS_FILE};
use crate::ports::{Filesystem, Prompt};
use crate::stubs;

/// Write the default settings file into the project root.
pub fn execute<F: Filesystem, P: Prompt>(ctx: &AppContext<F, P>) -> Result<(), AppError> {
    let path = ctx.settings_path();
    if ctx.fs.exists(&path) {
        return Err(AppError::SettingsExists(SETTINGS_FILE.to_string()));
    }
    ctx.fs.write_text(&path, stubs::DEFAULT_SETTINGS)?;
    ctx.prompt.comment(&format!("Created: {}", path.display()));
    Ok(())
}
