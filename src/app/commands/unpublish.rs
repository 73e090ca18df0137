//! Unpublish command: remove published files and restore the bootstrap file.

use crate::app::AppContext;
use crate::app::backup::{BackupLocator, suffixed_entries};
use crate::app::reverter::{Reverter, StubRemoval};
use crate::domain::{AppError, Settings, env_file};
use crate::ports::{Filesystem, Prompt};
use crate::stubs;

use super::warn_recoverable;

/// Options for the unpublish command.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnpublishOptions {
    /// Remove everything (default when no selective flag is set).
    pub all: bool,
    /// Remove the detector script and restore the bootstrap file.
    pub bootstrap: bool,
    /// Remove the per-environment config files and the settings file.
    pub configs: bool,
}

/// Execute the unpublish command.
pub fn execute<F: Filesystem, P: Prompt>(
    ctx: &AppContext<F, P>,
    options: &UnpublishOptions,
) -> Result<(), AppError> {
    ctx.prompt.info("Started removing environment setup");
    let settings = ctx.load_settings()?;
    let (configs, bootstrap) = super::selected(options.all, options.bootstrap, options.configs);

    if bootstrap {
        ctx.prompt.comment("Removing bootstrapping from the application");
        unpublish_bootstrap(ctx, &settings)?;
        ctx.prompt.comment("Finished removing bootstrapping");
    }

    if configs {
        ctx.prompt.comment("Removing configs");
        unpublish_configs(ctx, &settings)?;
        ctx.prompt.comment("Finished removing configs");
    }

    ctx.prompt.info("Finished removing environment setup");
    Ok(())
}

fn unpublish_bootstrap<F: Filesystem, P: Prompt>(
    ctx: &AppContext<F, P>,
    settings: &Settings,
) -> Result<(), AppError> {
    let detector = ctx.resolve(&settings.paths.detector);
    if !ctx.fs.exists(&detector) {
        ctx.prompt
            .warn(&format!("Could not locate {} for removal", detector.display()));
    } else {
        match ctx.fs.remove(&detector) {
            Ok(()) => ctx.prompt.comment(&format!("Removed: {}", detector.display())),
            Err(err) => ctx
                .prompt
                .warn(&format!("Could not remove {}: {err}", detector.display())),
        }
    }

    restore_bootstrap(ctx, settings)
}

fn restore_bootstrap<F: Filesystem, P: Prompt>(
    ctx: &AppContext<F, P>,
    settings: &Settings,
) -> Result<(), AppError> {
    let target = ctx.resolve(&settings.paths.bootstrap);
    let reverter = Reverter::new(&ctx.fs);

    if let Some(backup) = BackupLocator::new(&ctx.fs).latest(&target)? {
        match reverter.restore(&target, &backup) {
            Ok(()) => ctx.prompt.comment("Latest backup restored"),
            Err(err) => ctx.prompt.warn(&format!("Could not restore latest backup: {err}")),
        }
        return Ok(());
    }

    ctx.prompt.warn(&format!("No backups of {} found", target.display()));
    let question = format!(
        "No backup detected, attempt to remove the detector hook from {}?",
        target.display()
    );
    if !ctx.prompt.confirm(&question)? {
        ctx.prompt.comment(&format!("{} unchanged", target.display()));
        return Ok(());
    }

    match reverter.remove_stub(&target, stubs::REQUIRE_STUB, stubs::DETECTOR_TOKEN) {
        Ok(StubRemoval::Removed) => {
            ctx.prompt
                .info(&format!("Detector hook removed from {}", target.display()));
            Ok(())
        }
        Ok(StubRemoval::NotPresent) => {
            ctx.prompt
                .info(&format!("No mention of the environment detector in {}", target.display()));
            Ok(())
        }
        Ok(StubRemoval::Unconfirmed) => {
            ctx.prompt.warn(&format!(
                "Unable to confirm the detector hook was removed from {}",
                target.display()
            ));
            Ok(())
        }
        Err(err) => warn_recoverable(&ctx.prompt, err),
    }
}

fn unpublish_configs<F: Filesystem, P: Prompt>(
    ctx: &AppContext<F, P>,
    settings: &Settings,
) -> Result<(), AppError> {
    let template = ctx.resolve(&settings.paths.env_template);
    let example = env_file(&template, "example");

    let published: Vec<_> = suffixed_entries(&ctx.fs, &template)?
        .into_iter()
        .filter(|path| *path != example)
        .collect();

    if published.is_empty() {
        ctx.prompt.comment("No published configs found");
    }
    for path in published {
        match ctx.fs.remove(&path) {
            Ok(()) => ctx.prompt.comment(&format!("Removed: {}", path.display())),
            Err(err) => ctx.prompt.warn(&format!("Could not remove {}: {err}", path.display())),
        }
    }

    let settings_path = ctx.settings_path();
    if ctx.fs.exists(&settings_path) {
        match ctx.fs.remove(&settings_path) {
            Ok(()) => ctx.prompt.comment(&format!("Removed: {}", settings_path.display())),
            Err(err) => ctx
                .prompt
                .warn(&format!("Could not remove {}: {err}", settings_path.display())),
        }
    }
    Ok(())
}
