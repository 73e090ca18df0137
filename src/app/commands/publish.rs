//! Publish command: materialize env configs and wire the bootstrap hook.

use std::path::Path;

use chrono::NaiveDate;

use crate::app::AppContext;
use crate::app::injector::{InjectOutcome, Injector};
use crate::app::materializer::Materializer;
use crate::domain::{AppError, Settings};
use crate::ports::{Filesystem, Prompt};
use crate::stubs;

use super::warn_recoverable;

/// Options for the publish command.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublishOptions {
    /// Publish everything (default when no selective flag is set).
    pub all: bool,
    /// (Re)write the detector script and bootstrap hook.
    pub bootstrap: bool,
    /// (Over)write the per-environment config files.
    pub configs: bool,
}

/// Execute the publish command.
pub fn execute<F: Filesystem, P: Prompt>(
    ctx: &AppContext<F, P>,
    options: &PublishOptions,
    today: NaiveDate,
) -> Result<(), AppError> {
    ctx.prompt.info("Started environment setup");
    let settings = ctx.load_settings()?;
    let (configs, bootstrap) = super::selected(options.all, options.bootstrap, options.configs);

    if configs {
        ctx.prompt.comment("Publishing configs");
        publish_configs(ctx, &settings)?;
        ctx.prompt.comment("Finished publishing configs");
    }

    if bootstrap {
        ctx.prompt.comment("Bootstrapping the application");
        publish_bootstrap(ctx, &settings, today)?;
        ctx.prompt.comment("Finished bootstrapping the application");
    }

    ctx.prompt.info("Finished environment setup");
    Ok(())
}

fn publish_configs<F: Filesystem, P: Prompt>(
    ctx: &AppContext<F, P>,
    settings: &Settings,
) -> Result<(), AppError> {
    if settings.environments.is_empty() {
        ctx.prompt.warn("Cannot create configs: no environments configured");
        ctx.prompt.warn("Add an [environments] table to envstrap.toml");
        return Ok(());
    }

    let template = ctx.resolve(&settings.paths.env_template);
    if !ctx.fs.exists(&template) {
        ctx.prompt
            .warn(&format!("Cannot create configs: {} does not exist", template.display()));
        return Ok(());
    }

    let names: Vec<&str> = settings.environments.keys().map(String::as_str).collect();
    Materializer::new(&ctx.fs, &ctx.prompt).materialize(&template, &names)?;
    Ok(())
}

fn publish_bootstrap<F: Filesystem, P: Prompt>(
    ctx: &AppContext<F, P>,
    settings: &Settings,
    today: NaiveDate,
) -> Result<(), AppError> {
    if settings.environments.is_empty() {
        ctx.prompt.warn("Cannot bootstrap: no environments configured");
        return Ok(());
    }

    let target = ctx.resolve(&settings.paths.bootstrap);
    let detector = ctx.resolve(&settings.paths.detector);

    // The detector is generated content; refresh it on every publish so it
    // tracks the current environment map.
    let script = stubs::render_detector(&settings.environments)?;
    ctx.fs.write_text(&detector, &script)?;
    ctx.prompt.comment(&format!("Wrote detector: {}", detector.display()));

    let injector = Injector::new(&ctx.fs);
    let Some(outcome) = run_injection(ctx, &injector, &target, today, false)? else {
        return Ok(());
    };

    match outcome {
        InjectOutcome::Injected { backup } => {
            report_injected(ctx, &target, &backup);
            Ok(())
        }
        InjectOutcome::AlreadyBackedUp { latest } => {
            ctx.prompt.warn(&format!(
                "{} is already backed up ({})",
                target.display(),
                latest.display()
            ));
            if !ctx.prompt.confirm("Would you like to bootstrap anyway?")? {
                ctx.prompt.comment(&format!("{} unchanged", target.display()));
                return Ok(());
            }
            // With proceed set, AlreadyBackedUp can no longer come back.
            if let Some(InjectOutcome::Injected { backup }) =
                run_injection(ctx, &injector, &target, today, true)?
            {
                report_injected(ctx, &target, &backup);
            }
            Ok(())
        }
    }
}

fn run_injection<F: Filesystem, P: Prompt>(
    ctx: &AppContext<F, P>,
    injector: &Injector<'_, F>,
    target: &Path,
    today: NaiveDate,
    proceed: bool,
) -> Result<Option<InjectOutcome>, AppError> {
    match injector.inject(target, stubs::REQUIRE_STUB, today, proceed) {
        Ok(outcome) => Ok(Some(outcome)),
        Err(err) => warn_recoverable(&ctx.prompt, err).map(|()| None),
    }
}

fn report_injected<F: Filesystem, P: Prompt>(ctx: &AppContext<F, P>, target: &Path, backup: &Path) {
    let backup_name = backup
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| backup.display().to_string());
    ctx.prompt.comment(&format!("Backed up: {backup_name}"));
    ctx.prompt.comment(&format!("Bootstrapped: {}", target.display()));
}
