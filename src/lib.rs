//! envstrap: publish per-environment config files and wire an environment
//! detector into an application's bootstrap file.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod stubs;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{ConsolePrompt, HostFilesystem};
use app::{AppContext, commands};

pub use app::commands::publish::PublishOptions;
pub use app::commands::unpublish::UnpublishOptions;
pub use domain::AppError;

/// Write the default `envstrap.toml` into the current directory.
pub fn init() -> Result<(), AppError> {
    let ctx = host_context()?;
    commands::init::execute(&ctx)?;
    println!("✅ Initialized envstrap settings");
    Ok(())
}

/// Publish per-environment config files and/or the bootstrap hook.
pub fn publish(options: PublishOptions) -> Result<(), AppError> {
    let ctx = host_context()?;
    let today = chrono::Local::now().date_naive();
    commands::publish::execute(&ctx, &options, today)
}

/// Remove published files and restore the bootstrap file.
pub fn unpublish(options: UnpublishOptions) -> Result<(), AppError> {
    let ctx = host_context()?;
    commands::unpublish::execute(&ctx, &options)
}

fn host_context() -> Result<AppContext<HostFilesystem, ConsolePrompt>, AppError> {
    let root = std::env::current_dir()?;
    Ok(AppContext::new(HostFilesystem, ConsolePrompt, root))
}
