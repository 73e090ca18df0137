pub mod anchor;
mod error;
pub mod lines;
mod settings;

pub use error::AppError;
pub use settings::{Paths, SETTINGS_FILE, Settings, env_file, suffixed_path};
