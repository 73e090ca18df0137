mod filesystem;
mod prompt;

pub use filesystem::Filesystem;
pub use prompt::Prompt;
