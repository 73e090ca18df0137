mod console_prompt;
mod host_filesystem;

pub use console_prompt::ConsolePrompt;
pub use host_filesystem::HostFilesystem;
