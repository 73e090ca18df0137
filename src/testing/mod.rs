mod memory_fs;
mod scripted_prompt;

#[allow(unused_imports)]
pub use memory_fs::MemoryFs;
#[allow(unused_imports)]
pub use scripted_prompt::ScriptedPrompt;
