pub mod backup;
pub mod commands;
mod context;
pub mod injector;
pub mod materializer;
pub mod reverter;

pub use context::AppContext;
