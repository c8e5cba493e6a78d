pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod mover;
pub mod namer;
pub mod progress;
pub mod scanner;

pub use classifier::Category;
pub use config::AppConfig;
pub use engine::{CategorySummary, OrganizeEngine, RunResult};
pub use error::Error;
pub use progress::{ProgressReporter, SilentReporter};
