//! solid - the five SOLID design principles as runnable Rust
//!
//! Every principle lives in its own module under [`principles`] with a
//! violating design next to the corrected one. The [`playground`] evaluates
//! a principle's scenario and records each inspected value, and [`report`]
//! renders the result as text or NDJSON.

pub mod config;
pub mod error;
pub mod playground;
pub mod principle;
pub mod principles;
pub mod report;

// Re-exports for convenience
pub use config::{Config, OutputFormat, Verbosity};
pub use error::{SolidError, SolidResult};
pub use playground::{Fixtures, Inspection, Playground, PrincipleReport};
pub use principle::Principle;
pub use report::{render, render_json, render_text};
