//! Post-generation setup for Pandoc documentation projects.
//!
//! After a project skeleton has been rendered from the template, the
//! [`SetupPipeline`] runs a fixed list of one-shot tasks against the new
//! directory: prune unused placeholders, write `.gitignore`, check for
//! required tools, install dependencies, initialize git, and print
//! next steps.
//!
//! Every task except the `.gitignore` write is best-effort. A failure is
//! reported on the console, recorded in the [`SetupReport`], and the next
//! task runs anyway.
//!
//! # Example
//!
//! ```no_run
//! use doctool_config::ConfigLoader;
//! use doctool_setup::{Reporter, SetupPipeline, SystemRunner};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = std::path::Path::new("my-docs");
//! let config = ConfigLoader::new(dir).load()?;
//! let runner = SystemRunner::new();
//!
//! let report = SetupPipeline::new(dir, config, &runner, Reporter::stdout(true))
//!     .run()
//!     .await?;
//! assert!(report.outcomes.len() > 0);
//! # Ok(())
//! # }
//! ```

pub mod detection;
pub mod error;
pub mod outcome;
pub mod pipeline;
pub mod reporter;
pub mod runner;
pub mod tasks;
pub mod testing;

pub use detection::{detect_tool, ToolInfo};
pub use error::{SetupError, SetupResult};
pub use outcome::{SetupReport, TaskKind, TaskOutcome, TaskRecord};
pub use pipeline::{run, SetupOptions, SetupPipeline};
pub use reporter::{auto_color, IconContext, Reporter};
pub use runner::{
    CommandOutput, CommandRunner, Invocation, OutputMode, RunError, SystemRunner,
};
