//! CLI commands module.

mod output;
mod plan;
mod request;
mod run;

pub use plan::PlanCommand;
pub use run::RunCommand;

pub(crate) use output::emit;
pub(crate) use request::{load_run_request, RunRequest};
