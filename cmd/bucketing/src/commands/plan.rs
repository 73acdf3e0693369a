//! Size planning command.

use clap::Args;
use serde::Serialize;

use giztoy_bucketing::plan;

use super::emit;
use crate::Cli;

/// Print the bucket sizes for an element count.
#[derive(Args)]
pub struct PlanCommand {
    /// Number of elements to split
    #[arg(short = 'n', long)]
    count: usize,

    /// Desired elements per bucket
    #[arg(short = 's', long)]
    size: usize,
}

#[derive(Debug, Serialize)]
struct PlanOutput {
    count: usize,
    sizes: Vec<usize>,
}

impl PlanCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        emit(&self.plan()?, cli.output.as_deref(), cli.json)
    }

    fn plan(&self) -> anyhow::Result<PlanOutput> {
        let sizes = plan(self.count, self.size)?;
        Ok(PlanOutput {
            count: sizes.len(),
            sizes,
        })
    }
}
