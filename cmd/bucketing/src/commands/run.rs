//! Clustering command.

use clap::Args;
use serde::Serialize;
use tracing::info;

use giztoy_bucketing::{bucket_label, ClusterRequest, ClusterResult};

use super::{emit, load_run_request, RunRequest};
use crate::Cli;

/// Bucket size used when neither the request nor the flags set one.
pub const DEFAULT_CLUSTER_SIZE: usize = 50;

/// Cluster the elements of a request into buckets.
#[derive(Args)]
pub struct RunCommand {
    /// Desired elements per bucket (overrides the request file)
    #[arg(short = 's', long)]
    size: Option<usize>,

    /// Attribute key to cluster on; repeat for more (overrides the request file)
    #[arg(short = 'k', long = "key")]
    keys: Vec<String>,

    /// Emit members grouped per bucket instead of a flat assignment list
    #[arg(long)]
    grouped: bool,
}

/// One bucket in grouped output.
#[derive(Debug, Clone, Serialize)]
pub struct Bucket<'a> {
    pub label: String,
    pub members: Vec<&'a str>,
}

impl RunCommand {
    pub fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        let req = load_run_request(cli.input.as_deref())?;
        let req = self.resolve(req)?;

        info!(
            elements = req.elements.len(),
            keys = ?req.keys,
            cluster_size = req.cluster_size,
            "clustering"
        );

        let res = req.run()?;
        info!(buckets = res.count, sizes = ?res.sizes(), "done");

        if self.grouped {
            emit(&grouped(&res), cli.output.as_deref(), cli.json)
        } else {
            emit(&res, cli.output.as_deref(), cli.json)
        }
    }

    /// Applies flag overrides and defaults, then validates the request.
    fn resolve(&self, req: RunRequest) -> anyhow::Result<ClusterRequest> {
        let keys = if self.keys.is_empty() {
            req.keys
        } else {
            self.keys.clone()
        };
        if keys.is_empty() {
            anyhow::bail!("no keys selected, use -k or set `keys` in the request");
        }

        let cluster_size = self
            .size
            .or(req.cluster_size)
            .unwrap_or(DEFAULT_CLUSTER_SIZE);
        if cluster_size == 0 {
            anyhow::bail!("bucket size must be greater than 0");
        }

        Ok(ClusterRequest {
            elements: req.elements,
            keys,
            cluster_size,
        })
    }
}

/// Regroups a flat assignment into labeled buckets.
fn grouped(res: &ClusterResult) -> Vec<Bucket<'_>> {
    res.groups()
        .into_iter()
        .enumerate()
        .map(|(i, members)| Bucket {
            label: bucket_label(i),
            members,
        })
        .collect()
}
