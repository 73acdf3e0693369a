//! Equal-size bucketing of labeled points.
//!
//! Splits a set of identified points into clusters whose sizes differ by at
//! most one, keeping points that are close under Euclidean distance together.
//! Used to assign entities described by a few numeric attributes into
//! fixed-capacity buckets.
//!
//! # Usage
//!
//! ```
//! use giztoy_bucketing::{cluster, Element};
//!
//! let elements = vec![
//!     Element::new("a").with("x", 10.0),
//!     Element::new("b").with("x", 11.0),
//!     Element::new("c").with("x", 36.0),
//!     Element::new("d").with("x", 32.0),
//! ];
//! let res = cluster(&elements, &["x".to_string()], 2).unwrap();
//! assert_eq!(res.count, 2);
//! assert_eq!(res.cluster_of("c"), res.cluster_of("d"));
//! ```
//!
//! # Design
//!
//! This is the iterative nearest-neighbor heuristic, not K-means. [`plan`]
//! fixes every cluster size up front, then [`partition`] repeatedly takes the
//! most outlying unassigned point as a seed and fills its cluster with the
//! seed's nearest unassigned neighbours. Outliers are therefore grouped early
//! instead of being left over for the last cluster. Sizes are exact; the cost
//! is O(n^2) in the number of points.
//!
//! Results are deterministic for a given input order.

mod error;
mod metric;
mod partition;
mod plan;
mod types;

use tracing::debug;

pub use error::BucketingError;
pub use metric::sq_dist;
pub use partition::partition;
pub use plan::plan;
pub use types::{bucket_label, Assignment, ClusterRequest, ClusterResult, Element};

/// Clusters `elements` into groups of roughly `cluster_size` points.
///
/// Only the attributes named in `keys` are used as coordinates. Actual group
/// sizes come from [`plan`] and differ from `cluster_size` by at most one
/// when the element count does not divide evenly.
pub fn cluster(
    elements: &[Element],
    keys: &[String],
    cluster_size: usize,
) -> Result<ClusterResult, BucketingError> {
    let sizes = plan(elements.len(), cluster_size)?;
    debug!(
        elements = elements.len(),
        keys = keys.len(),
        cluster_size,
        groups = sizes.len(),
        "bucketing: planned sizes {:?}",
        sizes
    );
    if sizes.is_empty() {
        return Ok(ClusterResult::default());
    }
    partition(elements, keys, &sizes)
}
