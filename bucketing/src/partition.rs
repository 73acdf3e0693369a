use tracing::debug;

use crate::metric::Coords;
use crate::{Assignment, BucketingError, ClusterResult, Element};

/// Groups `elements` into clusters whose sizes follow `size_plan` exactly.
///
/// For each planned group, the unassigned element with the largest summed
/// squared distance to the rest of the pool becomes the seed, and its
/// `size - 1` nearest unassigned neighbours join it. Ties go to the element
/// that comes first in input order, both for the seed and for neighbours.
///
/// # Parameters
/// - `elements`: the points; ids must be unique
/// - `keys`: attribute keys used as coordinates (may be empty)
/// - `size_plan`: positive group sizes summing to `elements.len()`
///
/// # Returns
/// Assignments grouped by cluster in formation order. Within a cluster the
/// seed comes first, then neighbours nearest-first.
pub fn partition(
    elements: &[Element],
    keys: &[String],
    size_plan: &[usize],
) -> Result<ClusterResult, BucketingError> {
    let planned: usize = size_plan.iter().sum();
    if planned != elements.len() {
        return Err(BucketingError::PlanMismatch {
            expected: elements.len(),
            got: planned,
        });
    }
    if let Some(index) = size_plan.iter().position(|&s| s == 0) {
        return Err(BucketingError::EmptyGroup { index });
    }

    let coords = Coords::extract(elements, keys)?;

    // Unassigned element indices, kept in input order.
    let mut pool: Vec<usize> = (0..coords.len()).collect();
    let mut taken = vec![false; coords.len()];
    let mut assignments = Vec::with_capacity(elements.len());

    for (cluster, &size) in size_plan.iter().enumerate() {
        let seed_pos = select_seed(&coords, &pool);
        let seed = pool.remove(seed_pos);

        let members = nearest(&coords, &pool, seed, size - 1);
        for &m in &members {
            taken[m] = true;
        }
        pool.retain(|&i| !taken[i]);

        debug!(
            cluster,
            seed = %elements[seed].id,
            size,
            remaining = pool.len(),
            "bucketing: formed group"
        );

        assignments.push(Assignment {
            id: elements[seed].id.clone(),
            cluster,
        });
        assignments.extend(members.into_iter().map(|m| Assignment {
            id: elements[m].id.clone(),
            cluster,
        }));
    }

    debug_assert!(pool.is_empty(), "plan exhausted with {} unassigned", pool.len());

    Ok(ClusterResult {
        count: size_plan.len(),
        assignments,
    })
}

/// Returns the pool position of the most outlying element: the one with the
/// largest summed squared distance to every pool member. First wins on ties.
fn select_seed(coords: &Coords, pool: &[usize]) -> usize {
    let mut best_pos = 0;
    let mut best_sum = f64::NEG_INFINITY;
    for (pos, &i) in pool.iter().enumerate() {
        let sum: f64 = pool.iter().map(|&j| coords.sq_dist(i, j)).sum();
        if sum > best_sum {
            best_sum = sum;
            best_pos = pos;
        }
    }
    best_pos
}

/// Returns the `k` pool members closest to `seed`, nearest first.
/// Equal distances keep pool order.
fn nearest(coords: &Coords, pool: &[usize], seed: usize, k: usize) -> Vec<usize> {
    let mut by_dist: Vec<(usize, f64)> = pool
        .iter()
        .map(|&i| (i, coords.sq_dist(i, seed)))
        .collect();
    // sort_by is stable.
    by_dist.sort_by(|a, b| a.1.total_cmp(&b.1));
    by_dist.into_iter().take(k).map(|(i, _)| i).collect()
}
