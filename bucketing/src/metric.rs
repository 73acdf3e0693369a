use std::collections::HashSet;

use crate::{BucketingError, Element};

/// Dense row-major coordinates, one row per element, one column per key.
///
/// Built once per call so the O(n^2) distance loops never touch the
/// per-element hash maps.
pub(crate) struct Coords {
    data: Vec<f64>,
    dim: usize,
    len: usize,
}

impl Coords {
    /// Extracts the `keys` columns from every element.
    ///
    /// Fails on a missing key, a non-finite value, or a repeated element id.
    pub(crate) fn extract(elements: &[Element], keys: &[String]) -> Result<Self, BucketingError> {
        let dim = keys.len();
        let mut data = Vec::with_capacity(elements.len() * dim);
        let mut seen: HashSet<&str> = HashSet::with_capacity(elements.len());

        for e in elements {
            if !seen.insert(e.id.as_str()) {
                return Err(BucketingError::DuplicateId(e.id.clone()));
            }
            for key in keys {
                let value = *e.values.get(key).ok_or_else(|| BucketingError::MissingKey {
                    id: e.id.clone(),
                    key: key.clone(),
                })?;
                if !value.is_finite() {
                    return Err(BucketingError::NonFinite {
                        id: e.id.clone(),
                        key: key.clone(),
                        value,
                    });
                }
                data.push(value);
            }
        }

        Ok(Self {
            data,
            dim,
            len: elements.len(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns the coordinates of element `idx`.
    pub(crate) fn row(&self, idx: usize) -> &[f64] {
        &self.data[idx * self.dim..(idx + 1) * self.dim]
    }

    /// Squared Euclidean distance between elements `i` and `j`.
    pub(crate) fn sq_dist(&self, i: usize, j: usize) -> f64 {
        sq_dist(self.row(i), self.row(j))
    }
}

/// Squared Euclidean distance: sum of (a[k] - b[k])^2.
///
/// Zero when both slices are empty.
pub fn sq_dist(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
