use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::BucketingError;

/// An identified point with named numeric attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Opaque identifier, unique within one request.
    pub id: String,

    /// Attribute values. Only the keys passed to [`crate::cluster`] are read.
    #[serde(default)]
    pub values: HashMap<String, f64>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: HashMap::new(),
        }
    }

    /// Sets an attribute value, builder style.
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

/// Places one element into one cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub cluster: usize,
}

/// Output of a clustering run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterResult {
    /// Number of clusters formed.
    pub count: usize,

    /// One entry per input element, grouped by cluster in formation order.
    pub assignments: Vec<Assignment>,
}

impl ClusterResult {
    /// Returns member ids per cluster index.
    pub fn groups(&self) -> Vec<Vec<&str>> {
        let mut groups: Vec<Vec<&str>> = vec![Vec::new(); self.count];
        for a in &self.assignments {
            if let Some(g) = groups.get_mut(a.cluster) {
                g.push(a.id.as_str());
            }
        }
        groups
    }

    /// Returns the member count per cluster index.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.count];
        for a in &self.assignments {
            if let Some(s) = sizes.get_mut(a.cluster) {
                *s += 1;
            }
        }
        sizes
    }

    /// Returns the cluster an element was placed in, or None if unknown.
    pub fn cluster_of(&self, id: &str) -> Option<usize> {
        self.assignments
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.cluster)
    }
}

/// Human-facing name for a cluster index: "Bucket 1", "Bucket 2", ...
pub fn bucket_label(index: usize) -> String {
    format!("Bucket {}", index + 1)
}

/// A complete clustering request, as read from a file or the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRequest {
    #[serde(default)]
    pub elements: Vec<Element>,

    /// Attribute keys used as coordinates.
    #[serde(default)]
    pub keys: Vec<String>,

    /// Desired number of elements per cluster.
    #[serde(alias = "clusterSize")]
    pub cluster_size: usize,
}

impl ClusterRequest {
    /// Runs [`crate::cluster`] over this request.
    pub fn run(&self) -> Result<ClusterResult, BucketingError> {
        crate::cluster(&self.elements, &self.keys, self.cluster_size)
    }
}
