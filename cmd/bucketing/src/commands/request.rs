//! Loading `run` requests from files or stdin.

use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use giztoy_bucketing::Element;

/// Request document for `bucketing run`. Every field may be overridden from flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub elements: Vec<Element>,

    #[serde(default)]
    pub keys: Vec<String>,

    #[serde(default, alias = "clusterSize")]
    pub cluster_size: Option<usize>,
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("cannot read {source_name}: {err}")]
    Read { source_name: String, err: io::Error },
    #[error("invalid JSON request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML request: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from the file extension, else from the first
    /// non-blank byte: `{` means JSON, anything else is read as YAML.
    fn detect(path: Option<&Path>, data: &[u8]) -> Self {
        let ext = path
            .and_then(|p| p.extension())
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Format::Json,
            Some("yaml" | "yml") => Format::Yaml,
            _ => match data.iter().find(|b| !b.is_ascii_whitespace()) {
                Some(b'{') => Format::Json,
                _ => Format::Yaml,
            },
        }
    }
}

/// Loads a request from `path`, or from stdin when `path` is None or "-".
pub fn load_run_request(path: Option<&str>) -> Result<RunRequest, RequestError> {
    match path {
        None | Some("-") => {
            let mut data = Vec::new();
            io::stdin()
                .read_to_end(&mut data)
                .map_err(|err| RequestError::Read {
                    source_name: "stdin".into(),
                    err,
                })?;
            parse_run_request(&data, None)
        }
        Some(p) => {
            let data = std::fs::read(p).map_err(|err| RequestError::Read {
                source_name: p.to_string(),
                err,
            })?;
            parse_run_request(&data, Some(Path::new(p)))
        }
    }
}

/// Parses a request document. `path` only serves as a format hint.
pub fn parse_run_request(data: &[u8], path: Option<&Path>) -> Result<RunRequest, RequestError> {
    let req = match Format::detect(path, data) {
        Format::Json => serde_json::from_slice(data)?,
        Format::Yaml => serde_yaml::from_slice(data)?,
    };
    Ok(req)
}
