use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::descriptors::DescriptorSource;
use crate::descriptors::errors::DescriptorLoadError;
use crate::descriptors::types::ApplicationDescriptor;

/// Reads descriptors from a single JSON array file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DescriptorSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    fn load(&self) -> Result<Vec<ApplicationDescriptor>, DescriptorLoadError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DescriptorLoadError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                DescriptorLoadError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        let descriptors: Vec<ApplicationDescriptor> =
            serde_json::from_str(&content).map_err(|e| DescriptorLoadError::ParseFailed {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        info!(
            event = "core.descriptors.file_loaded",
            path = %self.path.display(),
            count = descriptors.len()
        );
        Ok(descriptors)
    }
}
