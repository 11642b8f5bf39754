use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::descriptors::DescriptorSource;
use crate::descriptors::errors::DescriptorLoadError;
use crate::descriptors::types::ApplicationDescriptor;

/// Reads descriptors from the `*.desktop` files in one directory.
#[derive(Debug, Clone)]
pub struct DesktopEntrySource {
    directory: PathBuf,
}

impl DesktopEntrySource {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn pattern(&self) -> String {
        self.directory.join("*.desktop").to_string_lossy().into_owned()
    }
}

impl DescriptorSource for DesktopEntrySource {
    fn name(&self) -> &'static str {
        "desktop-entries"
    }

    /// Glob the directory in sorted path order. Unreadable files are skipped.
    fn load(&self) -> Result<Vec<ApplicationDescriptor>, DescriptorLoadError> {
        let pattern = self.pattern();
        let paths = glob::glob(&pattern).map_err(|e| DescriptorLoadError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;

        let mut descriptors = Vec::new();
        for entry in paths {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    warn!(
                        event = "core.descriptors.entry_unreadable",
                        path = %e.path().display(),
                        error = %e
                    );
                    continue;
                }
            };

            match read_desktop_entry(&path) {
                Ok(descriptor) => descriptors.push(descriptor),
                Err(e) => warn!(
                    event = "core.descriptors.entry_skipped",
                    path = %path.display(),
                    error = %e
                ),
            }
        }

        info!(
            event = "core.descriptors.directory_loaded",
            directory = %self.directory.display(),
            count = descriptors.len()
        );
        Ok(descriptors)
    }
}

fn read_desktop_entry(path: &Path) -> Result<ApplicationDescriptor, DescriptorLoadError> {
    let content = fs::read_to_string(path).map_err(|e| DescriptorLoadError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let descriptor = parse_desktop_entry(&content);
    if !descriptor.is_valid() {
        debug!(
            event = "core.descriptors.entry_without_name",
            path = %path.display()
        );
    }
    Ok(descriptor)
}

/// Extract `Name`, `Icon`, `Exec` and `StartupWMClass` from desktop-entry text.
///
/// The first occurrence of each key wins, so `[Desktop Action]` groups that
/// follow the main group never override it. Keys match exactly: localized
/// variants such as `Name[de]` are ignored. Missing keys yield empty strings.
pub fn parse_desktop_entry(content: &str) -> ApplicationDescriptor {
    let mut name = None;
    let mut icon = None;
    let mut exec = None;
    let mut wm_class = None;

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let slot = match key.trim() {
            "Name" => &mut name,
            "Icon" => &mut icon,
            "Exec" => &mut exec,
            "StartupWMClass" => &mut wm_class,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.trim().to_string());
        }
    }

    ApplicationDescriptor {
        name: name.unwrap_or_default(),
        icon_path: icon.unwrap_or_default(),
        exec_command: exec.unwrap_or_default(),
        window_class: wm_class.unwrap_or_default(),
    }
}
