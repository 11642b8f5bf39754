//! Installed-application descriptor sources.
//!
//! Two backends implement [`DescriptorSource`]: a JSON file and a directory
//! of freedesktop desktop entries. [`list_descriptors`] picks one from the
//! configuration and never fails: load errors degrade to an empty list.

pub mod desktop_entry;
pub mod errors;
pub mod file;
pub mod types;

pub use desktop_entry::{DesktopEntrySource, parse_desktop_entry};
pub use errors::DescriptorLoadError;
pub use file::JsonFileSource;
pub use types::ApplicationDescriptor;

use tracing::warn;

use crate::config::{DescriptorBackend, DescriptorConfig};

/// A read-only source of application descriptors.
pub trait DescriptorSource {
    /// The canonical name of this source (e.g., "file").
    fn name(&self) -> &'static str;

    /// Load every descriptor, in source order.
    fn load(&self) -> Result<Vec<ApplicationDescriptor>, DescriptorLoadError>;
}

/// Build the source selected by the configuration.
pub fn source_for(config: &DescriptorConfig) -> Box<dyn DescriptorSource> {
    match config.backend() {
        DescriptorBackend::File => Box::new(JsonFileSource::new(config.file())),
        DescriptorBackend::DesktopEntries => Box::new(DesktopEntrySource::new(config.directory())),
    }
}

/// Load descriptors from the configured backend.
///
/// A missing or malformed source is logged and yields an empty list.
pub fn list_descriptors(config: &DescriptorConfig) -> Vec<ApplicationDescriptor> {
    load_or_empty(source_for(config).as_ref())
}

pub fn load_or_empty(source: &dyn DescriptorSource) -> Vec<ApplicationDescriptor> {
    match source.load() {
        Ok(descriptors) => descriptors,
        Err(e) => {
            warn!(
                event = "core.descriptors.load_failed",
                source = source.name(),
                error = %e,
                "Descriptor source unavailable, continuing with no applications"
            );
            Vec::new()
        }
    }
}
