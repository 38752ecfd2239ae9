#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod cache;
pub mod catalog;
pub mod csv;
pub mod error;
pub mod loader;
pub mod record;
pub mod service;
pub mod settings;

use std::sync::{Arc, OnceLock};

pub use cache::CatalogCache;
pub use catalog::{Catalog, ExerciseID, ExerciseRecord};
pub use error::{AlreadyInitialized, LoadError, ReadError, RowError, SettingsError};
pub use service::Service;
pub use settings::Settings;

/// Source of the raw bytes of named resources.
pub trait ResourceRepository: Send + Sync {
    fn read_resource(&self, name: &str) -> Result<Vec<u8>, ReadError>;
}

impl<R: ResourceRepository + ?Sized> ResourceRepository for Arc<R> {
    fn read_resource(&self, name: &str) -> Result<Vec<u8>, ReadError> {
        (**self).read_resource(name)
    }
}

impl<R: ResourceRepository + ?Sized> ResourceRepository for Box<R> {
    fn read_resource(&self, name: &str) -> Result<Vec<u8>, ReadError> {
        (**self).read_resource(name)
    }
}

pub trait CatalogService {
    /// Returns all exercises, blocking until the catalog is loaded.
    fn get_all(&self) -> Catalog;
    /// Starts loading the catalog in the background.
    fn prefetch_async(&self);
    /// Returns the catalog if it is already loaded.
    fn cached_snapshot(&self) -> Option<Catalog>;
}

pub type SharedService = Service<Arc<dyn ResourceRepository>>;

static CATALOG: OnceLock<SharedService> = OnceLock::new();

/// Installs the process-wide exercise catalog.
pub fn init(
    repository: Arc<dyn ResourceRepository>,
    settings: &Settings,
) -> Result<&'static SharedService, AlreadyInitialized> {
    let mut installed = false;
    let service = CATALOG.get_or_init(|| {
        installed = true;
        Service::from_settings(repository, settings)
    });
    if installed {
        Ok(service)
    } else {
        Err(AlreadyInitialized)
    }
}

/// Returns the process-wide exercise catalog, if installed.
#[must_use]
pub fn global() -> Option<&'static SharedService> {
    CATALOG.get()
}
