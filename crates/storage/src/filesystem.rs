use std::{
    io,
    path::{Component, Path, PathBuf},
};

use catalog_domain::{self as domain, ReadError};

/// Resources stored as files in a single directory.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: PathBuf,
}

impl Filesystem {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn from_settings(settings: &domain::Settings) -> Self {
        Self::new(&settings.directory)
    }

    fn path(&self, name: &str) -> Option<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file_name)), None) => Some(self.root.join(file_name)),
            _ => None,
        }
    }
}

impl domain::ResourceRepository for Filesystem {
    fn read_resource(&self, name: &str) -> Result<Vec<u8>, ReadError> {
        let Some(path) = self.path(name) else {
            return Err(ReadError::NotFound(name.to_string()));
        };

        std::fs::read(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound(name.to_string()),
            _ => ReadError::Other(Box::new(err)),
        })
    }
}
