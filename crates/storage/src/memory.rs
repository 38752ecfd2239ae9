use std::collections::HashMap;

use catalog_domain::{self as domain, ReadError};

/// Resources held in memory, e.g. embedded into the binary.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    resources: HashMap<String, Vec<u8>>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.resources.insert(name.into(), bytes.into());
        self
    }
}

impl<N: Into<String>, B: Into<Vec<u8>>> FromIterator<(N, B)> for Memory {
    fn from_iter<I: IntoIterator<Item = (N, B)>>(iter: I) -> Self {
        Self {
            resources: iter
                .into_iter()
                .map(|(name, bytes)| (name.into(), bytes.into()))
                .collect(),
        }
    }
}

impl domain::ResourceRepository for Memory {
    fn read_resource(&self, name: &str) -> Result<Vec<u8>, ReadError> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| ReadError::NotFound(name.to_string()))
    }
}
