use crate::{Catalog, CatalogCache, CatalogService, ResourceRepository, Settings};

pub struct Service<R> {
    cache: CatalogCache<R>,
}

impl<R: ResourceRepository + 'static> Service<R> {
    pub fn new(repository: R, resource: &str) -> Self {
        Self {
            cache: CatalogCache::new(repository, resource),
        }
    }

    pub fn from_settings(repository: R, settings: &Settings) -> Self {
        Self::new(repository, &settings.resource)
    }
}

impl<R: ResourceRepository + 'static> CatalogService for Service<R> {
    fn get_all(&self) -> Catalog {
        self.cache.get()
    }

    fn prefetch_async(&self) {
        self.cache.prefetch();
    }

    fn cached_snapshot(&self) -> Option<Catalog> {
        self.cache.snapshot()
    }
}
