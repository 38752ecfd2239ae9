use log::info;

use crate::{Catalog, LoadError, ResourceRepository, csv, record};

/// Reads, decodes, tokenizes and maps the named resource.
///
/// Only failures affecting the whole resource are returned. Invalid rows are skipped.
pub fn load<R: ResourceRepository + ?Sized>(
    repository: &R,
    resource: &str,
) -> Result<Catalog, LoadError> {
    let bytes = repository.read_resource(resource)?;
    let text = std::str::from_utf8(&bytes)?;
    let mapping = record::map_rows(csv::tokenize(text));

    info!(
        "loaded {} exercises from {resource} ({} rows skipped)",
        mapping.records.len(),
        mapping.skipped.len()
    );

    Ok(Catalog::from(mapping.records))
}
