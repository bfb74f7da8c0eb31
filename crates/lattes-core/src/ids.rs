//! Lattes ID lists

use std::path::Path;

use tracing::debug;

use crate::error::{LattesError, LattesResult};

/// Number of records in a header-less CSV of Lattes IDs
pub fn count_ids(path: impl AsRef<Path>) -> LattesResult<usize> {
    let path = path.as_ref();
    let csv_error = |source| LattesError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut count = 0;
    for record in reader.records() {
        record.map_err(csv_error)?;
        count += 1;
    }

    debug!(path = %path.display(), count, "counted Lattes IDs");
    Ok(count)
}
