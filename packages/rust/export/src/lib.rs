//! Output side of the pipeline: CSV artifact and spreadsheet publishing.

pub mod sheets;

use std::path::Path;

use tracing::info;

use linkdigest_shared::{ClassifiedLink, LinkDigestError, Result};

pub use sheets::SheetsPublisher;

/// Write all rows to a CSV file at `path`, without a header row.
///
/// Column order: url (trailing space preserved), category, source,
/// published date, title, description. The file is truncated first; the
/// artifact always reflects exactly one run.
pub fn write_csv(path: &Path, links: &[ClassifiedLink]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| LinkDigestError::Export(format!("{}: {e}", path.display())))?;

    for link in links {
        writer
            .write_record(link.clone().into_row())
            .map_err(|e| LinkDigestError::Export(format!("{}: {e}", path.display())))?;
    }

    writer
        .flush()
        .map_err(|e| LinkDigestError::io(path, e))?;

    info!(path = %path.display(), rows = links.len(), "csv written");
    Ok(())
}
