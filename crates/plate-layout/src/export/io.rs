//! File I/O for plates

use crate::types::*;
use log::{info, warn};
use std::path::Path;

/// Write SVG text to `path`, creating missing parent directories
pub async fn write_svg(svg: String, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }
    tokio::fs::write(path, svg).await?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Load a per-well fill matrix from a headerless CSV file.
///
/// Each record is one plate row, each field one well color.
pub async fn load_fill_csv(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let matrix = tokio::task::spawn_blocking(move || {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(contents.as_bytes());
        let mut matrix = Vec::new();

        for result in reader.records() {
            let record = result?;
            matrix.push(record.iter().map(str::to_string).collect());
        }
        Ok::<_, PlateError>(matrix)
    })
    .await??;

    Ok(matrix)
}

/// Remove a file left behind by a failed export
pub(crate) async fn remove_partial(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => info!("Removed partial output {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("Could not remove {}: {}", path.display(), e),
    }
}
