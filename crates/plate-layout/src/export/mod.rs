//! Plate export
//!
//! This module writes plates to disk:
//! 1. Serialize the drawing to SVG
//! 2. Resolve the external converter
//! 3. Convert the SVG to a fixed-size PDF, cleaning up after failures

mod converter;
mod io;

pub use converter::Converter;
pub use io::{load_fill_csv, write_svg};

use crate::plate::PaperPlate;
use crate::types::*;
use converter::run_tool;
use io::remove_partial;
use log::info;
use std::path::{Path, PathBuf};

impl PaperPlate {
    /// Save the plate as an SVG file
    pub async fn save_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        write_svg(self.to_svg_string(), path).await
    }

    /// Save the plate as a PDF through the external converter.
    ///
    /// The intermediate SVG is written next to the PDF with the same base
    /// name and kept on success. The tool writes to a `.part` sibling that
    /// only replaces the destination once conversion succeeds, so an existing
    /// PDF survives a failed run. Returns the absolute PDF path.
    pub async fn to_pdf(
        &self,
        pdf_path: impl AsRef<Path>,
        converter: &Converter,
    ) -> Result<PathBuf> {
        let (pdf_path, svg_path) = export_paths(pdf_path.as_ref())?;
        let partial = part_path(&pdf_path);

        if let Some(dir) = pdf_path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }

        // Nothing is written when no converter can be found
        let tool = converter.locate()?;

        write_svg(self.to_svg_string(), &svg_path).await?;

        let converted = async {
            run_tool(&tool, &svg_path, &partial).await?;
            tokio::fs::rename(&partial, &pdf_path).await?;
            Ok::<_, PlateError>(())
        }
        .await;

        if let Err(e) = converted {
            remove_partial(&partial).await;
            remove_partial(&svg_path).await;
            return Err(e);
        }

        info!("Wrote {}", pdf_path.display());
        Ok(pdf_path)
    }
}

/// Temporary sibling the converter writes into, e.g. `plate.pdf.part`
fn part_path(pdf_path: &Path) -> PathBuf {
    let mut name = pdf_path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    pdf_path.with_file_name(name)
}

/// Absolute PDF path and its sibling SVG path
fn export_paths(pdf_path: &Path) -> Result<(PathBuf, PathBuf)> {
    let pdf_path = std::path::absolute(pdf_path)?;
    let stem = pdf_path.file_stem().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path {} has no file name", pdf_path.display()),
        )
    })?;

    let mut svg_name = stem.to_os_string();
    svg_name.push(".svg");
    let svg_path = pdf_path.with_file_name(svg_name);

    if svg_path == pdf_path {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!(
                "Output path {} would overwrite its own SVG source",
                pdf_path.display()
            ),
        )
        .into());
    }

    Ok((pdf_path, svg_path))
}
