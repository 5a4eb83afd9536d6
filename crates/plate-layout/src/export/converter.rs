//! External SVG to PDF converter
//!
//! The converter is found by walking an ordered list of [`ToolLookup`]s and
//! is invoked as `<tool> -f <input.svg> -A <output.pdf>`.

use crate::constants::{INKSCAPE_COMMAND, INKSCAPE_MACOS_PATH};
use crate::types::*;
use log::{debug, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Locates and runs the converter tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    lookups: Vec<ToolLookup>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::inkscape()
    }
}

impl Converter {
    pub fn new(lookups: Vec<ToolLookup>) -> Self {
        Self { lookups }
    }

    /// Inkscape from `PATH`, falling back to the macOS application bundle
    pub fn inkscape() -> Self {
        Self::new(vec![
            ToolLookup::OnPath(INKSCAPE_COMMAND.to_string()),
            ToolLookup::At(PathBuf::from(INKSCAPE_MACOS_PATH)),
        ])
    }

    /// Append a lookup, tried after the existing ones
    pub fn with_lookup(mut self, lookup: ToolLookup) -> Self {
        self.lookups.push(lookup);
        self
    }

    pub fn lookups(&self) -> &[ToolLookup] {
        &self.lookups
    }

    /// Resolve the tool executable, trying each lookup in order
    pub fn locate(&self) -> Result<PathBuf> {
        for lookup in &self.lookups {
            let found = match lookup {
                ToolLookup::OnPath(name) => find_on_path(name),
                ToolLookup::At(path) => is_executable(path).then(|| path.clone()),
            };
            if let Some(path) = found {
                debug!("Using converter {} ({})", path.display(), lookup.describe());
                return Ok(path);
            }
        }

        Err(PlateError::ToolUnavailable {
            tool: self.tool_name(),
            searched: self.lookups.iter().map(ToolLookup::describe).collect(),
        })
    }

    /// Convert `svg_path` into `pdf_path` and wait for the tool to exit
    pub async fn convert(&self, svg_path: &Path, pdf_path: &Path) -> Result<()> {
        let tool = self.locate()?;
        run_tool(&tool, svg_path, pdf_path).await
    }

    fn tool_name(&self) -> String {
        match self.lookups.first() {
            Some(ToolLookup::OnPath(name)) => name.clone(),
            Some(ToolLookup::At(path)) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            None => "converter".to_string(),
        }
    }
}

/// Run a resolved converter executable
pub(crate) async fn run_tool(tool: &Path, svg_path: &Path, pdf_path: &Path) -> Result<()> {
    debug!(
        "Running {} -f {} -A {}",
        tool.display(),
        svg_path.display(),
        pdf_path.display()
    );

    let output = tokio::process::Command::new(tool)
        .arg("-f")
        .arg(svg_path)
        .arg("-A")
        .arg(pdf_path)
        .stdin(Stdio::null())
        .output()
        .await?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        warn!(
            "{} exited with {}: {}",
            tool.display(),
            output.status,
            stderr
        );
        Err(PlateError::ConversionFailed {
            status: output.status.code(),
            stderr,
        })
    }
}

fn find_on_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    let candidates = executable_names(name);
    std::env::split_paths(&path_var)
        .flat_map(|dir| candidates.iter().map(move |candidate| dir.join(candidate)))
        .find(|path| is_executable(path))
}

fn executable_names(name: &str) -> Vec<OsString> {
    let mut names = vec![OsString::from(name)];
    let suffix = std::env::consts::EXE_SUFFIX;
    if !suffix.is_empty() && !name.ends_with(suffix) {
        names.push(OsString::from(format!("{}{}", name, suffix)));
    }
    names
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookup_order() {
        let converter = Converter::default();
        assert_eq!(
            converter.lookups(),
            &[
                ToolLookup::OnPath("inkscape".to_string()),
                ToolLookup::At(PathBuf::from(
                    "/Applications/Inkscape.app/Contents/Resources/bin/inkscape"
                )),
            ]
        );
    }

    #[test]
    fn test_with_lookup_appends() {
        let converter = Converter::new(vec![]).with_lookup(ToolLookup::At("/opt/a".into()));
        let converter = converter.with_lookup(ToolLookup::At("/opt/b".into()));
        assert_eq!(
            converter.lookups(),
            &[
                ToolLookup::At(PathBuf::from("/opt/a")),
                ToolLookup::At(PathBuf::from("/opt/b")),
            ]
        );
    }

    #[test]
    fn test_missing_tool_is_unavailable() {
        let converter = Converter::new(vec![
            ToolLookup::OnPath("definitely-not-a-real-converter-7f3a".to_string()),
            ToolLookup::At(PathBuf::from("/nonexistent/dir/converter")),
        ]);

        match converter.locate() {
            Err(PlateError::ToolUnavailable { tool, searched }) => {
                assert_eq!(tool, "definitely-not-a-real-converter-7f3a");
                assert_eq!(searched.len(), 2);
                assert_eq!(searched[1], "/nonexistent/dir/converter");
            }
            other => panic!("Expected ToolUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_lookup_list_is_unavailable() {
        let result = Converter::new(vec![]).locate();
        assert!(matches!(result, Err(PlateError::ToolUnavailable { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_directory_is_not_a_tool() {
        let dir = tempfile::tempdir().unwrap();
        let converter = Converter::new(vec![ToolLookup::At(dir.path().to_path_buf())]);
        assert!(converter.locate().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_fixed_path_is_found() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("fake-inkscape");
        std::fs::write(&tool, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let converter = Converter::new(vec![
            ToolLookup::At(dir.path().join("missing")),
            ToolLookup::At(tool.clone()),
        ]);
        assert_eq!(converter.locate().unwrap(), tool);
    }
}
