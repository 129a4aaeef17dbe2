use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Where to write the JSON report for `--output-file <target>`.
///
/// An existing directory, or a target ending in a separator, receives a
/// stamped `extractguard_<stamp>.json`; anything else is used as the file
/// path itself. Missing directories are created.
pub fn resolve_file_path(target: &str, stamp: &str) -> Result<PathBuf> {
    let path = Path::new(target);
    let filename = format!("extractguard_{}.json", stamp);

    if path.is_dir() {
        return Ok(path.join(filename));
    }
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    if target.ends_with('/') || target.ends_with('\\') {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        return Ok(path.join(filename));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const STAMP: &str = "2026-10-16T09-30-00";

    #[test]
    fn test_existing_directory_gets_stamped_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().to_str().unwrap();

        let result = resolve_file_path(target, STAMP).unwrap();

        assert_eq!(
            result.file_name().unwrap(),
            "extractguard_2026-10-16T09-30-00.json"
        );
        assert!(result.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_existing_file_is_overwritten_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.json");
        fs::write(&file_path, "{}").unwrap();

        let result = resolve_file_path(file_path.to_str().unwrap(), STAMP).unwrap();
        assert_eq!(result, file_path);
    }

    #[test]
    fn test_trailing_separator_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = format!("{}/reports/", temp_dir.path().display());

        let result = resolve_file_path(&target, STAMP).unwrap();

        assert!(temp_dir.path().join("reports").is_dir());
        assert_eq!(
            result.file_name().unwrap(),
            "extractguard_2026-10-16T09-30-00.json"
        );
    }

    #[test]
    fn test_new_file_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nightly/orders.json");

        let result = resolve_file_path(file_path.to_str().unwrap(), STAMP).unwrap();

        assert!(temp_dir.path().join("nightly").is_dir());
        assert_eq!(result, file_path);
    }
}
