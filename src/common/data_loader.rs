use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Discovers the price series files offered in the file selector
pub struct DataLoader;

impl DataLoader {
    /// Files matching a glob pattern, sorted. An empty match is not an
    /// error: the viewer starts blank and a file can still be opened by hand.
    pub fn load_files(pattern: &str) -> Result<Vec<PathBuf>> {
        let mut data_files = Vec::new();

        for entry in glob(pattern).context("Failed to read glob pattern")? {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        data_files.push(path);
                    }
                }
                Err(e) => log::warn!("Error reading path: {}", e),
            }
        }

        if data_files.is_empty() {
            log::warn!("No files found matching pattern: {}", pattern);
        }

        data_files.sort();

        log::info!("Found {} file(s) matching pattern '{}'", data_files.len(), pattern);
        for (i, file) in data_files.iter().enumerate() {
            log::debug!("  [{}] {}", i + 1, file.display());
        }

        Ok(data_files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_files_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.csv"), "time,bid,ask,profit\n").unwrap();
        fs::write(dir.path().join("a.csv"), "time,bid,ask,profit\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub.csv")).unwrap();

        let pattern = format!("{}/*.csv", dir.path().display());
        let files = DataLoader::load_files(&pattern).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn test_load_files_no_match() {
        let dir = tempdir().unwrap();
        let pattern = format!("{}/*.csv", dir.path().display());
        assert!(DataLoader::load_files(&pattern).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(DataLoader::load_files("[").is_err());
    }
}
