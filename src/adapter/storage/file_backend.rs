//! File Storage Backend
//!
//! データディレクトリ内に1コレクション1ファイル（`<name>.json`）で保存する

use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use super::backend::StorageBackend;

const EXTENSION: &str = "json";

/// ファイルシステムベースの保存先
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// 新しい保存先を作成
    ///
    /// ディレクトリは最初の書き込み時に作成される
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// コレクションのファイルパス
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.{}", name, EXTENSION))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        let path = self.path_for(name);
        match fs::read(&path) {
            Ok(bytes) => {
                debug!("Read {} bytes from {}", bytes.len(), path.display());
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write_atomic(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;

        // Same directory as the target so the rename stays on one file system
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(contents)?;
        tmp.as_file().sync_all()?;

        let path = self.path_for(name);
        tmp.persist(&path).map_err(|e| e.error)?;
        debug!("Wrote {} bytes to {}", contents.len(), path.display());

        Ok(())
    }

    fn list(&self) -> io::Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());

        assert!(backend.read("Student").unwrap().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path().join("nested/data"));

        backend.write_atomic("Student", b"[1,2,3]").unwrap();

        assert_eq!(backend.read("Student").unwrap().unwrap(), b"[1,2,3]");
        assert!(temp_dir.path().join("nested/data/Student.json").exists());
    }

    #[test]
    fn test_write_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());

        backend.write_atomic("Student", b"first, longer content").unwrap();
        backend.write_atomic("Student", b"second").unwrap();

        assert_eq!(backend.read("Student").unwrap().unwrap(), b"second");
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());

        backend.write_atomic("Student", b"[]").unwrap();
        backend.write_atomic("Teacher", b"[]").unwrap();

        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 2);
    }

    #[test]
    fn test_failed_write_cleans_up() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());
        // ディレクトリへのリネームは失敗する
        fs::create_dir(backend.path_for("Student")).unwrap();

        assert!(backend.write_atomic("Student", b"[]").is_err());

        let entries = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_list_collections() {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path());

        backend.write_atomic("Teacher", b"[]").unwrap();
        backend.write_atomic("Student", b"[]").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        assert_eq!(backend.list().unwrap(), vec!["Student", "Teacher"]);
    }

    #[test]
    fn test_list_missing_root() {
        let backend = FileBackend::new("/nonexistent/elearning/data");
        assert!(backend.list().unwrap().is_empty());
    }
}
