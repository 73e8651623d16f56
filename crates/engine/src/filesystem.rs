use crate::error::{EngineError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// List the plain files of a single directory, sorted by name.
///
/// Subdirectories are never descended into or reported; the stamping pass
/// is deliberately one level deep. The OS returns entries in an arbitrary
/// order, so the listing is sorted to make runs reproducible.
///
/// # Errors
/// Returns an error when `root` is not a directory or cannot be read.
pub fn list_dir(root: &Path) -> Result<Vec<(PathBuf, fs::Metadata)>> {
    if !root.is_dir() {
        return Err(EngineError::NotADirectory(root.to_path_buf()));
    }

    let entries = fs::read_dir(root).map_err(|e| EngineError::DirRead {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EngineError::DirRead {
            path: root.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| EngineError::FileStat {
            path: path.clone(),
            source: e,
        })?;
        if meta.is_file() {
            files.push((path, meta));
        }
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Same-directory rename that refuses to overwrite.
///
/// `fs::rename` would silently replace an existing target on Unix, so the
/// collision is checked first and reported as a per-file error.
///
/// # Errors
/// Returns an error when the target already exists or the rename fails.
pub fn rename(from: &Path, to: &Path) -> Result<()> {
    if to.exists() {
        return Err(EngineError::TargetExists(to.to_path_buf()));
    }
    fs::rename(from, to).map_err(|e| EngineError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })
}

/// Split a path into UTF-8 stem and extension.
///
/// # Errors
/// Returns an error for names that are not valid UTF-8; those cannot be
/// reassembled into a canonical name safely.
pub fn stem_and_extension(path: &Path) -> Result<(String, String)> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| EngineError::NonUtf8Name(path.to_path_buf()))?;
    let ext = match path.extension() {
        Some(ext) => ext
            .to_str()
            .ok_or_else(|| EngineError::NonUtf8Name(path.to_path_buf()))?,
        None => "",
    };
    Ok((stem.to_string(), ext.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn lists_only_files_and_sorts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.jpg"), b"x").unwrap();
        fs::write(temp.path().join("a.jpg"), b"x").unwrap();
        fs::create_dir(temp.path().join("subdir")).unwrap();

        let files = list_dir(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|(p, _)| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn rejects_non_directories() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.jpg");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            list_dir(&file),
            Err(EngineError::NotADirectory(_))
        ));
        assert!(matches!(
            list_dir(&temp.path().join("missing")),
            Err(EngineError::NotADirectory(_))
        ));
    }

    #[test]
    fn rename_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("from.jpg");
        let to = temp.path().join("to.jpg");
        fs::write(&from, b"x").unwrap();
        fs::write(&to, b"y").unwrap();

        assert!(matches!(
            rename(&from, &to),
            Err(EngineError::TargetExists(_))
        ));
        // Both files untouched
        assert!(from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"y");
    }

    #[test]
    fn splits_stem_and_extension() {
        let (stem, ext) = stem_and_extension(Path::new("/tmp/vacation.MOV")).unwrap();
        assert_eq!(stem, "vacation");
        assert_eq!(ext, "MOV");

        let (stem, ext) = stem_and_extension(Path::new("/tmp/noext")).unwrap();
        assert_eq!(stem, "noext");
        assert_eq!(ext, "");
    }
}
