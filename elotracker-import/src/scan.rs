//! Recursive input-directory enumeration.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::ImportError;

/// File names never ingested: documentation, plus one known-malformed list.
pub const EXCLUDED_FILES: &[&str] = &["readme", "readme.txt", "TARATSUP.TXT"];

/// All regular files under `root`, in a stable (name-sorted) order.
///
/// A missing `root` yields no files and a warning rather than an error.
pub fn scan_dir(root: &Path) -> Result<Vec<PathBuf>, ImportError> {
    if !root.exists() {
        log::warn!("Input directory {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    log::debug!("Found {} files under {}", files.len(), root.display());
    Ok(files)
}

/// File name of `path` as text, empty if it has none.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn is_excluded(file_name: &str) -> bool {
    EXCLUDED_FILES.contains(&file_name)
}

/// FIDE lists: a case-sensitive `.txt` anywhere in the name.
pub fn is_fide_list(file_name: &str) -> bool {
    !is_excluded(file_name) && file_name.contains(".txt")
}

/// USCF supplements: `.txt` or `.TXT`.
pub fn is_uscf_supplement(file_name: &str) -> bool {
    file_name.contains(".txt") || file_name.contains(".TXT")
}

/// Golden USCF rating lists are always named `rtglist.txt`.
pub fn is_rating_list(file_name: &str) -> bool {
    file_name == "rtglist.txt"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_root_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let files = scan_dir(&dir.path().join("absent")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn scans_recursively_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("2024");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("b.txt"), "").unwrap();
        std::fs::write(dir.path().join("a.txt"), "").unwrap();
        std::fs::write(nested.join("c.txt"), "").unwrap();

        let names: Vec<_> = scan_dir(dir.path())
            .unwrap()
            .iter()
            .map(|p| file_name(p))
            .collect();
        assert_eq!(names, ["c.txt", "a.txt", "b.txt"]);
    }

    #[test]
    fn fide_list_selection() {
        assert!(is_fide_list("standard_mar24frl.txt"));
        assert!(!is_fide_list("readme.txt"));
        assert!(!is_fide_list("TARATSUP.TXT"));
        assert!(!is_fide_list("standard_mar24frl.TXT"));
        assert!(!is_fide_list("standard_mar24frl.zip"));
    }

    #[test]
    fn uscf_selection() {
        assert!(is_uscf_supplement("RS2401.TXT"));
        assert!(is_uscf_supplement("rsq2401.txt"));
        assert!(!is_uscf_supplement("RS2401.zip"));
        assert!(is_rating_list("rtglist.txt"));
        assert!(!is_rating_list("rtglist.TXT"));
    }
}
