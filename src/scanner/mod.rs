//! Directory scanning.
//!
//! Walks a directory tree and identifies every entry below the root. The
//! walk itself is sequential; identification runs in parallel on the rayon
//! pool with one shared scanner.

pub mod identifier;

use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

pub use identifier::{Identification, MediaIdentifier};

use filmtag_parser::AssetKind;

/// Options for a directory walk.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Deepest level to descend to; the root's children are level 1.
    pub max_depth: Option<usize>,
}

/// Identify every entry below `root`, in sorted walk order.
pub fn walk_directory(
    root: &Path,
    options: &WalkOptions,
    identifier: &MediaIdentifier,
) -> Result<Vec<Identification>> {
    if !root.exists() {
        anyhow::bail!("Path does not exist: {:?}", root);
    }
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {:?}", root);
    }

    info!("Scanning directory: {:?}", root);

    let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut entries: Vec<(PathBuf, AssetKind)> = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                let kind = AssetKind::from_is_dir(entry.file_type().is_dir());
                entries.push((entry.into_path(), kind));
            }
            Err(e) => warn!("Skipping unreadable entry: {}", e),
        }
    }
    debug!("Found {} entries", entries.len());

    let results: Vec<Identification> = entries
        .par_iter()
        .map(|(path, kind)| identifier.identify(path, *kind))
        .collect();

    info!("Identified {} entries", results.len());
    Ok(results)
}

/// Path of an identified entry relative to the walk root.
pub fn relative_path<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn library() -> tempfile::TempDir {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("Le.Film.2008.FRENCH.DVDRip.XviD")).unwrap();
        fs::write(
            root.join("Le.Film.2008.FRENCH.DVDRip.XviD").join("Movie.CD1.avi"),
            b"",
        )
        .unwrap();
        fs::write(root.join("The.Series.3x07.720p.HDTV.x264.avi"), b"").unwrap();
        temp
    }

    #[test]
    fn test_walk_identifies_files_and_directories() {
        let temp = library();
        let results =
            walk_directory(temp.path(), &WalkOptions::default(), &MediaIdentifier::default())
                .unwrap();

        let names: Vec<_> = results
            .iter()
            .map(|r| relative_path(temp.path(), &r.path).to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("Le.Film.2008.FRENCH.DVDRip.XviD"),
                PathBuf::from("Le.Film.2008.FRENCH.DVDRip.XviD/Movie.CD1.avi"),
                PathBuf::from("The.Series.3x07.720p.HDTV.x264.avi"),
            ]
        );
        assert_eq!(results[0].kind, AssetKind::Directory);
        assert_eq!(results[1].kind, AssetKind::File);
        assert_eq!(results[1].parsed.part, Some(1));
        assert_eq!(results[2].parsed.season, Some(3));
    }

    #[test]
    fn test_walk_respects_depth() {
        let temp = library();
        let options = WalkOptions { max_depth: Some(1) };
        let results = walk_directory(temp.path(), &options, &MediaIdentifier::default()).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_walk_missing_root() {
        let err = walk_directory(
            Path::new("/nonexistent/filmtag/library"),
            &WalkOptions::default(),
            &MediaIdentifier::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
