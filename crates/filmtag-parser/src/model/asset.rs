//! Kind of asset a scanned name belongs to.

/// Container label assigned to directory-style assets (DVD images and
/// similar folder layouts). Their video source is pre-seeded with the
/// same value.
pub const DIRECTORY_CONTAINER: &str = "DVD";

/// Whether a scanned name denotes a single file or a directory-style asset.
///
/// Only files carry an extension; for directories the whole name is scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AssetKind {
    /// A regular file; the suffix after the last `.` is the extension.
    #[default]
    File,
    /// A directory such as a `VIDEO_TS` layout; no extension is split off.
    Directory,
}

impl AssetKind {
    /// Convert a plain "is this a directory" flag.
    pub fn from_is_dir(is_dir: bool) -> Self {
        if is_dir {
            AssetKind::Directory
        } else {
            AssetKind::File
        }
    }

    /// Returns true for [`AssetKind::Directory`].
    pub fn is_directory(self) -> bool {
        self == AssetKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_is_dir_maps_flag() {
        assert_eq!(AssetKind::from_is_dir(true), AssetKind::Directory);
        assert_eq!(AssetKind::from_is_dir(false), AssetKind::File);
        assert!(AssetKind::Directory.is_directory());
        assert!(!AssetKind::default().is_directory());
    }
}
