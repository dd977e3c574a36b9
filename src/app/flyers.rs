// SPDX-License-Identifier: MPL-2.0
//! Saving lecture flyers to a user-chosen location.

use crate::content::Flyer;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Path of the flyer's image in `assets_dir`, if the file exists.
pub fn locate(flyer: Flyer, assets_dir: Option<&Path>) -> Option<PathBuf> {
    let path = assets_dir?.join(flyer.source_file());
    path.is_file().then_some(path)
}

/// Copies the flyer image at `source` to `destination` and returns the
/// number of bytes written.
///
/// Saving a file onto itself is a no-op.
pub fn save(source: &Path, destination: &Path) -> Result<u64> {
    if let (Ok(from), Ok(to)) = (source.canonicalize(), destination.canonicalize()) {
        if from == to {
            return Ok(fs::metadata(&from)?.len());
        }
    }
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(fs::copy(source, destination)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn locate_finds_existing_flyer_only() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join(Flyer::BodyLanguage.source_file()), b"flyer").expect("write");

        assert!(locate(Flyer::BodyLanguage, Some(dir.path())).is_some());
        assert!(locate(Flyer::PublicSpeaking, Some(dir.path())).is_none());
        assert!(locate(Flyer::BodyLanguage, None).is_none());
    }

    #[test]
    fn save_copies_bytes_and_creates_parent_dirs() {
        let dir = tempdir().expect("tempdir");
        let source = dir.path().join("lectureflyer1.jpg");
        fs::write(&source, b"public speaking").expect("write");
        let destination = dir.path().join("downloads").join("gabi-public-speaking.jpg");

        let written = save(&source, &destination).expect("save");

        assert_eq!(written, 15);
        assert_eq!(fs::read(&destination).expect("read"), b"public speaking");
    }

    #[test]
    fn save_onto_itself_keeps_content() {
        let dir = tempdir().expect("tempdir");
        let source = dir.path().join("lectureflyer2.jpg");
        fs::write(&source, b"body language").expect("write");

        assert_eq!(save(&source, &source).expect("save"), 13);
        assert_eq!(fs::read(&source).expect("read"), b"body language");
    }

    #[test]
    fn save_missing_source_is_io_error() {
        let dir = tempdir().expect("tempdir");
        let result = save(&dir.path().join("absent.jpg"), &dir.path().join("out.jpg"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
