//! On-disk storage for uploaded pictures.
//!
//! Files live under `<root>/pictures/<hotel_id>/<uuid>.<ext>`, so everything a
//! hotel owns can be purged by removing one directory. The same relative path
//! is exposed over HTTP under `/storage`, and the resulting URL is what gets
//! recorded as the picture's `file_path`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const PICTURES_DIR: &str = "pictures";

#[derive(Debug, Clone)]
pub struct PictureStorage {
    root: PathBuf,
    public_url: String,
}

/// A file written by `PictureStorage::store`.
#[derive(Debug, Clone)]
pub struct StoredFile {
    /// Location on disk.
    pub path: PathBuf,
    /// Public URL the file is served from.
    pub url: String,
    pub size: u64,
}

impl PictureStorage {
    pub fn new(root: impl Into<PathBuf>, public_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_url: public_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn hotel_dir(&self, hotel_id: i64) -> PathBuf {
        self.root.join(PICTURES_DIR).join(hotel_id.to_string())
    }

    /// Writes `bytes` under the hotel's directory with a fresh random name.
    pub fn store(&self, hotel_id: i64, bytes: &[u8], extension: &str) -> io::Result<StoredFile> {
        let dir = self.hotel_dir(hotel_id);
        fs::create_dir_all(&dir)?;

        let name = format!("{}.{}", Uuid::new_v4().simple(), extension);
        let path = dir.join(&name);
        fs::write(&path, bytes)?;

        Ok(StoredFile {
            url: format!(
                "{}/storage/{}/{}/{}",
                self.public_url, PICTURES_DIR, hotel_id, name
            ),
            path,
            size: bytes.len() as u64,
        })
    }

    /// Removes a single stored file. A file that is already gone is not an error.
    pub fn remove(&self, path: &Path) -> io::Result<()> {
        match fs::remove_file(path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Removes every stored file of a hotel along with its directory and
    /// returns how many files were removed. Purging a hotel with no directory
    /// removes nothing.
    pub fn purge_hotel(&self, hotel_id: i64) -> io::Result<usize> {
        let dir = self.hotel_dir(hotel_id);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };

        let mut removed = 0;
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        fs::remove_dir(&dir)?;
        Ok(removed)
    }

    /// Number of files currently stored for a hotel.
    #[cfg(test)]
    pub fn count_files(&self, hotel_id: i64) -> io::Result<usize> {
        match fs::read_dir(self.hotel_dir(hotel_id)) {
            Ok(entries) => Ok(entries.filter_map(Result::ok).filter(|e| e.path().is_file()).count()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e),
        }
    }
}

/// File extension for `bytes` if they start like a known image format.
pub fn image_extension(bytes: &[u8]) -> Option<&'static str> {
    let format = image::guess_format(bytes).ok()?;
    format.extensions_str().first().copied()
}
