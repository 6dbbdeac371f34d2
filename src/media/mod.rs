use std::io;

use actix_multipart::Field;
use futures::TryStreamExt;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::options;

pub mod util;

lazy_static! {
    pub static ref FILENAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_.-]+$").unwrap();
}

/// Largest video accepted by the upload endpoint.
pub const MAX_FILE_SIZE: usize = 500 * 1_000_000; // 500 MB

/// Resolves a stored file name to its place on disk.
/// Names that could escape the media directory resolve to nothing.
pub fn media_file_path(filename: &str) -> Option<String> {
    if !FILENAME_REGEX.is_match(filename) || filename.starts_with('.') {
        return None;
    }

    Some((*options::MEDIA_PATH).to_string() + "/" + filename)
}

#[derive(Debug)]
pub enum SaveError {
    TooLarge,
    Io(io::Error),
    Stream(String),
}

/// Streams a multipart field to a new file, giving up once it grows past
/// `limit` bytes. A partially written file is removed.
pub async fn save_field(path: &str, field: &mut Field, limit: usize) -> Result<usize, SaveError> {
    let result = write_field(path, field, limit).await;

    if result.is_err() {
        let _ = tokio::fs::remove_file(path).await;
    }

    result
}

async fn write_field(path: &str, field: &mut Field, limit: usize) -> Result<usize, SaveError> {
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(path)
        .await
        .map_err(SaveError::Io)?;

    let mut written = 0;

    loop {
        let chunk = field
            .try_next()
            .await
            .map_err(|e| SaveError::Stream(e.to_string()))?;

        let chunk = match chunk {
            Some(chunk) => chunk,
            None => break,
        };

        written += chunk.len();
        if written > limit {
            return Err(SaveError::TooLarge);
        }

        file.write_all(&chunk).await.map_err(SaveError::Io)?;
    }

    file.flush().await.map_err(SaveError::Io)?;
    debug!("saved {} bytes to {}", written, path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_names_have_no_path() {
        assert!(media_file_path("../etc/passwd").is_none());
        assert!(media_file_path("a/b.mp4").is_none());
        assert!(media_file_path("..").is_none());
        assert!(media_file_path("").is_none());
    }

    #[test]
    fn plain_names_live_in_media_dir() {
        let path = media_file_path("abc_video1.mp4").unwrap();
        assert!(path.starts_with(&*options::MEDIA_PATH));
        assert!(path.ends_with("/abc_video1.mp4"));
    }
}
