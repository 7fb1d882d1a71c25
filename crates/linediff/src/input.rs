//! Reading documents to compare

use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} appears to be a binary file", .path.display())]
    Binary { path: PathBuf },
    #[error("{} is not valid UTF-8", .path.display())]
    NotUtf8 { path: PathBuf },
}

/// Read a document as text. `-` reads from stdin.
pub fn read_text(path: &Path) -> Result<String, InputError> {
    let read_err = |source| InputError::Read {
        path: path.to_path_buf(),
        source,
    };

    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(read_err)?;
        buf
    } else {
        std::fs::read(path).map_err(read_err)?
    };

    decode_text(path, bytes)
}

/// Reject binary content before it reaches the diff engine
pub fn decode_text(path: &Path, bytes: Vec<u8>) -> Result<String, InputError> {
    if bytes.contains(&0) {
        return Err(InputError::Binary {
            path: path.to_path_buf(),
        });
    }
    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        path: path.to_path_buf(),
    })
}
