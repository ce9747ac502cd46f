use std::{io, path::PathBuf};

use derive_more::IsVariant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TileifyError {
    #[error("image not found: {}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write report: {0}")]
    Output(#[source] io::Error),
    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),
}

/// Coarse category of a [`TileifyError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ErrorKind {
    ResourceNotFound,
    Io,
    Decode,
    Output,
    Logger,
}

impl TileifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TileifyError::ResourceNotFound { .. } => ErrorKind::ResourceNotFound,
            TileifyError::Io { .. } => ErrorKind::Io,
            TileifyError::Decode { .. } => ErrorKind::Decode,
            TileifyError::Output(_) => ErrorKind::Output,
            TileifyError::Logger(_) => ErrorKind::Logger,
        }
    }

    pub(crate) fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => TileifyError::ResourceNotFound { path, source },
            _ => TileifyError::Io { path, source },
        }
    }

    /// Errors raised while decoding. A short or corrupt file surfaces as an
    /// io error from the decoder, so only a missing file escapes `Decode`.
    pub(crate) fn from_image(path: PathBuf, source: image::ImageError) -> Self {
        match source {
            image::ImageError::IoError(source) if source.kind() == io::ErrorKind::NotFound => {
                TileifyError::ResourceNotFound { path, source }
            }
            source => TileifyError::Decode { path, source },
        }
    }
}
