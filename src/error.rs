use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// アイコン生成で発生するエラー
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Source icon not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
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

    #[error("invalid source dimensions {width}x{height}: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("failed to save {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_source_message_names_the_path() {
        let err = IconError::SourceNotFound {
            path: Path::new("icons").join("icon-512.png"),
        };
        let expected = format!(
            "Source icon not found: {}",
            Path::new("icons").join("icon-512.png").display()
        );
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn create_dir_error_keeps_io_source() {
        let err = IconError::CreateDir {
            path: PathBuf::from("icons"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("icons"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
