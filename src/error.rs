// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Decode(String),
    Encode(String),
    Storage(String),
}

/// Reasons an uploaded file is refused by the upload control.
/// Used to provide user-friendly, localized inline messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRejection {
    /// The detected MIME type is not `image/*`.
    NotAnImage { name: String, mime: String },

    /// The file is larger than the configured upload limit.
    TooLarge { name: String, size: u64, limit: u64 },

    /// The file could not be read from disk.
    Unreadable { name: String, reason: String },
}

impl UploadRejection {
    /// Returns the i18n message key for this rejection.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadRejection::NotAnImage { .. } => "upload-error-not-image",
            UploadRejection::TooLarge { .. } => "upload-error-too-large",
            UploadRejection::Unreadable { .. } => "upload-error-unreadable",
        }
    }

    /// Returns the name of the rejected file.
    pub fn file_name(&self) -> &str {
        match self {
            UploadRejection::NotAnImage { name, .. }
            | UploadRejection::TooLarge { name, .. }
            | UploadRejection::Unreadable { name, .. } => name,
        }
    }
}

impl fmt::Display for UploadRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadRejection::NotAnImage { name, mime } => {
                write!(f, "{name} is not an image ({mime})")
            }
            UploadRejection::TooLarge { name, size, limit } => {
                write!(f, "{name} is {size} bytes, limit is {limit} bytes")
            }
            UploadRejection::Unreadable { name, reason } => {
                write!(f, "{name} could not be read: {reason}")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Encode(e) => write!(f, "Encode Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::Encoding(e) => Error::Encode(e.to_string()),
            image_rs::ImageError::IoError(e) => Error::Io(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_becomes_storage_error() {
        let parse = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[test]
    fn rejection_i18n_keys() {
        let not_image = UploadRejection::NotAnImage {
            name: "notes.txt".into(),
            mime: "text/plain".into(),
        };
        let too_large = UploadRejection::TooLarge {
            name: "huge.png".into(),
            size: 6 * 1024 * 1024,
            limit: 5 * 1024 * 1024,
        };
        assert_eq!(not_image.i18n_key(), "upload-error-not-image");
        assert_eq!(too_large.i18n_key(), "upload-error-too-large");
        assert_eq!(too_large.file_name(), "huge.png");
    }
}
