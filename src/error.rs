// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Variants carry rendered messages rather than source errors so the type
//! stays `Clone` and can travel inside Iced messages.

use crate::application::port::EntryError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Network Error: {0}")]
    Network(String),

    #[error("Image Error: {0}")]
    Image(String),

    #[error("Entry Error: {0}")]
    Entry(#[from] EntryError),
}

impl Error {
    /// Returns the i18n message key describing this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-io",
            Error::Config(_) => "error-config",
            Error::Network(_) => "error-load-network",
            Error::Image(_) => "error-load-decode",
            Error::Entry(err) => err.i18n_key(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{err}"), "I/O Error: disk failure");
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
        assert_eq!(format!("{err}"), "Config Error: bad field");
    }

    #[test]
    fn entry_error_keeps_its_key() {
        let err: Error = EntryError::MissingAlt.into();
        assert_eq!(err.i18n_key(), EntryError::MissingAlt.i18n_key());
    }

    #[test]
    fn load_errors_have_distinct_keys() {
        let keys = [
            Error::Io(String::new()).i18n_key(),
            Error::Network(String::new()).i18n_key(),
            Error::Image(String::new()).i18n_key(),
        ];
        assert_ne!(keys[0], keys[1]);
        assert_ne!(keys[1], keys[2]);
        assert_ne!(keys[0], keys[2]);
    }
}
