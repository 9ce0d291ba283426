// SPDX-License-Identifier: MPL-2.0
//! Loading an entry's page photo from disk or over HTTP.

pub mod image;

pub use self::image::{decode, ImageData};

use crate::domain::entry::ImageSource;
use crate::error::{Error, Result};

/// Reads and decodes `source`.
///
/// Decoding runs on a blocking worker so large photos do not stall the
/// async runtime.
///
/// # Errors
///
/// Returns [`Error::Io`] for unreadable files, [`Error::Network`] for failed
/// or non-success HTTP requests, and [`Error::Image`] for undecodable data.
pub async fn load(source: ImageSource) -> Result<ImageData> {
    let bytes = fetch(&source).await?;
    tracing::debug!(%source, bytes = bytes.len(), "image bytes received");

    let data = tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| Error::Io(e.to_string()))??;

    tracing::info!(%source, width = data.width, height = data.height, "image loaded");
    Ok(data)
}

async fn fetch(source: &ImageSource) -> Result<Vec<u8>> {
    match source {
        ImageSource::Path(path) => Ok(tokio::fs::read(path).await?),
        ImageSource::Url(url) => {
            let response = reqwest::get(url.as_str()).await?.error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        }
    }
}
