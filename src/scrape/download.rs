// SPDX-License-Identifier: MPL-2.0
//! Streaming download of a scraped image to a local file.

use crate::error::FetchError;
use std::path::PathBuf;

/// Downloads `url` to `dest`, streaming chunks to disk.
///
/// Returns the number of bytes written. A partially written file is removed
/// when the transfer fails mid-stream.
///
/// # Errors
///
/// Returns a categorized `FetchError` on network failure, non-success status,
/// or a filesystem error at `dest`.
pub async fn download_image(
    client: reqwest::Client,
    url: String,
    dest: PathBuf,
) -> Result<u64, FetchError> {
    use futures_util::StreamExt;

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::from_reqwest(&e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FetchError::Other(e.to_string()))?;
    }

    let mut file = std::fs::File::create(&dest).map_err(|e| FetchError::Other(e.to_string()))?;

    let mut written: u64 = 0;
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                let _ = std::fs::remove_file(&dest);
                return Err(FetchError::from_reqwest(&e));
            }
        };
        if let Err(e) = std::io::Write::write_all(&mut file, &chunk) {
            let _ = std::fs::remove_file(&dest);
            return Err(FetchError::Other(e.to_string()));
        }
        written += chunk.len() as u64;
    }

    Ok(written)
}

/// Derives a filename for the save dialog from an image URL.
///
/// Takes the last path segment with query and fragment stripped. When the URL
/// has no path segment (bare host, scheme only), falls back to a timestamped
/// name rather than suggesting the host as a filename.
#[must_use]
pub fn suggested_filename(url: &str) -> String {
    let trimmed = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url)
        .trim_end_matches('/');

    // Skip past the authority so a bare host never counts as a segment.
    let after_scheme = trimmed.split_once("//").map_or(trimmed, |(_, rest)| rest);
    let segment = match after_scheme.split_once('/') {
        Some((_, path)) => path.rsplit('/').next().unwrap_or(""),
        None => "",
    };

    if segment.is_empty() || segment.contains(':') {
        return format!("image-{}", chrono::Local::now().format("%Y%m%d-%H%M%S"));
    }

    segment.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_last_path_segment() {
        assert_eq!(
            suggested_filename("https://cdn.example.com/img/cat.png"),
            "cat.png"
        );
    }

    #[test]
    fn filename_strips_query_and_fragment() {
        assert_eq!(
            suggested_filename("https://example.com/photo.jpg?size=large#top"),
            "photo.jpg"
        );
    }

    #[test]
    fn filename_falls_back_on_bare_host() {
        // With and without the trailing slash the host is not a filename.
        for url in ["https://example.com/", "https://example.com"] {
            let name = suggested_filename(url);
            assert!(name.starts_with("image-"), "{url} gave {name}");
        }
    }

    #[test]
    fn filename_falls_back_on_scheme_only() {
        let name = suggested_filename("https://");
        assert!(name.starts_with("image-"));
    }

    #[test]
    fn filename_ignores_port_in_authority() {
        assert_eq!(
            suggested_filename("https://example.com:8080/shots/x.png"),
            "x.png"
        );
    }

    #[tokio::test]
    async fn download_rejects_unreachable_host() {
        let client = reqwest::Client::new();
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("x.png");

        let result = download_image(
            client,
            // Discard port on loopback refuses the connection immediately.
            "http://127.0.0.1:9/none.png".to_string(),
            dest.clone(),
        )
        .await;

        assert!(result.is_err());
        assert!(!dest.exists());
    }
}
