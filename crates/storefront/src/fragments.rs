//! Shared markup fragments (header, footer, cart sidebar).
//!
//! Every page carries empty mount points for the shared fragments and
//! fills them at load time. A fragment that fails to load is logged and
//! its mount is left as it was; the rest of the page keeps working.

use std::path::{Component, Path, PathBuf};

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::page::Page;

/// Header fragment file.
pub const HEADER_FRAGMENT: &str = "header.html";
/// Footer fragment file.
pub const FOOTER_FRAGMENT: &str = "footer.html";
/// Cart sidebar fragment file.
pub const CART_SIDEBAR_FRAGMENT: &str = "cart_sidebar.html";

/// Errors fetching a fragment.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// The HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("failed to load {path}: {status}")]
    Status {
        /// Requested fragment path.
        path: String,
        /// Response status.
        status: StatusCode,
    },

    /// Reading the fragment file failed.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Requested fragment path.
        path: String,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The fragment path is not a relative path inside the source.
    #[error("invalid fragment path: {0}")]
    InvalidPath(String),
}

/// Where fragments are fetched from.
#[derive(Debug, Clone)]
pub enum FragmentSource {
    /// Fetch over HTTP, relative to a base URL.
    Http {
        /// Shared HTTP client.
        client: Client,
        /// Base URL; should end with `/`.
        base_url: Url,
    },
    /// Read from a local directory of static files.
    Directory(PathBuf),
}

impl FragmentSource {
    /// Interpret `location` as an HTTP(S) base URL or, failing that, a
    /// directory path.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Http {
                client: Client::new(),
                base_url: with_trailing_slash(url),
            },
            _ => Self::Directory(PathBuf::from(location)),
        }
    }

    /// Fetch the text of the fragment at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error on network or I/O failure, on a non-success HTTP
    /// status, or if `path` escapes the source.
    pub async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
        let relative = checked_relative(path)?;

        match self {
            Self::Http { client, base_url } => {
                let url = base_url
                    .join(path)
                    .map_err(|_| FragmentError::InvalidPath(path.to_owned()))?;
                let response = client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FragmentError::Status {
                        path: path.to_owned(),
                        status,
                    });
                }
                Ok(response.text().await?)
            }
            Self::Directory(root) => tokio::fs::read_to_string(root.join(relative))
                .await
                .map_err(|source| FragmentError::Io {
                    path: path.to_owned(),
                    source,
                }),
        }
    }

    /// Fetch `path` and inject it verbatim into the `mount_id` mount.
    ///
    /// Failures are logged and leave the mount untouched. Returns whether
    /// the fragment was injected.
    #[instrument(skip(self, page))]
    pub async fn load_component(&self, page: &Page, mount_id: &str, path: &str) -> bool {
        match self.fetch(path).await {
            Ok(html) => {
                let injected = page.set_html(mount_id, html);
                if injected {
                    tracing::debug!("fragment loaded");
                } else {
                    tracing::debug!("mount point not on page, fragment discarded");
                }
                injected
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load fragment");
                false
            }
        }
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn checked_relative(path: &str) -> Result<&Path, FragmentError> {
    let relative = Path::new(path);
    let escapes = path.is_empty()
        || relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(FragmentError::InvalidPath(path.to_owned()));
    }
    Ok(relative)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fragment_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(HEADER_FRAGMENT), "<header>Game Mania</header>").unwrap();
        dir
    }

    #[test]
    fn test_from_location_url() {
        let source = FragmentSource::from_location("https://gamemania.example/site");
        match source {
            FragmentSource::Http { base_url, .. } => {
                assert_eq!(base_url.as_str(), "https://gamemania.example/site/");
            }
            FragmentSource::Directory(_) => panic!("expected HTTP source"),
        }
    }

    #[test]
    fn test_from_location_directory() {
        assert!(matches!(
            FragmentSource::from_location("public"),
            FragmentSource::Directory(_)
        ));
        assert!(matches!(
            FragmentSource::from_location("C:/site"),
            FragmentSource::Directory(_)
        ));
    }

    #[test]
    fn test_rejects_escaping_paths() {
        assert!(checked_relative("../secret.html").is_err());
        assert!(checked_relative("/etc/passwd").is_err());
        assert!(checked_relative("").is_err());
        assert!(checked_relative("partials/header.html").is_ok());
    }

    #[tokio::test]
    async fn test_load_component_injects() {
        let dir = fragment_dir();
        let source = FragmentSource::Directory(dir.path().to_path_buf());
        let page = Page::new("/", ["header-target"]);

        assert!(
            source
                .load_component(&page, "header-target", HEADER_FRAGMENT)
                .await
        );
        assert_eq!(
            page.html("header-target").unwrap(),
            "<header>Game Mania</header>"
        );
    }

    #[tokio::test]
    async fn test_load_component_missing_file_leaves_mount() {
        let dir = fragment_dir();
        let source = FragmentSource::Directory(dir.path().to_path_buf());
        let page = Page::new("/", ["footer-target"]);
        page.set_html("footer-target", "fallback");

        assert!(
            !source
                .load_component(&page, "footer-target", FOOTER_FRAGMENT)
                .await
        );
        assert_eq!(page.html("footer-target").unwrap(), "fallback");
    }

    #[tokio::test]
    async fn test_load_component_without_mount() {
        let dir = fragment_dir();
        let source = FragmentSource::Directory(dir.path().to_path_buf());
        let page = Page::new("/", Vec::<String>::new());
        assert!(
            !source
                .load_component(&page, "header-target", HEADER_FRAGMENT)
                .await
        );
    }

    #[tokio::test]
    async fn test_fetch_io_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = FragmentSource::Directory(dir.path().to_path_buf());
        let err = source.fetch("missing.html").await.unwrap_err();
        assert!(matches!(err, FragmentError::Io { ref path, .. } if path == "missing.html"));
    }
}
