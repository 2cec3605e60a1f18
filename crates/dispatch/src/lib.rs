use std::{fs, path::PathBuf};

use thiserror::Error;
use tracing::info;
use url::Url;

/// Default destination for the messaging deep link.
pub const DEFAULT_SHARE_DESTINATION: &str = "201098662418";

/// Suggested filename for locally exported invoices.
pub const DEFAULT_EXPORT_FILENAME: &str = "invoice.txt";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to build share link for destination '{destination}': {source}")]
    ShareLink {
        destination: String,
        source: url::ParseError,
    },
    #[error("failed to open share link: {0}")]
    OpenLink(#[source] std::io::Error),
    #[error("failed to export invoice to '{}': {source}", .path.display())]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Outbound channel for a finished invoice payload. Sinks accept the final
/// string and own everything past the hand-off.
pub trait DispatchSink {
    fn dispatch(&self, payload: &str) -> Result<(), DispatchError>;
}

/// Builds the `wa.me` deep link for a payload: the text rides URL-encoded
/// in the `text` query parameter.
pub fn share_link(destination: &str, payload: &str) -> Result<Url, DispatchError> {
    let mut url =
        Url::parse(&format!("https://wa.me/{destination}")).map_err(|source| {
            DispatchError::ShareLink {
                destination: destination.to_string(),
                source,
            }
        })?;
    url.query_pairs_mut().append_pair("text", payload);
    Ok(url)
}

/// Seam for the actual link hand-off so the share sink stays testable.
pub trait LinkOpener {
    fn open_link(&self, url: &Url) -> Result<(), DispatchError>;
}

/// Writes the link to stdout for the user to follow; the terminal shell's
/// stand-in for an external share target.
pub struct PrintingOpener;

impl LinkOpener for PrintingOpener {
    fn open_link(&self, url: &Url) -> Result<(), DispatchError> {
        println!("Share link: {url}");
        Ok(())
    }
}

/// Messaging-channel sink: URL-encodes the payload into a share link and
/// hands it to the opener.
pub struct ShareLinkSink<O: LinkOpener> {
    destination: String,
    opener: O,
}

impl<O: LinkOpener> ShareLinkSink<O> {
    pub fn new(destination: impl Into<String>, opener: O) -> Self {
        Self {
            destination: destination.into(),
            opener,
        }
    }
}

impl<O: LinkOpener> DispatchSink for ShareLinkSink<O> {
    fn dispatch(&self, payload: &str) -> Result<(), DispatchError> {
        let url = share_link(&self.destination, payload)?;
        info!(destination = %self.destination, "dispatch: share link prepared");
        self.opener.open_link(&url)
    }
}

/// File-export sink: writes the payload as plain text to the target path.
pub struct FileExportSink {
    path: PathBuf,
}

impl FileExportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DispatchSink for FileExportSink {
    fn dispatch(&self, payload: &str) -> Result<(), DispatchError> {
        fs::write(&self.path, payload).map_err(|source| DispatchError::Export {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "dispatch: invoice exported");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
