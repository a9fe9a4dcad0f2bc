//! Path resolution under the document root.
//!
//! Maps a parsed URL path to a filesystem path and decides whether the
//! target is served statically or handed to the script executor.

use crate::config::SiteConfig;
use crate::http::request::Request;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tokio::fs;

/// Where a request resolved to, and which responder handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: PathBuf,
    pub is_cgi: bool,
}

/// Resolves a request against the document root.
///
/// A path ending in `/` gets the index filename appended before the lookup;
/// a path that turns out to be a directory gets it appended after. The
/// executable check applies to the final regular file: any owner, group, or
/// other execute bit routes the request to the script executor, as does a
/// query string extracted from a GET URL.
///
/// Returns `None` when nothing exists at the resolved path; the caller is
/// responsible for draining the request and emitting the 404 response.
pub async fn resolve(site: &SiteConfig, req: &Request) -> Option<Route> {
    let mut path = format!("{}{}", site.document_root.display(), req.path);
    if path.ends_with('/') {
        path.push_str(&site.index_file);
    }

    let mut path = PathBuf::from(path);
    let mut meta = fs::metadata(&path).await.ok()?;

    if meta.is_dir() {
        path.push(&site.index_file);
        meta = fs::metadata(&path).await.ok()?;
    }

    let executable = meta.is_file() && meta.permissions().mode() & 0o111 != 0;
    let is_cgi = executable || req.query_string.is_some();

    Some(Route { path, is_cgi })
}
