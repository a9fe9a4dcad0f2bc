//! Tests for path resolution and CGI routing

use httpd::config::SiteConfig;
use httpd::http::request::Request;
use httpd::resolver::{self, Route};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

fn site(root: &TempDir) -> SiteConfig {
    SiteConfig {
        document_root: root.path().to_path_buf(),
        index_file: "index.html".to_string(),
    }
}

fn write_file(path: &Path, contents: &str, mode: u32) {
    fs::write(path, contents).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

fn get(line: &str) -> Request {
    Request::from_request_line(line).unwrap()
}

#[tokio::test]
async fn test_root_resolves_to_index() {
    let root = TempDir::new().unwrap();
    write_file(&root.path().join("index.html"), "<p>hi</p>", 0o644);

    let route = resolver::resolve(&site(&root), &get("GET / HTTP/1.0"))
        .await
        .unwrap();

    assert_eq!(
        route,
        Route {
            path: root.path().join("index.html"),
            is_cgi: false,
        }
    );
}

#[tokio::test]
async fn test_subdirectory_resolves_to_its_index() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("sub")).unwrap();
    write_file(&root.path().join("sub/index.html"), "<p>sub</p>", 0o644);

    let route = resolver::resolve(&site(&root), &get("GET /sub/ HTTP/1.0"))
        .await
        .unwrap();
    assert_eq!(route.path, root.path().join("sub/index.html"));
    assert!(!route.is_cgi);
}

#[tokio::test]
async fn test_directory_without_trailing_slash_gets_index_appended() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("sub")).unwrap();
    write_file(&root.path().join("sub/index.html"), "<p>sub</p>", 0o644);

    let route = resolver::resolve(&site(&root), &get("GET /sub HTTP/1.0"))
        .await
        .unwrap();
    assert_eq!(route.path, root.path().join("sub/index.html"));
}

#[tokio::test]
async fn test_missing_path_yields_none() {
    let root = TempDir::new().unwrap();
    let route = resolver::resolve(&site(&root), &get("GET /nope.html HTTP/1.0")).await;
    assert_eq!(route, None);
}

#[tokio::test]
async fn test_directory_without_index_yields_none() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("empty")).unwrap();

    let route = resolver::resolve(&site(&root), &get("GET /empty/ HTTP/1.0")).await;
    assert_eq!(route, None);
}

#[tokio::test]
async fn test_executable_bit_routes_to_cgi() {
    let root = TempDir::new().unwrap();
    write_file(&root.path().join("run.cgi"), "#!/bin/sh\n", 0o755);

    let route = resolver::resolve(&site(&root), &get("GET /run.cgi HTTP/1.0"))
        .await
        .unwrap();
    assert!(route.is_cgi);
}

#[tokio::test]
async fn test_group_execute_bit_is_enough() {
    let root = TempDir::new().unwrap();
    write_file(&root.path().join("run.cgi"), "#!/bin/sh\n", 0o614);

    let route = resolver::resolve(&site(&root), &get("GET /run.cgi HTTP/1.0"))
        .await
        .unwrap();
    assert!(route.is_cgi);
}

#[tokio::test]
async fn test_plain_file_routes_to_static() {
    let root = TempDir::new().unwrap();
    write_file(&root.path().join("page.html"), "<p>page</p>", 0o644);

    let route = resolver::resolve(&site(&root), &get("GET /page.html HTTP/1.0"))
        .await
        .unwrap();
    assert!(!route.is_cgi);
}

#[tokio::test]
async fn test_query_string_forces_cgi_on_plain_file() {
    let root = TempDir::new().unwrap();
    write_file(&root.path().join("page.html"), "<p>page</p>", 0o644);

    let route = resolver::resolve(&site(&root), &get("GET /page.html?a=1 HTTP/1.0"))
        .await
        .unwrap();
    assert!(route.is_cgi);
}
