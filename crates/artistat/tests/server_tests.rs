// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use artistat::server::{resolve, router};
use axum::body::{to_bytes, Body};
use axum::http::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use axum::http::{HeaderMap, Request, StatusCode};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<html><body>catalogue</body></html>";

struct Site {
    _dir: TempDir,
    root: PathBuf,
}

fn site() -> Site {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("secret.txt"), "outside the root").unwrap();
    let root = dir.path().join("site");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("index.html"), INDEX).unwrap();
    fs::write(root.join("app.js"), "console.log('ready');").unwrap();
    fs::create_dir(root.join("figures")).unwrap();
    fs::write(root.join("figures").join("plot.txt"), "chart").unwrap();
    fs::create_dir(root.join("docs")).unwrap();
    fs::write(root.join("docs").join("index.html"), "DOCS").unwrap();
    fs::write(root.join("my chart.txt"), "spaced").unwrap();
    Site { _dir: dir, root }
}

async fn get(site: &Site, uri: &str) -> (StatusCode, HeaderMap, String) {
    let response = router(&site.root)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_index() {
    let site = site();
    let (status, headers, body) = get(&site, "/catalogue/some/route").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
    assert_eq!(
        headers.get(CACHE_CONTROL).unwrap(),
        "no-cache, no-store, must-revalidate"
    );
    assert_eq!(headers.get(PRAGMA).unwrap(), "no-cache");
    assert_eq!(headers.get(EXPIRES).unwrap(), "0");
}

#[tokio::test]
async fn test_existing_file_is_served() {
    let site = site();
    let (status, headers, body) = get(&site, "/figures/plot.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "chart");
    assert_eq!(headers.get(PRAGMA).unwrap(), "no-cache");

    let (status, _, body) = get(&site, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ready"));

    let (status, _, body) = get(&site, "/my%20chart.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "spaced");
}

#[tokio::test]
async fn test_root_serves_index() {
    let site = site();
    let (status, _, body) = get(&site, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
}

#[tokio::test]
async fn test_directory_serves_its_index() {
    let site = site();
    for uri in ["/docs", "/docs/"] {
        let (status, headers, body) = get(&site, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, "DOCS", "{uri}");
        assert_eq!(headers.get(EXPIRES).unwrap(), "0");
    }
}

#[tokio::test]
async fn test_directory_without_index_is_not_found() {
    let site = site();
    let (status, headers, _) = get(&site, "/figures").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers.get(PRAGMA).unwrap(), "no-cache");
}

#[tokio::test]
async fn test_paths_cannot_escape_the_root() {
    let site = site();
    let (status, _, body) = get(&site, "/%2e%2e/secret.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX);
    assert_eq!(
        resolve(&site.root, "/../secret.txt").await,
        site.root.join("index.html")
    );
}
