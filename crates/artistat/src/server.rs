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

//! Static file server for the companion web page.
//!
//! Existing files are served as-is and directories serve their own
//! `index.html`, or 404 when they have none. Every other path answers with the
//! root `index.html` so client-side routing can take over.

use crate::config::ServerSettings;
use crate::error::Result;
use axum::extract::{Request, State};
use axum::http::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Router;
use percent_encoding::percent_decode_str;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::services::ServeFile;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

pub const INDEX_DOCUMENT: &str = "index.html";

pub fn router(root: &Path) -> Router {
    Router::new()
        .fallback(serve_path)
        .with_state(Arc::new(root.to_path_buf()))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn serve_path(State(root): State<Arc<PathBuf>>, request: Request) -> Response {
    let target = resolve(&root, request.uri().path()).await;
    debug!(path = %request.uri().path(), target = %target.display(), "resolved request");
    match ServeFile::new(target).oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// Maps a request path to the file that answers it.
pub async fn resolve(root: &Path, request_path: &str) -> PathBuf {
    let index = root.join(INDEX_DOCUMENT);
    let Some(relative) = relative_path(request_path) else {
        return index;
    };
    if relative.as_os_str().is_empty() {
        return index;
    }
    let candidate = root.join(relative);
    match tokio::fs::metadata(&candidate).await {
        Ok(meta) if meta.is_file() => candidate,
        Ok(meta) if meta.is_dir() => candidate.join(INDEX_DOCUMENT),
        _ => index,
    }
}

/// Decoded path below the root, or `None` when it would escape it.
fn relative_path(request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let mut relative = PathBuf::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            segment if segment.contains('\\') => return None,
            segment => relative.push(segment),
        }
    }
    Some(relative)
}

/// Serves `settings.root` on every interface until Ctrl+C.
pub async fn serve(settings: &ServerSettings) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    info!(%local, root = %settings.root.display(), "static server listening");
    println!("Server running at http://localhost:{}/", local.port());
    println!("Press Ctrl+C to stop the server");
    let app = router(&settings.root);
    tokio::select! {
        served = axum::serve(listener, app) => served?,
        _ = tokio::signal::ctrl_c() => println!("\nServer stopped."),
    }
    Ok(())
}
