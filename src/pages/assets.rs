// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::app_state::AppState;
use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, Result, web};

/// Serves a file from the blueprint's static folder. Contents are opaque
/// to this crate; only containment inside the assets directory is enforced.
pub async fn serve_asset(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let filename: String = match req.match_info().get("filename") {
        Some(f) if !f.is_empty() => f.to_string(),
        _ => return Ok(HttpResponse::NotFound().finish()),
    };

    let assets_dir = &app_state.runtime_paths.assets_dir;
    let candidate = assets_dir.join(&filename);

    let canonical = match candidate.canonicalize() {
        Ok(path) => path,
        Err(_) => return Ok(HttpResponse::NotFound().finish()),
    };

    if !canonical.starts_with(assets_dir) {
        log::warn!("Asset path escapes assets directory: {}", filename);
        return Ok(HttpResponse::NotFound().finish());
    }

    match NamedFile::open(&canonical) {
        Ok(file) => Ok(file.into_response(&req)),
        Err(err) => {
            log::warn!("Failed to open asset {}: {}", canonical.display(), err);
            Ok(HttpResponse::NotFound().finish())
        }
    }
}
