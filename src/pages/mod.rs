// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::web;

pub mod assets;
pub mod error;
pub mod handlers;

/// Registers the static pages blueprint on the host application.
///
/// Exactly three page routes plus the blueprint's static folder. No
/// catch-all is registered here; unhandled paths fall through to the
/// host's own default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/faq", web::get().to(handlers::faq))
        .route("/news", web::get().to(handlers::news))
        .route("/terms", web::get().to(handlers::terms))
        .route("/static/{filename:.*}", web::get().to(assets::serve_asset));
}
