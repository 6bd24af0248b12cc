// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use super::error;
use crate::app_state::AppState;
use crate::templates::{PageContext, render_minijinja_template};
use actix_web::{HttpResponse, Result, web};

const FAQ_TEMPLATE: &str = "pages/faq.html";
const NEWS_TEMPLATE: &str = "pages/news.html";
const TERMS_TEMPLATE: &str = "pages/terms.html";

pub async fn faq(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    render_page(&app_state, FAQ_TEMPLATE, "FAQ")
}

pub async fn news(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    render_page(&app_state, NEWS_TEMPLATE, "News")
}

pub async fn terms(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    render_page(&app_state, TERMS_TEMPLATE, "Terms of Use")
}

/// Single render path for all static pages. A render failure is never
/// swallowed into an empty page; it surfaces as the 500 error page.
fn render_page(app_state: &AppState, template_name: &str, title: &str) -> Result<HttpResponse> {
    let context = PageContext::new(app_state.error_renderer.app_name(), title).to_value();

    match render_minijinja_template(app_state.templates.as_ref(), template_name, context) {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html)),
        Err(e) => {
            log::error!("Failed to render page template {}: {}", template_name, e);
            error::serve_500(&app_state.error_renderer, app_state.templates.as_ref())
        }
    }
}
