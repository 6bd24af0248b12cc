// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, Result, web};
use datarepo_pages::app_state::AppState;
use datarepo_pages::pages;
use datarepo_pages::util::test_fixtures::TestFixtureRoot;
use std::sync::Arc;

pub const APP_NAME: &str = "Test Repository";

pub struct TestHarness {
    pub fixture: TestFixtureRoot,
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        let fixture = TestFixtureRoot::new_unique("pages-test-suite").expect("fixture root");
        fixture.init_runtime_layout().expect("fixture layout");
        Self::from_fixture(fixture)
    }

    /// Builds the state after the fixture has been seeded with overrides
    /// or assets. The template engine resolves overrides at render time,
    /// but constructing state last keeps tests honest about startup order.
    pub fn from_fixture(fixture: TestFixtureRoot) -> Self {
        let runtime_paths = fixture.runtime_paths().expect("runtime paths");
        let app_state = Arc::new(AppState::new(APP_NAME, runtime_paths));
        Self { fixture, app_state }
    }
}

pub fn build_test_app(
    app_state: Arc<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(app_state))
        .configure(pages::configure)
        .default_service(web::route().to(test_default_not_found))
}

async fn test_default_not_found(app_state: web::Data<AppState>) -> Result<HttpResponse> {
    pages::error::serve_404(&app_state.error_renderer, app_state.templates.as_ref())
}
