// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};
use datarepo_pages::util::test_fixtures::TestFixtureRoot;

#[actix_web::test]
async fn malformed_template_returns_server_error() {
    let fixture = TestFixtureRoot::new_unique("pages-broken-template").expect("fixture root");
    fixture.init_runtime_layout().expect("fixture layout");
    // Unterminated block: the engine fails at render time.
    fixture
        .write_template("pages/terms.html", "{% if app_name %}no endif")
        .expect("write broken override");

    let harness = common::TestHarness::from_fixture(fixture);
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = test::TestRequest::get().uri("/terms").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(!html.is_empty());
    assert!(html.contains("500"));
}

#[actix_web::test]
async fn healthy_routes_unaffected_by_one_broken_template() {
    let fixture = TestFixtureRoot::new_unique("pages-partial-breakage").expect("fixture root");
    fixture.init_runtime_layout().expect("fixture layout");
    fixture
        .write_template("pages/terms.html", "{% if app_name %}no endif")
        .expect("write broken override");

    let harness = common::TestHarness::from_fixture(fixture);
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = test::TestRequest::get().uri("/faq").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
