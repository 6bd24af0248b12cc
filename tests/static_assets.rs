// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

mod common;

use actix_web::{http::StatusCode, test};
use datarepo_pages::util::test_fixtures::TestFixtureRoot;

#[actix_web::test]
async fn serves_files_from_assets_dir() {
    let fixture = TestFixtureRoot::new_unique("assets-serve").expect("fixture root");
    fixture.init_runtime_layout().expect("fixture layout");
    fixture
        .write_asset("css/site.css", b"body { margin: 0; }")
        .expect("write asset");

    let harness = common::TestHarness::from_fixture(fixture);
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/static/css/site.css")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"body { margin: 0; }");
}

#[actix_web::test]
async fn missing_asset_is_not_found() {
    let harness = common::TestHarness::new();
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/static/nope.css")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn traversal_outside_assets_dir_is_not_found() {
    let fixture = TestFixtureRoot::new_unique("assets-traversal").expect("fixture root");
    fixture.init_runtime_layout().expect("fixture layout");
    std::fs::write(fixture.path().join("config.yaml"), "app:\n  name: x\n")
        .expect("write config");

    let harness = common::TestHarness::from_fixture(fixture);
    let app = test::init_service(common::build_test_app(harness.app_state.clone())).await;

    let req = test::TestRequest::get()
        .uri("/static/%2e%2e/config.yaml")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
