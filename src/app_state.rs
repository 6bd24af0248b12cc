// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::pages::error::ErrorRenderer;
use crate::runtime_paths::RuntimePaths;
use crate::templates::{MiniJinjaEngine, TemplateEngine};

/// Shared application state, built once at startup and immutable afterwards.
pub struct AppState {
    pub templates: Arc<dyn TemplateEngine>,
    pub error_renderer: ErrorRenderer,
    pub runtime_paths: RuntimePaths,
}

impl AppState {
    pub fn new(app_name: &str, runtime_paths: RuntimePaths) -> Self {
        Self {
            templates: Arc::new(MiniJinjaEngine::with_override_dir(Some(
                runtime_paths.templates_dir.clone(),
            ))),
            error_renderer: ErrorRenderer::new(app_name.to_string()),
            runtime_paths,
        }
    }
}
