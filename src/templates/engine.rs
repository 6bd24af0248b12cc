// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use minijinja::{Environment, Value, default_auto_escape_callback};
use std::path::{Component, Path, PathBuf};

pub trait TemplateEngine: Send + Sync {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error>;
}

pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        Self::with_override_dir(None)
    }

    /// Instance templates under `override_dir` take precedence over the
    /// embedded defaults, mirroring how a deployment themes its pages
    /// without rebuilding.
    pub fn with_override_dir(override_dir: Option<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_loader(move |name| {
            if let Some(root) = override_dir.as_deref()
                && let Some(content) = load_override_template(root, name)?
            {
                return Ok(Some(content));
            }
            Ok(embedded_template(name).map(|s| s.to_string()))
        });
        Self { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template_name: &str, context: Value) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template_name)?;
        tmpl.render(context)
    }
}

/// Embedded default templates, compiled into the binary
fn embedded_template(name: &str) -> Option<&'static str> {
    match name {
        // Static pages
        "pages/faq.html" => Some(include_str!("../pages/templates/faq.html")),
        "pages/news.html" => Some(include_str!("../pages/templates/news.html")),
        "pages/terms.html" => Some(include_str!("../pages/templates/terms.html")),

        // Error pages
        "error_404.html" => Some(include_str!("../pages/templates/error_404.html")),
        "error_500.html" => Some(include_str!("../pages/templates/error_500.html")),

        _ => None,
    }
}

fn load_override_template(
    root: &Path,
    name: &str,
) -> Result<Option<String>, minijinja::Error> {
    // Template names are logical identifiers; anything that would step
    // outside the override directory is not a template name.
    let relative = Path::new(name);
    let safe = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    if !safe {
        return Ok(None);
    }

    let candidate = root.join(relative);
    if !candidate.is_file() {
        return Ok(None);
    }

    match std::fs::read_to_string(&candidate) {
        Ok(content) => Ok(Some(content)),
        Err(err) => Err(minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            format!(
                "failed to read override template '{}': {}",
                candidate.display(),
                err
            ),
        )),
    }
}
