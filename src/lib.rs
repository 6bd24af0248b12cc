// This file is part of the product DataRepo Pages.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod app_state;
pub mod bootstrap;
pub mod config;
pub mod pages;
pub mod runtime_paths;
pub mod templates;
pub mod util;

/// Crate version, logged at startup and exposed to hosts embedding the pages.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
