/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const SITE_HEADER: &str = "Gloex Administration";
pub const SITE_TITLE: &str = "Gloex Administration Portal";
pub const INDEX_TITLE: &str = "Welcome to the Gloex Administration";

pub const SESSION_COOKIE: &str = "gloex_session";

pub const REQUEST_CODE_LENGTH: usize = 8;
pub const REQUEST_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const REQUEST_CODE_ATTEMPTS: usize = 5;

pub const SCREENSHOT_DIR: &str = "project_screenshots";
pub const SCREENSHOT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

pub const DEFAULT_TARIFF_COLOR: &str = "#6366F1";

pub const MAX_USERNAME_LENGTH: usize = 150;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_URL_LENGTH: usize = 500;
pub const MAX_CUSTOM_FIELD_NAME_LENGTH: usize = 50;
pub const MAX_RESOURCE_NAME_LENGTH: usize = 100;
pub const MAX_LOCATION_LENGTH: usize = 100;
pub const MAX_ORGANIZATION_NAME_LENGTH: usize = 255;
pub const MAX_LANGUAGE_LENGTH: usize = 50;
pub const MAX_JOB_CATEGORY_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 20;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_PRICE_LENGTH: usize = 50;
