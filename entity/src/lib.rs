/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod admin_review;
pub mod comment;
pub mod like;
pub mod project_post;
pub mod project_resource;
pub mod service_request;
pub mod tariff;
pub mod user;
