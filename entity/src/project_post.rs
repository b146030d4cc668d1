/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[sea_orm(string_value = "frontend")]
    Frontend,
    #[sea_orm(string_value = "backend")]
    Backend,
    #[default]
    #[sea_orm(string_value = "fullstack")]
    Fullstack,
    #[sea_orm(string_value = "mobile")]
    Mobile,
    #[sea_orm(string_value = "design")]
    Design,
    #[sea_orm(string_value = "other")]
    Other,
}

impl ProjectType {
    pub fn code(&self) -> &'static str {
        match self {
            ProjectType::Frontend => "frontend",
            ProjectType::Backend => "backend",
            ProjectType::Fullstack => "fullstack",
            ProjectType::Mobile => "mobile",
            ProjectType::Design => "design",
            ProjectType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Frontend => "Frontend Development",
            ProjectType::Backend => "Backend Development",
            ProjectType::Fullstack => "Full-Stack Application",
            ProjectType::Mobile => "Mobile Application",
            ProjectType::Design => "UI/UX Design",
            ProjectType::Other => "Other",
        }
    }
}

impl std::str::FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(ProjectType::Frontend),
            "backend" => Ok(ProjectType::Backend),
            "fullstack" => Ok(ProjectType::Fullstack),
            "mobile" => Ok(ProjectType::Mobile),
            "design" => Ok(ProjectType::Design),
            "other" => Ok(ProjectType::Other),
            _ => Err(format!("Unknown project type: {}", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "project_post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub user: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub project_url: String,
    pub project_type: ProjectType,
    pub screenshot: Option<String>,
    pub screenshot_url_fallback: Option<String>,
    pub source_code_url: Option<String>,
    pub custom_field_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub custom_field_value: Option<String>,
    pub is_public: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::User",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::project_resource::Entity")]
    Resources,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comments,
    #[sea_orm(has_many = "super::like::Entity")]
    Likes,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::project_resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resources.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Likes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
