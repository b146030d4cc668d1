/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(50))")]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    #[sea_orm(string_value = "build_idea")]
    BuildIdea,
    #[sea_orm(string_value = "build_website")]
    BuildWebsite,
    #[sea_orm(string_value = "build_software")]
    BuildSoftware,
    #[sea_orm(string_value = "cybersecurity")]
    Cybersecurity,
    #[sea_orm(string_value = "training")]
    Training,
    #[sea_orm(string_value = "team_management")]
    TeamManagement,
    #[sea_orm(string_value = "join_us")]
    JoinUs,
    #[sea_orm(string_value = "other")]
    Other,
}

impl ServiceType {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::BuildIdea => "Build Your Idea",
            ServiceType::BuildWebsite => "Build a Website",
            ServiceType::BuildSoftware => "Build Software",
            ServiceType::Cybersecurity => "Cybersecurity Services",
            ServiceType::Training => "Training",
            ServiceType::TeamManagement => "Team Management",
            ServiceType::JoinUs => "Join Us",
            ServiceType::Other => "Other",
        }
    }
}

impl std::str::FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "build_idea" => Ok(ServiceType::BuildIdea),
            "build_website" => Ok(ServiceType::BuildWebsite),
            "build_software" => Ok(ServiceType::BuildSoftware),
            "cybersecurity" => Ok(ServiceType::Cybersecurity),
            "training" => Ok(ServiceType::Training),
            "team_management" => Ok(ServiceType::TeamManagement),
            "join_us" => Ok(ServiceType::JoinUs),
            "other" => Ok(ServiceType::Other),
            _ => Err(format!("Unknown service type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    #[sea_orm(string_value = "company")]
    Company,
    #[sea_orm(string_value = "individual")]
    Individual,
}

impl OrganizationType {
    pub fn label(&self) -> &'static str {
        match self {
            OrganizationType::Company => "Company/Organization",
            OrganizationType::Individual => "Individual",
        }
    }
}

impl std::str::FromStr for OrganizationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(OrganizationType::Company),
            "individual" => Ok(OrganizationType::Individual),
            _ => Err(format!("Unknown organization type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, DeriveActiveEnum, EnumIter, Deserialize, Serialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum BudgetRange {
    #[sea_orm(string_value = "below_20k")]
    #[serde(rename = "below_20k")]
    Below20k,
    #[sea_orm(string_value = "20k_50k")]
    #[serde(rename = "20k_50k")]
    From20kTo50k,
    #[sea_orm(string_value = "50k_100k")]
    #[serde(rename = "50k_100k")]
    From50kTo100k,
    #[sea_orm(string_value = "100k_200k")]
    #[serde(rename = "100k_200k")]
    From100kTo200k,
    #[sea_orm(string_value = "200k_500k")]
    #[serde(rename = "200k_500k")]
    From200kTo500k,
    #[sea_orm(string_value = "above_500k")]
    #[serde(rename = "above_500k")]
    Above500k,
}

impl BudgetRange {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Below20k => "Below 20,000 RWF",
            BudgetRange::From20kTo50k => "20,000 - 50,000 RWF",
            BudgetRange::From50kTo100k => "50,000 - 100,000 RWF",
            BudgetRange::From100kTo200k => "100,000 - 200,000 RWF",
            BudgetRange::From200kTo500k => "200,000 - 500,000 RWF",
            BudgetRange::Above500k => "Above 500,000 RWF",
        }
    }
}

impl std::str::FromStr for BudgetRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "below_20k" => Ok(BudgetRange::Below20k),
            "20k_50k" => Ok(BudgetRange::From20kTo50k),
            "50k_100k" => Ok(BudgetRange::From50kTo100k),
            "100k_200k" => Ok(BudgetRange::From100kTo200k),
            "200k_500k" => Ok(BudgetRange::From200kTo500k),
            "above_500k" => Ok(BudgetRange::Above500k),
            _ => Err(format!("Unknown budget range: {}", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "service_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub request_code: String,
    pub user: Option<i32>,
    pub service_type: ServiceType,
    pub country: String,
    pub city: String,
    pub organization_type: OrganizationType,
    pub organization_name: String,
    pub preferred_language: String,
    pub job_category: String,
    #[sea_orm(column_type = "Text")]
    pub job_description: String,
    pub job_attachment_url: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub primary_phone: String,
    pub secondary_phone: String,
    pub primary_email: String,
    pub budget_range: BudgetRange,
    pub terms_accepted: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::User",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::admin_review::Entity")]
    Reviews,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::admin_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
