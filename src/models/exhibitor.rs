//! Exhibitor registration model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::asset::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitorStatus {
    #[default]
    Pending,
    Contacted,
    Paid,
    Rejected,
}

impl ExhibitorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExhibitorStatus::Pending => "pending",
            ExhibitorStatus::Contacted => "contacted",
            ExhibitorStatus::Paid => "paid",
            ExhibitorStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exhibitor {
    pub id: i64,
    pub company_name: String,
    #[serde(default)]
    pub contact_person: String,
    #[serde(default)]
    pub designation: String,
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub status: ExhibitorStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateExhibitorRequest {
    pub company_name: String,
    pub contact_person: String,
    pub designation: String,
    pub email: String,
    pub contact_number: String,
    pub product: String,
    pub address: String,
    pub status: ExhibitorStatus,
    pub company_logo: Option<Asset>,
}
