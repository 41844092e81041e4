//! Event model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub exhibitors: u32,
    #[serde(default)]
    pub buyers: u32,
    #[serde(default)]
    pub countries: u32,
    #[serde(default)]
    pub sectors: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub location: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub time: String,
    pub exhibitors: u32,
    pub buyers: u32,
    pub countries: u32,
    pub sectors: u32,
    pub description: String,
    pub is_published: bool,
}
