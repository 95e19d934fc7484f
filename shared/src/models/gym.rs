//! Gym Info Model (facility profile, plain CRUD)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymInfo {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub schedule: String,
    pub phone: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGymInfoRequest {
    pub name: String,
    pub address: String,
    pub schedule: String,
    pub phone: String,
    pub logo_url: String,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGymInfoRequest {
    pub name: String,
    pub address: String,
    pub schedule: String,
    pub phone: String,
    pub logo_url: String,
    pub gym_id: i64,
}
