use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A driver entry in the championship standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub team: String,
    pub points: f64,
    pub position: u32,
    pub position_change: i32,
    pub image_url: String,
}
