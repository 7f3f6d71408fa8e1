use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    pub id: String,
    pub name: String,
    pub points: f64,
    pub position: u32,
    pub color: String,
    pub logo_url: String,
}
