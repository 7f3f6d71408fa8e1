use serde::{Deserialize, Serialize};

/// Every Ergast response is wrapped in an `MRData` envelope.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiResponse<T> {
    #[serde(rename = "MRData")]
    pub mr_data: T,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StandingsData {
    #[serde(rename = "StandingsTable")]
    pub standings_table: StandingsTable,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StandingsTable {
    pub season: Option<String>,
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StandingsList {
    pub round: Option<String>,
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings: Vec<DriverStanding>,
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<ConstructorStanding>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DriverStanding {
    pub position: Option<String>,
    #[serde(rename = "positionText")]
    pub position_text: Option<String>,
    pub points: String,
    #[serde(rename = "Driver")]
    pub driver: ApiDriver,
    #[serde(rename = "Constructors", default)]
    pub constructors: Vec<ApiConstructor>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConstructorStanding {
    pub position: Option<String>,
    pub points: String,
    #[serde(rename = "Constructor")]
    pub constructor: ApiConstructor,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiDriver {
    #[serde(rename = "driverId")]
    pub driver_id: String,
    #[serde(rename = "permanentNumber")]
    pub permanent_number: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "givenName")]
    pub given_name: String,
    #[serde(rename = "familyName")]
    pub family_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConstructor {
    #[serde(rename = "constructorId")]
    pub constructor_id: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RaceData {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<ApiRace>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiRace {
    #[serde(rename = "raceName")]
    pub race_name: String,
    pub round: String,
    pub date: String,
    #[serde(rename = "Results", default)]
    pub results: Vec<ApiResult>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiResult {
    pub position: String,
    #[serde(rename = "Driver")]
    pub driver: ApiDriver,
}
