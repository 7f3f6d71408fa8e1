use storage::models::{
    Constructor, Driver, RaceResult, ResultEntry, TeamPalette,
    short_code::{driver_code, foreign_code},
};

use super::models::{
    ApiDriver, ApiRace, ConstructorStanding, DriverStanding, StandingsData, StandingsList,
};
use crate::{ImporterError, Result};

const DRIVER_IMAGE_BASE: &str = "https://www.formula1.com/content/dam/fom-website/drivers";
const TEAM_LOGO_BASE: &str = "https://www.formula1.com/content/dam/fom-website/teams/2024";

/// Converts Ergast envelopes into the shared season model.
pub struct ErgastMapper<'a> {
    palette: &'a TeamPalette,
}

impl<'a> ErgastMapper<'a> {
    pub fn new(palette: &'a TeamPalette) -> Self {
        Self { palette }
    }

    pub fn drivers(&self, data: StandingsData) -> Result<Vec<Driver>> {
        let standings = first_list(data)?.driver_standings;
        standings.into_iter().map(|s| self.driver(s)).collect()
    }

    pub fn constructors(&self, data: StandingsData) -> Result<Vec<Constructor>> {
        let standings = first_list(data)?.constructor_standings;
        standings.into_iter().map(|s| self.constructor(s)).collect()
    }

    pub fn races(&self, races: Vec<ApiRace>) -> Result<Vec<RaceResult>> {
        races.into_iter().map(race).collect()
    }

    fn driver(&self, standing: DriverStanding) -> Result<Driver> {
        let position = match standing.position.as_deref() {
            Some(position) => parse_int(position, "driver position")?,
            None => 0,
        };

        Ok(Driver {
            id: driver_id(&standing.driver),
            name: format!(
                "{} {}",
                standing.driver.given_name, standing.driver.family_name
            ),
            team: standing
                .constructors
                .first()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            points: parse_points(&standing.points)?,
            position,
            position_change: 0,
            image_url: driver_image_url(&standing.driver),
        })
    }

    fn constructor(&self, standing: ConstructorStanding) -> Result<Constructor> {
        let position = match standing.position.as_deref() {
            Some(position) => parse_int(position, "constructor position")?,
            None => 0,
        };
        let slug = &standing.constructor.constructor_id;

        Ok(Constructor {
            id: foreign_code(slug),
            color: self.palette.color_for(slug).to_string(),
            logo_url: format!(
                "{}/{}-logo.png.transform/2col/image.png",
                TEAM_LOGO_BASE, slug
            ),
            name: standing.constructor.name,
            points: parse_points(&standing.points)?,
            position,
        })
    }
}

fn race(race: ApiRace) -> Result<RaceResult> {
    let round = parse_int(&race.round, "round")?;
    let mut result = RaceResult::new(race.race_name, round, race.date);

    for entry in race.results {
        let position = parse_int(&entry.position, "result position")?;
        result
            .results
            .push(ResultEntry::new(driver_id(&entry.driver), position));
    }

    result.results.sort_by_key(|entry| entry.position);
    Ok(result)
}

fn first_list(data: StandingsData) -> Result<StandingsList> {
    data.standings_table
        .standings_lists
        .into_iter()
        .next()
        .ok_or_else(|| ImporterError::MalformedResponse("empty StandingsLists".to_string()))
}

/// Ergast carries the three-letter code directly for modern drivers; older
/// entries only have a family name.
fn driver_id(driver: &ApiDriver) -> String {
    match driver.code.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => code.to_uppercase(),
        _ => driver_code(&driver.family_name),
    }
}

fn driver_image_url(driver: &ApiDriver) -> String {
    let initial: String = driver
        .driver_id
        .chars()
        .take(1)
        .flat_map(char::to_uppercase)
        .collect();

    format!(
        "{}/{}/{}{}01_{}_{}/{}.png.transform/2col/image.png",
        DRIVER_IMAGE_BASE,
        initial,
        foreign_code(&driver.driver_id),
        driver.permanent_number.as_deref().unwrap_or_default(),
        driver.given_name,
        driver.family_name,
        driver.driver_id
    )
}

fn parse_points(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|points| points.is_finite() && *points >= 0.0)
        .ok_or_else(|| {
            ImporterError::MalformedResponse(format!("invalid points value '{}'", value))
        })
}

fn parse_int(value: &str, field: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ImporterError::MalformedResponse(format!("invalid {} '{}'", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::ergast::models::{ApiResponse, RaceData};

    const DRIVER_STANDINGS: &str = r#"{
        "MRData": {
            "StandingsTable": {
                "season": "2025",
                "StandingsLists": [{
                    "round": "4",
                    "DriverStandings": [
                        {
                            "position": "1", "positionText": "1", "points": "77",
                            "Driver": {"driverId": "norris", "permanentNumber": "4", "code": "NOR",
                                       "givenName": "Lando", "familyName": "Norris"},
                            "Constructors": [{"constructorId": "mclaren", "name": "McLaren"}]
                        },
                        {
                            "position": "2", "positionText": "2", "points": "74.5",
                            "Driver": {"driverId": "piastri", "permanentNumber": "81",
                                       "givenName": "Oscar", "familyName": "Piastri"},
                            "Constructors": []
                        }
                    ]
                }]
            }
        }
    }"#;

    const CONSTRUCTOR_STANDINGS: &str = r#"{
        "MRData": {
            "StandingsTable": {
                "StandingsLists": [{
                    "ConstructorStandings": [
                        {"position": "1", "points": "151",
                         "Constructor": {"constructorId": "mclaren", "name": "McLaren"}},
                        {"position": "2", "points": "93",
                         "Constructor": {"constructorId": "red_bull", "name": "Red Bull"}}
                    ]
                }]
            }
        }
    }"#;

    const RACES: &str = r#"{
        "MRData": {
            "RaceTable": {
                "Races": [{
                    "raceName": "Australian Grand Prix", "round": "1", "date": "2025-03-16",
                    "Results": [
                        {"position": "2", "Driver": {"driverId": "max_verstappen", "code": "VER",
                                                     "givenName": "Max", "familyName": "Verstappen"}},
                        {"position": "1", "Driver": {"driverId": "norris", "code": "NOR",
                                                     "givenName": "Lando", "familyName": "Norris"}}
                    ]
                }]
            }
        }
    }"#;

    fn standings(json: &str) -> StandingsData {
        serde_json::from_str::<ApiResponse<StandingsData>>(json)
            .unwrap()
            .mr_data
    }

    #[test]
    fn test_map_driver_standings() {
        let palette = TeamPalette::season_2025();
        let drivers = ErgastMapper::new(&palette)
            .drivers(standings(DRIVER_STANDINGS))
            .unwrap();

        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].id, "NOR");
        assert_eq!(drivers[0].name, "Lando Norris");
        assert_eq!(drivers[0].team, "McLaren");
        assert_eq!(drivers[0].points, 77.0);
        assert_eq!(drivers[0].position, 1);
        assert_eq!(
            drivers[0].image_url,
            "https://www.formula1.com/content/dam/fom-website/drivers/N/NOR401_Lando_Norris/norris.png.transform/2col/image.png"
        );

        assert_eq!(drivers[1].id, "PIA");
        assert_eq!(drivers[1].points, 74.5);
        assert_eq!(drivers[1].team, "");
    }

    #[test]
    fn test_map_constructor_standings() {
        let palette = TeamPalette::season_2025();
        let constructors = ErgastMapper::new(&palette)
            .constructors(standings(CONSTRUCTOR_STANDINGS))
            .unwrap();

        assert_eq!(constructors[0].id, "MCL");
        assert_eq!(constructors[0].color, "#FF8700");
        assert_eq!(constructors[1].id, "RED");
        assert_eq!(constructors[1].color, "#0600EF");
        assert_eq!(constructors[1].position, 2);
        assert!(constructors[1].logo_url.contains("/red_bull-logo.png"));
    }

    #[test]
    fn test_map_races() {
        let palette = TeamPalette::season_2025();
        let data: ApiResponse<RaceData> = serde_json::from_str(RACES).unwrap();
        let races = ErgastMapper::new(&palette)
            .races(data.mr_data.race_table.races)
            .unwrap();

        assert_eq!(races.len(), 1);
        assert_eq!(races[0].round, 1);
        assert_eq!(races[0].date, "2025-03-16");
        assert_eq!(races[0].results[0], ResultEntry::new("NOR", 1));
        assert_eq!(races[0].results[1], ResultEntry::new("VER", 2));
    }

    #[test]
    fn test_empty_standings_list_is_malformed() {
        let palette = TeamPalette::season_2025();
        let data = standings(r#"{"MRData": {"StandingsTable": {"StandingsLists": []}}}"#);
        let err = ErgastMapper::new(&palette).drivers(data).unwrap_err();
        assert!(matches!(err, ImporterError::MalformedResponse(_)));
    }

    #[test]
    fn test_bad_numbers_are_malformed() {
        assert!(parse_points("abc").is_err());
        assert!(parse_points("-3").is_err());
        assert_eq!(parse_points(" 12.5 ").unwrap(), 12.5);
        assert!(parse_int("R", "position").is_err());
        assert_eq!(parse_int("7", "position").unwrap(), 7);
    }
}
