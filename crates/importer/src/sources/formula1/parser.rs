//! Extraction of standings and results from formula1.com listing pages.
//!
//! The markup contract is brittle: each page is a list of repeating elements
//! identified by CSS class. A page without any of them is a structural
//! mismatch; an element missing an optional field is kept with an empty value.

use scraper::{ElementRef, Html, Selector};
use storage::models::{
    Constructor, Driver, RaceResult, ResultEntry, TeamPalette,
    short_code::{driver_code, team_code, team_key},
};
use tracing::{debug, warn};

use crate::{ImporterError, Result};

const DRIVER_ITEM: &str = ".listing-item--link";
const TEAM_ITEM: &str = ".listing-item--team";
const ITEM_NAME: &str = ".listing-item--name";
const ITEM_TEAM: &str = ".listing-item--team";
const ITEM_PHOTO: &str = ".listing-item--photo img";

const RACE_ITEM: &str = ".race-results";
const RACE_TITLE: &str = ".race-title";
const RACE_DATE: &str = ".race-date";
const RESULT_ROW: &str = ".results-table tbody tr";
const ROW_POSITION: &str = ".position";
const ROW_DRIVER: &str = ".driver-name";

pub fn parse_drivers(html: &str, site: &str) -> Result<Vec<Driver>> {
    let document = Html::parse_document(html);
    let item = selector(DRIVER_ITEM)?;
    let name = selector(ITEM_NAME)?;
    let team = selector(ITEM_TEAM)?;
    let photo = selector(ITEM_PHOTO)?;

    let mut drivers: Vec<Driver> = Vec::new();
    for element in document.select(&item) {
        let Some(full_name) = first_text(&element, &name) else {
            warn!("Skipping driver listing without a name");
            continue;
        };

        drivers.push(Driver {
            id: driver_code(&full_name),
            team: first_text(&element, &team).unwrap_or_default(),
            points: 0.0,
            position: drivers.len() as u32 + 1,
            position_change: 0,
            image_url: image_src(&element, &photo, site),
            name: full_name,
        });
    }

    if drivers.is_empty() {
        return Err(ImporterError::StructuralMismatch(format!(
            "no driver listing found ({})",
            DRIVER_ITEM
        )));
    }

    debug!("Parsed {} drivers", drivers.len());
    Ok(drivers)
}

pub fn parse_constructors(
    html: &str,
    site: &str,
    palette: &TeamPalette,
) -> Result<Vec<Constructor>> {
    let document = Html::parse_document(html);
    let item = selector(TEAM_ITEM)?;
    let name = selector(ITEM_NAME)?;
    let photo = selector(ITEM_PHOTO)?;

    let mut constructors: Vec<Constructor> = Vec::new();
    for element in document.select(&item) {
        let Some(team_name) = first_text(&element, &name) else {
            warn!("Skipping team listing without a name");
            continue;
        };

        constructors.push(Constructor {
            id: team_code(&team_name),
            color: palette.color_for(&team_key(&team_name)).to_string(),
            points: 0.0,
            position: constructors.len() as u32 + 1,
            logo_url: image_src(&element, &photo, site),
            name: team_name,
        });
    }

    if constructors.is_empty() {
        return Err(ImporterError::StructuralMismatch(format!(
            "no team listing found ({})",
            TEAM_ITEM
        )));
    }

    debug!("Parsed {} constructors", constructors.len());
    Ok(constructors)
}

/// Rounds are numbered by listing order, counting races that had to be
/// skipped, so numbering stays stable if one block is malformed.
pub fn parse_race_results(html: &str) -> Result<Vec<RaceResult>> {
    let document = Html::parse_document(html);
    let item = selector(RACE_ITEM)?;
    let title = selector(RACE_TITLE)?;
    let date = selector(RACE_DATE)?;
    let row = selector(RESULT_ROW)?;
    let position = selector(ROW_POSITION)?;
    let driver_name = selector(ROW_DRIVER)?;

    let elements: Vec<ElementRef> = document.select(&item).collect();
    if elements.is_empty() {
        return Err(ImporterError::StructuralMismatch(format!(
            "no race results found ({})",
            RACE_ITEM
        )));
    }

    let mut races = Vec::with_capacity(elements.len());
    for (idx, element) in elements.iter().enumerate() {
        let Some(race_name) = first_text(element, &title) else {
            warn!("Skipping race block {} without a title", idx + 1);
            continue;
        };

        let mut race = RaceResult::new(
            race_name,
            idx as u32 + 1,
            first_text(element, &date).unwrap_or_default(),
        );

        for result_row in element.select(&row) {
            let pos = first_text(&result_row, &position).and_then(|p| p.parse::<u32>().ok());
            let name = first_text(&result_row, &driver_name);
            match (pos, name) {
                (Some(pos), Some(name)) => {
                    race.results.push(ResultEntry::new(driver_code(&name), pos));
                }
                // Unclassified finishers (NC, DQ, DNF) carry no numeric position.
                _ => debug!("Skipping unclassified row in {}", race.race),
            }
        }

        race.results.sort_by_key(|entry| entry.position);
        races.push(race);
    }

    debug!("Parsed {} races", races.len());
    Ok(races)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| {
        ImporterError::StructuralMismatch(format!("invalid selector '{}': {}", css, e))
    })
}

/// Whitespace-normalized text of the first match, `None` when absent or blank.
fn first_text(element: &ElementRef, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|node| node.text().collect::<Vec<_>>().join(" "))
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty())
}

fn image_src(element: &ElementRef, selector: &Selector, site: &str) -> String {
    element
        .select(selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| absolute_url(site, src.trim()))
        .unwrap_or_default()
}

fn absolute_url(site: &str, src: &str) -> String {
    if src.starts_with("http") {
        src.to_string()
    } else if let Some(rest) = src.strip_prefix("//") {
        format!("https://{}", rest)
    } else if src.starts_with('/') {
        format!("{}{}", site.trim_end_matches('/'), src)
    } else {
        format!("{}/{}", site.trim_end_matches('/'), src)
    }
}
