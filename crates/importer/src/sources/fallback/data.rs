//! Hand-curated datasets used when no live source is reachable.

use storage::models::{Constructor, DataOrigin, Driver, RaceResult, ResultEntry, SeasonDataset};

/// Pre-season baseline: the expected 2025 grid with every total at zero and
/// the opening rounds scheduled but not yet run.
pub fn preseason_2025() -> SeasonDataset {
    let drivers = ranked_drivers(vec![
        driver("VER", "Max Verstappen", "Red Bull Racing", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/M/MAXVER01_Max_Verstappen/maxver01.png.transform/2col/image.png"),
        driver("NOR", "Lando Norris", "McLaren", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/L/LANNOR01_Lando_Norris/lannor01.png.transform/2col/image.png"),
        driver("LEC", "Charles Leclerc", "Ferrari", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/C/CHALEC01_Charles_Leclerc/chalec01.png.transform/2col/image.png"),
        driver("PER", "Sergio Perez", "Red Bull Racing", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/S/SERPER01_Sergio_Perez/serper01.png.transform/2col/image.png"),
        driver("SAI", "Carlos Sainz", "Williams", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/C/CARSAI01_Carlos_Sainz/carsai01.png.transform/2col/image.png"),
        driver("RUS", "George Russell", "Mercedes", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/G/GEORUS01_George_Russell/georus01.png.transform/2col/image.png"),
        driver("HAM", "Lewis Hamilton", "Ferrari", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/L/LEWHAM01_Lewis_Hamilton/lewham01.png.transform/2col/image.png"),
        driver("PIA", "Oscar Piastri", "McLaren", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/O/OSCPIA01_Oscar_Piastri/oscpia01.png.transform/2col/image.png"),
        driver("ALO", "Fernando Alonso", "Aston Martin", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/F/FERALO01_Fernando_Alonso/feralo01.png.transform/2col/image.png"),
        driver("BEA", "Oliver Bearman", "Haas F1 Team", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/O/OLIBEA01_Oliver_Bearman/olibea01.png.transform/2col/image.png"),
        driver("STR", "Lance Stroll", "Aston Martin", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/L/LANSTR01_Lance_Stroll/lanstr01.png.transform/2col/image.png"),
        driver("LAW", "Liam Lawson", "RB", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/L/LIALAW01_Liam_Lawson/lialaw01.png.transform/2col/image.png"),
        driver("ALB", "Alexander Albon", "Williams", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/A/ALEALB01_Alexander_Albon/alealb01.png.transform/2col/image.png"),
        driver("GAS", "Pierre Gasly", "Alpine", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/P/PIEGAS01_Pierre_Gasly/piegas01.png.transform/2col/image.png"),
        driver("OCO", "Esteban Ocon", "Haas F1 Team", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/E/ESTOCO01_Esteban_Ocon/estoco01.png.transform/2col/image.png"),
        driver("HUL", "Nico Hulkenberg", "Sauber", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/N/NICHUL01_Nico_Hulkenberg/nichul01.png.transform/2col/image.png"),
        driver("TSU", "Yuki Tsunoda", "RB", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/Y/YUKTSU01_Yuki_Tsunoda/yuktsu01.png.transform/2col/image.png"),
        driver("ZHO", "Zhou Guanyu", "Sauber", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/G/GUAZHO01_Guanyu_Zhou/guazho01.png.transform/2col/image.png"),
        driver("DOO", "Jack Doohan", "Alpine", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/J/JACDOO01_Jack_Doohan/jacdoo01.png.transform/2col/image.png"),
        driver("MAG", "Kevin Magnussen", "Haas F1 Team", 0.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/K/KEVMAG01_Kevin_Magnussen/kevmag01.png.transform/2col/image.png"),
    ]);

    let constructors = ranked_constructors(vec![
        constructor("RBR", "Red Bull Racing", 0.0, "#0600EF", "https://www.formula1.com/content/dam/fom-website/teams/2024/red-bull-racing-logo.png.transform/2col/image.png"),
        constructor("MCL", "McLaren", 0.0, "#FF8700", "https://www.formula1.com/content/dam/fom-website/teams/2024/mclaren-logo.png.transform/2col/image.png"),
        constructor("FER", "Ferrari", 0.0, "#DC0000", "https://www.formula1.com/content/dam/fom-website/teams/2024/ferrari-logo.png.transform/2col/image.png"),
        constructor("MER", "Mercedes", 0.0, "#00D2BE", "https://www.formula1.com/content/dam/fom-website/teams/2024/mercedes-logo.png.transform/2col/image.png"),
        constructor("AST", "Aston Martin", 0.0, "#006F62", "https://www.formula1.com/content/dam/fom-website/teams/2024/aston-martin-logo.png.transform/2col/image.png"),
        constructor("ALP", "Alpine", 0.0, "#0090FF", "https://www.formula1.com/content/dam/fom-website/teams/2024/alpine-logo.png.transform/2col/image.png"),
        constructor("HAA", "Haas F1 Team", 0.0, "#FFFFFF", "https://www.formula1.com/content/dam/fom-website/teams/2024/haas-f1-team-logo.png.transform/2col/image.png"),
        constructor("WIL", "Williams", 0.0, "#005AFF", "https://www.formula1.com/content/dam/fom-website/teams/2024/williams-logo.png.transform/2col/image.png"),
        constructor("RB", "RB", 0.0, "#1E41FF", "https://www.formula1.com/content/dam/fom-website/teams/2024/rb-logo.png.transform/2col/image.png"),
        constructor("SAU", "Sauber", 0.0, "#900000", "https://www.formula1.com/content/dam/fom-website/teams/2024/sauber-logo.png.transform/2col/image.png"),
    ]);

    let season_results = vec![
        race("Bahrain GP", 1, "2025-03-02", &[]),
        race("Saudi Arabian GP", 2, "2025-03-09", &[]),
        race("Australian GP", 3, "2025-03-23", &[]),
        race("Japanese GP", 4, "2025-04-06", &[]),
        race("Chinese GP", 5, "2025-04-20", &[]),
        race("Miami GP", 6, "2025-05-04", &[]),
        race("Emilia Romagna GP", 7, "2025-05-18", &[]),
        race("Monaco GP", 8, "2025-05-25", &[]),
    ];

    SeasonDataset::new(DataOrigin::Fallback, drivers, constructors, season_results)
}

/// Last known-good 2025 standings, after the Bahrain GP (round 4).
pub fn snapshot_2025() -> SeasonDataset {
    let drivers = ranked_drivers(vec![
        driver("NOR", "Lando Norris", "McLaren", 77.0, 1, "https://www.formula1.com/content/dam/fom-website/drivers/L/LANNOR01_Lando_Norris/lannor01.png.transform/2col/image.png"),
        driver("PIA", "Oscar Piastri", "McLaren", 74.0, 2, "https://www.formula1.com/content/dam/fom-website/drivers/O/OSCPIA01_Oscar_Piastri/oscpia01.png.transform/2col/image.png"),
        driver("VER", "Max Verstappen", "Red Bull Racing", 69.0, -2, "https://www.formula1.com/content/dam/fom-website/drivers/M/MAXVER01_Max_Verstappen/maxver01.png.transform/2col/image.png"),
        driver("RUS", "George Russell", "Mercedes", 63.0, 2, "https://www.formula1.com/content/dam/fom-website/drivers/G/GEORUS01_George_Russell/georus01.png.transform/2col/image.png"),
        driver("LEC", "Charles Leclerc", "Ferrari", 32.0, -2, "https://www.formula1.com/content/dam/fom-website/drivers/C/CHALEC01_Charles_Leclerc/chalec01.png.transform/2col/image.png"),
        driver("ANT", "Andrea Kimi Antonelli", "Mercedes", 30.0, 0, "https://media.formula1.com/d_driver_fallback_image.png/content/dam/fom-website/drivers/K/ANDANT01_Kimi_Antonelli/andant01.png"),
        driver("HAM", "Lewis Hamilton", "Ferrari", 25.0, 0, "https://www.formula1.com/content/dam/fom-website/drivers/L/LEWHAM01_Lewis_Hamilton/lewham01.png.transform/2col/image.png"),
        driver("ALB", "Alexander Albon", "Williams", 18.0, 8, "https://www.formula1.com/content/dam/fom-website/drivers/A/ALEALB01_Alexander_Albon/alealb01.png.transform/2col/image.png"),
        driver("OCO", "Esteban Ocon", "Haas", 14.0, 5, "https://www.formula1.com/content/dam/fom-website/drivers/E/ESTOCO01_Esteban_Ocon/estoco01.png.transform/2col/image.png"),
        driver("STR", "Lance Stroll", "Aston Martin", 10.0, 3, "https://www.formula1.com/content/dam/fom-website/drivers/L/LANSTR01_Lance_Stroll/lanstr01.png.transform/2col/image.png"),
        driver("GAS", "Pierre Gasly", "Alpine", 6.0, -1, "https://www.formula1.com/content/dam/fom-website/drivers/P/PIEGAS01_Pierre_Gasly/piegas01.png.transform/2col/image.png"),
        driver("HUL", "Nico Hulkenberg", "Kick Sauber", 6.0, -1, "https://www.formula1.com/content/dam/fom-website/drivers/N/NICHUL01_Nico_Hulkenberg/nichul01.png.transform/2col/image.png"),
        driver("BEA", "Oliver Bearman", "Haas", 6.0, 5, "https://media.formula1.com/d_driver_fallback_image.png/content/dam/fom-website/drivers/O/OLIBEA01_Oliver_Bearman/olibea01.png"),
        driver("TSU", "Yuki Tsunoda", "Racing Bulls", 5.0, -2, "https://www.formula1.com/content/dam/fom-website/drivers/Y/YUKTSU01_Yuki_Tsunoda/yuktsu01.png.transform/2col/image.png"),
        driver("HAD", "Isack Hadjar", "Racing Bulls", 4.0, 0, "https://media.formula1.com/d_driver_fallback_image.png/content/dam/fom-website/drivers/I/ISAHAD01_Isack_Hadjar/isahad01.png"),
        driver("SAI", "Carlos Sainz", "Williams", 1.0, -11, "https://www.formula1.com/content/dam/fom-website/drivers/C/CARSAI01_Carlos_Sainz/carsai01.png.transform/2col/image.png"),
        driver("ALO", "Fernando Alonso", "Aston Martin", 0.0, -8, "https://www.formula1.com/content/dam/fom-website/drivers/F/FERALO01_Fernando_Alonso/feralo01.png.transform/2col/image.png"),
        driver("LAW", "Liam Lawson", "Racing Bulls", 0.0, 3, "https://media.formula1.com/d_driver_fallback_image.png/content/dam/fom-website/drivers/L/LIALAW01_Liam_Lawson/lialaw01.png"),
        driver("DOO", "Jack Doohan", "Alpine", 0.0, 5, "https://media.formula1.com/d_driver_fallback_image.png/content/dam/fom-website/drivers/J/JACDOO01_Jack_Doohan/jacdoo01.png"),
        driver("BOR", "Gabriel Bortoleto", "Kick Sauber", 0.0, 0, "https://media.formula1.com/d_driver_fallback_image.png/content/dam/fom-website/drivers/G/GABBOR01_Gabriel_Bortoleto/gabbor01.png"),
    ]);

    let constructors = ranked_constructors(vec![
        constructor("MCL", "McLaren", 151.0, "#FF8700", "https://www.formula1.com/content/dam/fom-website/teams/2025/mclaren-logo.png.transform/2col/image.png"),
        constructor("MER", "Mercedes", 93.0, "#00D2BE", "https://www.formula1.com/content/dam/fom-website/teams/2025/mercedes-logo.png.transform/2col/image.png"),
        constructor("RBR", "Red Bull Racing", 71.0, "#0600EF", "https://www.formula1.com/content/dam/fom-website/teams/2025/red-bull-racing-logo.png.transform/2col/image.png"),
        constructor("FER", "Ferrari", 57.0, "#DC0000", "https://www.formula1.com/content/dam/fom-website/teams/2025/ferrari-logo.png.transform/2col/image.png"),
        constructor("HAA", "Haas", 20.0, "#FFFFFF", "https://media.formula1.com/content/dam/fom-website/teams/2025/haas-logo.png"),
        constructor("WIL", "Williams", 19.0, "#005AFF", "https://www.formula1.com/content/dam/fom-website/teams/2025/williams-logo.png.transform/2col/image.png"),
        constructor("AST", "Aston Martin", 10.0, "#006F62", "https://www.formula1.com/content/dam/fom-website/teams/2025/aston-martin-logo.png.transform/2col/image.png"),
        constructor("RB", "Racing Bulls", 7.0, "#1E41FF", "https://media.formula1.com/content/dam/fom-website/teams/2025/racing-bulls-logo.png"),
        constructor("ALP", "Alpine", 6.0, "#0090FF", "https://www.formula1.com/content/dam/fom-website/teams/2025/alpine-logo.png.transform/2col/image.png"),
        constructor("SAU", "Kick Sauber", 6.0, "#900000", "https://media.formula1.com/content/dam/fom-website/teams/2025/kick-sauber-logo.png"),
    ]);

    let season_results = vec![
        race("Australian GP", 1, "2025-03-16", &["NOR", "VER", "RUS", "ANT", "ALB", "STR", "HUL", "LEC", "PIA", "HAM", "GAS", "TSU", "OCO", "BEA", "LAW", "BOR", "ALO", "SAI", "DOO", "HAD"]),
        race("Chinese GP", 2, "2025-03-23", &["PIA", "NOR", "RUS", "VER", "OCO", "ANT", "ALB", "BEA", "STR", "SAI", "HAD", "LAW", "DOO", "BOR", "HUL", "TSU", "ALO", "LEC", "HAM", "GAS"]),
        race("Japanese GP", 3, "2025-04-06", &["VER", "NOR", "PIA", "LEC", "RUS", "ANT", "HAM", "HAD", "ALB", "BEA", "ALO", "TSU", "GAS", "SAI", "DOO", "HUL", "LAW", "OCO", "BOR", "STR"]),
        race("Bahrain GP", 4, "2025-04-13", &["PIA", "RUS", "NOR", "LEC", "HAM", "VER", "GAS", "OCO", "TSU", "BEA", "ANT", "ALB", "HUL", "HAD", "DOO", "ALO", "LAW", "STR", "BOR", "SAI"]),
    ];

    SeasonDataset::new(DataOrigin::Fallback, drivers, constructors, season_results)
}

fn driver(
    id: &str,
    name: &str,
    team: &str,
    points: f64,
    position_change: i32,
    image_url: &str,
) -> Driver {
    Driver {
        id: id.to_string(),
        name: name.to_string(),
        team: team.to_string(),
        points,
        position: 0,
        position_change,
        image_url: image_url.to_string(),
    }
}

fn constructor(id: &str, name: &str, points: f64, color: &str, logo_url: &str) -> Constructor {
    Constructor {
        id: id.to_string(),
        name: name.to_string(),
        points,
        position: 0,
        color: color.to_string(),
        logo_url: logo_url.to_string(),
    }
}

/// A race whose classification is given as driver ids in finishing order.
fn race(name: &str, round: u32, date: &str, finishing_order: &[&str]) -> RaceResult {
    let mut race = RaceResult::new(name, round, date);
    race.results = finishing_order
        .iter()
        .zip(1..)
        .map(|(id, position)| ResultEntry::new(*id, position))
        .collect();
    race
}

fn ranked_drivers(mut drivers: Vec<Driver>) -> Vec<Driver> {
    for (position, driver) in (1..).zip(drivers.iter_mut()) {
        driver.position = position;
    }
    drivers
}

fn ranked_constructors(mut constructors: Vec<Constructor>) -> Vec<Constructor> {
    for (position, constructor) in (1..).zip(constructors.iter_mut()) {
        constructor.position = position;
    }
    constructors
}
