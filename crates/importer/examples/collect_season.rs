use std::time::Duration;

use importer::{ErgastSource, FallbackSource, SeasonAggregator};
use storage::models::TeamPalette;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let timeout = std::env::args()
        .nth(1)
        .and_then(|secs| secs.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(10));

    let source = ErgastSource::new(TeamPalette::season_2025(), timeout)?;
    let aggregator = SeasonAggregator::new(Box::new(source), FallbackSource::last_known_good());

    let dataset = aggregator.collect().await;

    println!("Origin: {}", dataset.origin);
    for driver in dataset.drivers.iter().take(5) {
        println!(
            "{:>2}. {} {:<22} {:>6.1}",
            driver.position, driver.id, driver.name, driver.points
        );
    }

    Ok(())
}
