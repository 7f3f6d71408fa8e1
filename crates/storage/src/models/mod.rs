mod constructor;
mod driver;
mod race;
mod season;
pub mod short_code;
mod team_palette;

pub use constructor::Constructor;
pub use driver::Driver;
pub use race::{RaceResult, ResultEntry};
pub use season::{DataOrigin, SeasonDataset};
pub use team_palette::{DEFAULT_TEAM_COLOR, TeamPalette};
