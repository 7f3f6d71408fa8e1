pub mod backfill;
pub mod normalizer;

pub use backfill::{backfill, backfill_season, retain_known};
pub use normalizer::{Ranked, normalize};
