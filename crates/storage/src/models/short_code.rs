//! Stable short identifiers derived from display names.
//!
//! Codes are computed purely from the name, so the same driver or team gets
//! the same code on every run. Two different names can map to the same code;
//! collisions are left to the caller (see [`crate::services::normalizer`]).

const CODE_LEN: usize = 3;

/// Derives a driver code from a full display name.
///
/// The code is the first three characters of the last whitespace-separated
/// token, uppercased. Shorter tokens are used as-is.
///
/// # Examples
///
/// ```
/// use storage::models::short_code::driver_code;
///
/// assert_eq!(driver_code("Max Verstappen"), "VER");
/// assert_eq!(driver_code("Ocon"), "OCO");
/// ```
pub fn driver_code(name: &str) -> String {
    let last = name.split_whitespace().next_back().unwrap_or_default();
    abbreviate(last)
}

/// Lookup key for a team display name: lowercase words joined by `_`.
///
/// `"Red Bull Racing"` becomes `"red_bull_racing"`.
pub fn team_key(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Team code: the first three characters of [`team_key`], uppercased.
pub fn team_code(name: &str) -> String {
    abbreviate(&team_key(name))
}

/// Maps an identifier from a foreign system (`max_verstappen`, `red_bull`)
/// onto the short code convention.
pub fn foreign_code(id: &str) -> String {
    abbreviate(id.trim())
}

fn abbreviate(token: &str) -> String {
    token
        .chars()
        .take(CODE_LEN)
        .flat_map(char::to_uppercase)
        .collect()
}
