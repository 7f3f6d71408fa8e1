use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::short_code::team_key;

pub const DEFAULT_TEAM_COLOR: &str = "#888888";

/// Team colours keyed by team slug (`red_bull`, `aston_martin`, ...).
///
/// Passed into the source adapters rather than baked into them, so a new
/// season only needs a new palette file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamPalette {
    colors: HashMap<String, String>,
}

impl TeamPalette {
    pub fn season_2025() -> Self {
        let colors = [
            ("red_bull", "#0600EF"),
            ("mclaren", "#FF8700"),
            ("ferrari", "#DC0000"),
            ("mercedes", "#00D2BE"),
            ("aston_martin", "#006F62"),
            ("alpine", "#0090FF"),
            ("haas", "#FFFFFF"),
            ("williams", "#005AFF"),
            ("rb", "#1E41FF"),
            ("sauber", "#900000"),
        ]
        .into_iter()
        .map(|(slug, color)| (slug.to_string(), color.to_string()))
        .collect();

        Self { colors }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Colour for an exact slug, falling back to [`DEFAULT_TEAM_COLOR`].
    pub fn color_for(&self, slug: &str) -> &str {
        self.colors
            .get(slug)
            .map(String::as_str)
            .unwrap_or(DEFAULT_TEAM_COLOR)
    }

    /// Colour for a team display name, looked up by its [`team_key`].
    pub fn color_for_name(&self, name: &str) -> &str {
        self.color_for(&team_key(name))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
