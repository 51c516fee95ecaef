use std::fmt;

use serde::Serialize;

/// Whether a bigger or a smaller number is the better outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImprovementDirection {
    Up,
    Down,
}

/// Unit suffixes recognised in common values, e.g. `timeInMs_smallerIsBetter`.
const SUFFIXES: &[(&str, ImprovementDirection)] = &[
    ("smallerIsBetter", ImprovementDirection::Down),
    ("biggerIsBetter", ImprovementDirection::Up),
];

impl ImprovementDirection {
    pub fn from_suffix(token: &str) -> Option<Self> {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| *suffix == token)
            .map(|(_, direction)| *direction)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImprovementDirection::Up => "up",
            ImprovementDirection::Down => "down",
        }
    }
}

impl fmt::Display for ImprovementDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
