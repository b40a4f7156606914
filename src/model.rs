use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Ai,
}

/// Usage tier of one candidate header, derived from two search outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageTier {
    UsedExternally,
    UsedInternallyOnly,
    UnusedEverywhere,
}

impl UsageTier {
    pub fn from_outcomes(external_found: bool, internal_found: bool) -> Self {
        match (external_found, internal_found) {
            (true, _) => Self::UsedExternally,
            (false, true) => Self::UsedInternallyOnly,
            (false, false) => Self::UnusedEverywhere,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total: usize,
    pub unused_external: Vec<String>,
    pub unused_everywhere: Vec<String>,
}

impl Report {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            unused_external: Vec::new(),
            unused_everywhere: Vec::new(),
        }
    }
}
