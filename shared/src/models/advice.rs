//! Farming advice models

use serde::{Deserialize, Serialize};

use crate::types::DataSource;

/// Crops the advice service knows about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Rice,
    Wheat,
    Cotton,
    Maize,
}

impl Crop {
    pub fn code(&self) -> &'static str {
        match self {
            Crop::Rice => "rice",
            Crop::Wheat => "wheat",
            Crop::Cotton => "cotton",
            Crop::Maize => "maize",
        }
    }
}

/// Indian cropping seasons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Monsoon season (June-October)
    Kharif,
    /// Winter season (November-April)
    Rabi,
    Summer,
}

impl Season {
    pub fn code(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Summer => "summer",
        }
    }
}

/// Answer returned to the chat panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    /// False when the expert service failed and canned advice was used
    pub success: bool,
    pub advice: String,
    pub crop: Option<Crop>,
    pub season: Option<Season>,
    pub source: DataSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
