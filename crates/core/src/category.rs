//! Character category codes and their card-facing reference data.
//!
//! The `character.type` column stores one of these one-letter codes as
//! unconstrained TEXT. Nothing parses the column on read; callers ask for
//! a [`Category`] when they need one.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A character's category, stored as a one-letter code.
///
/// Discriminants are the card sort order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "R")]
    Royalty = 0,
    #[serde(rename = "S")]
    Statesman = 1,
    #[serde(rename = "P")]
    Philosopher = 2,
    #[serde(rename = "I")]
    Innovator = 3,
    #[serde(rename = "M")]
    MathematicalScientist = 4,
    #[serde(rename = "N")]
    NaturalScientist = 5,
    #[serde(rename = "A")]
    Artist = 6,
    #[serde(rename = "B")]
    BuildersAndEngineers = 7,
    #[serde(rename = "C")]
    Composer = 8,
    #[serde(rename = "D")]
    Dramatist = 9,
    #[serde(rename = "T")]
    TownsAndCities = 10,
}

/// All valid category code strings.
const VALID_CODE_STRINGS: &[&str] = &[
    "R", "S", "P", "I", "M", "N", "A", "B", "C", "D", "T",
];

impl Category {
    /// Every category, in card sort order.
    pub const ALL: [Category; 11] = [
        Self::Royalty,
        Self::Statesman,
        Self::Philosopher,
        Self::Innovator,
        Self::MathematicalScientist,
        Self::NaturalScientist,
        Self::Artist,
        Self::BuildersAndEngineers,
        Self::Composer,
        Self::Dramatist,
        Self::TownsAndCities,
    ];

    /// Return the one-letter code stored in `character.type`.
    pub fn code(self) -> &'static str {
        match self {
            Self::Royalty => "R",
            Self::Statesman => "S",
            Self::Philosopher => "P",
            Self::Innovator => "I",
            Self::MathematicalScientist => "M",
            Self::NaturalScientist => "N",
            Self::Artist => "A",
            Self::BuildersAndEngineers => "B",
            Self::Composer => "C",
            Self::Dramatist => "D",
            Self::TownsAndCities => "T",
        }
    }

    /// Parse a category from its one-letter code.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            "R" => Ok(Self::Royalty),
            "S" => Ok(Self::Statesman),
            "P" => Ok(Self::Philosopher),
            "I" => Ok(Self::Innovator),
            "M" => Ok(Self::MathematicalScientist),
            "N" => Ok(Self::NaturalScientist),
            "A" => Ok(Self::Artist),
            "B" => Ok(Self::BuildersAndEngineers),
            "C" => Ok(Self::Composer),
            "D" => Ok(Self::Dramatist),
            "T" => Ok(Self::TownsAndCities),
            _ => Err(CoreError::Validation(format!(
                "Invalid category code '{code}'. Must be one of: {}",
                VALID_CODE_STRINGS.join(", ")
            ))),
        }
    }

    /// Full name as printed on card banners.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Royalty => "ROYALTY",
            Self::Statesman => "STATESMAN",
            Self::Philosopher => "PHILOSOPHER",
            Self::Innovator => "INNOVATOR",
            Self::MathematicalScientist => "MATHEMATICAL SCIENTIST",
            Self::NaturalScientist => "NATURAL SCIENTIST",
            Self::Artist => "ARTIST",
            Self::BuildersAndEngineers => "BUILDERS AND ENGINEERS",
            Self::Composer => "COMPOSER",
            Self::Dramatist => "DRAMATIST",
            Self::TownsAndCities => "TOWNS AND CITIES",
        }
    }

    /// Position when sorting cards and connection lists.
    pub fn sort_order(self) -> u8 {
        self as u8
    }

    /// Hex color of the card banner for this category.
    pub fn banner_color(self) -> &'static str {
        match self {
            Self::Royalty => "#DC143C",
            Self::Statesman => "#FF8C00",
            Self::Philosopher => "#FFD700",
            Self::Innovator => "#88FF00",
            Self::MathematicalScientist => "#228B22",
            Self::NaturalScientist => "#40E0B5",
            Self::Artist => "#4169E1",
            Self::BuildersAndEngineers => "#4B0082",
            Self::Composer => "#8B00FF",
            Self::Dramatist => "#FF69B4",
            Self::TownsAndCities => "#cccccc",
        }
    }
}
