//! Rank scale
//!
//! The sixteen grades officers hold, from Director down to non-uniformed
//! personnel. Declaration order is seniority order, so the derived `Ord`
//! sorts a roster most-senior-first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Officer grade, most senior first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    Jdir,
    Jcsup,
    Jssup,
    Jsup,
    Jcinsp,
    Jsinsp,
    Jinsp,
    Sjo4,
    Sjo3,
    Sjo2,
    Sjo1,
    Jo3,
    Jo2,
    Jo1,
    /// Temporary appointment grade
    #[serde(rename = "JO1/T")]
    Jo1T,
    /// Non-uniformed personnel
    Nup,
}

impl Rank {
    /// All grades in seniority order
    pub const ALL: [Rank; 16] = [
        Rank::Jdir,
        Rank::Jcsup,
        Rank::Jssup,
        Rank::Jsup,
        Rank::Jcinsp,
        Rank::Jsinsp,
        Rank::Jinsp,
        Rank::Sjo4,
        Rank::Sjo3,
        Rank::Sjo2,
        Rank::Sjo1,
        Rank::Jo3,
        Rank::Jo2,
        Rank::Jo1,
        Rank::Jo1T,
        Rank::Nup,
    ];

    /// Parse a rank from its code
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "JDIR" => Some(Self::Jdir),
            "JCSUP" => Some(Self::Jcsup),
            "JSSUP" => Some(Self::Jssup),
            "JSUP" => Some(Self::Jsup),
            "JCINSP" => Some(Self::Jcinsp),
            "JSINSP" => Some(Self::Jsinsp),
            "JINSP" => Some(Self::Jinsp),
            "SJO4" => Some(Self::Sjo4),
            "SJO3" => Some(Self::Sjo3),
            "SJO2" => Some(Self::Sjo2),
            "SJO1" => Some(Self::Sjo1),
            "JO3" => Some(Self::Jo3),
            "JO2" => Some(Self::Jo2),
            "JO1" => Some(Self::Jo1),
            "JO1/T" => Some(Self::Jo1T),
            "NUP" => Some(Self::Nup),
            _ => None,
        }
    }

    /// The rank's code as shown in rosters and audit text
    pub fn code(&self) -> &'static str {
        match self {
            Self::Jdir => "JDIR",
            Self::Jcsup => "JCSUP",
            Self::Jssup => "JSSUP",
            Self::Jsup => "JSUP",
            Self::Jcinsp => "JCINSP",
            Self::Jsinsp => "JSINSP",
            Self::Jinsp => "JINSP",
            Self::Sjo4 => "SJO4",
            Self::Sjo3 => "SJO3",
            Self::Sjo2 => "SJO2",
            Self::Sjo1 => "SJO1",
            Self::Jo3 => "JO3",
            Self::Jo2 => "JO2",
            Self::Jo1 => "JO1",
            Self::Jo1T => "JO1/T",
            Self::Nup => "NUP",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
