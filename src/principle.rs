//! Principle value object - names one of the five demonstration units

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SolidError;

/// One of the five SOLID principles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    /// Single responsibility
    Srp,
    /// Open/closed
    Ocp,
    /// Liskov substitution
    Lsp,
    /// Interface segregation
    Isp,
    /// Dependency inversion
    Dip,
}

impl Principle {
    /// All principles in their conventional S-O-L-I-D order
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    /// Short key used on the command line and in config files
    pub fn key(&self) -> &'static str {
        match self {
            Principle::Srp => "srp",
            Principle::Ocp => "ocp",
            Principle::Lsp => "lsp",
            Principle::Isp => "isp",
            Principle::Dip => "dip",
        }
    }

    /// Human readable title
    pub fn title(&self) -> &'static str {
        match self {
            Principle::Srp => "Single Responsibility Principle",
            Principle::Ocp => "Open-Closed Principle",
            Principle::Lsp => "Liskov Substitution Principle",
            Principle::Isp => "Interface Segregation Principle",
            Principle::Dip => "Dependency Inversion Principle",
        }
    }

    /// Position in the S-O-L-I-D sequence, starting at 1
    pub fn ordinal(&self) -> usize {
        match self {
            Principle::Srp => 1,
            Principle::Ocp => 2,
            Principle::Lsp => 3,
            Principle::Isp => 4,
            Principle::Dip => 5,
        }
    }
}

impl std::fmt::Display for Principle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Principle {
    type Err = SolidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "srp" | "s" | "single-responsibility" => Ok(Principle::Srp),
            "ocp" | "o" | "open-closed" => Ok(Principle::Ocp),
            "lsp" | "l" | "liskov-substitution" => Ok(Principle::Lsp),
            "isp" | "i" | "interface-segregation" => Ok(Principle::Isp),
            "dip" | "d" | "dependency-inversion" => Ok(Principle::Dip),
            _ => Err(SolidError::UnknownPrinciple {
                name: s.to_string(),
            }),
        }
    }
}
