//! Containment module for boring implementations of the [`Display`] and [`FromStr`] traits
//!
//! Names are a presentation concern: the engine itself only ever dispatches on [`DeadzoneAlgorithm`].

use std::fmt::Display;
use std::str::FromStr;

use bevy::log::warn;

use crate::deadzone::DeadzoneAlgorithm;
use crate::errors::UnknownDeadzoneAlgorithm;

impl DeadzoneAlgorithm {
    /// The label shown on screen for this algorithm.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Axial => "Axial",
            Self::Radial => "Radial",
            Self::ScaledAxial => "Scaled Axial",
            Self::ScaledRadial => "Scaled Radial",
            Self::SlopedAxial => "Sloped Axial",
            Self::SlopedScaledAxial => "Sloped Sc. Axial",
            Self::Hybrid => "Hybrid",
            Self::Cubic => "Cubic",
            Self::CubicRoot => "Cubic root",
        }
    }
}

impl Display for DeadzoneAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DeadzoneAlgorithm {
    type Err = UnknownDeadzoneAlgorithm;

    /// Parses either the on-screen label or the variant name, ignoring case, spaces and dots.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = simplify(s);
        Self::variants()
            .find(|algorithm| {
                simplify(algorithm.name()) == wanted
                    || simplify(&format!("{algorithm:?}")) == wanted
            })
            .ok_or_else(|| {
                warn!("Unknown deadzone algorithm name {s:?}");
                UnknownDeadzoneAlgorithm::Name {
                    name: s.to_string(),
                }
            })
    }
}

fn simplify(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(DeadzoneAlgorithm::None.to_string(), "None");
        assert_eq!(DeadzoneAlgorithm::ScaledRadial.to_string(), "Scaled Radial");
        assert_eq!(DeadzoneAlgorithm::SlopedScaledAxial.to_string(), "Sloped Sc. Axial");
        assert_eq!(DeadzoneAlgorithm::CubicRoot.to_string(), "Cubic root");
    }

    #[test]
    fn test_names_round_trip() {
        for algorithm in DeadzoneAlgorithm::variants() {
            assert_eq!(algorithm.name().parse(), Ok(algorithm));
            assert_eq!(format!("{algorithm:?}").parse(), Ok(algorithm));
        }
    }

    #[test]
    fn test_parse_is_lenient() {
        assert_eq!("cubic ROOT".parse(), Ok(DeadzoneAlgorithm::CubicRoot));
        assert_eq!("sloped_scaled_axial".parse(), Ok(DeadzoneAlgorithm::SlopedScaledAxial));
        assert_eq!("Sloped Sc Axial".parse(), Ok(DeadzoneAlgorithm::SlopedScaledAxial));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "Quadratic".parse::<DeadzoneAlgorithm>(),
            Err(UnknownDeadzoneAlgorithm::Name {
                name: "Quadratic".to_string()
            })
        );
        assert!("".parse::<DeadzoneAlgorithm>().is_err());
    }
}
