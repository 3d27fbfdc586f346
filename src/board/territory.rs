//! Enemy territories and terrain tags.
//!
//! A territory is a defense value plus the terrain it sits on. Territories
//! are always handled as one ordered sequence of records, so the terrain
//! moves with its territory when the sequence is sorted or permuted.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::plan::PlanError;

/// Terrain tag of a territory.
///
/// Unrecognized tags are kept verbatim in `Other`; they never adjust troops.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Terrain {
    Plain,
    Mountainous,
    Other(String),
}

impl Terrain {
    /// Parses a terrain tag. Accepts the English and Spanish spellings,
    /// ignoring case and surrounding whitespace.
    pub fn parse(tag: &str) -> Terrain {
        let t = tag.trim().to_lowercase();
        match t.as_str() {
            "plain" | "plano" => Terrain::Plain,
            "mountainous" | "montañoso" | "montanoso" => Terrain::Mountainous,
            _ => Terrain::Other(tag.trim().to_string()),
        }
    }

    /// Returns the canonical tag.
    pub fn tag(&self) -> &str {
        match self {
            Terrain::Plain => "plain",
            Terrain::Mountainous => "mountainous",
            Terrain::Other(s) => s,
        }
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Terrain::Other(String::new())
    }
}

impl FromStr for Terrain {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Terrain::parse(s))
    }
}

impl From<String> for Terrain {
    fn from(s: String) -> Self {
        Terrain::parse(&s)
    }
}

impl From<Terrain> for String {
    fn from(t: Terrain) -> Self {
        t.tag().to_string()
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An enemy territory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Territory {
    pub defense: u32,
    #[serde(default)]
    pub terrain: Terrain,
}

impl Territory {
    pub fn new(defense: u32, terrain: Terrain) -> Self {
        Territory { defense, terrain }
    }
}

/// Builds territory records from parallel defense and terrain sequences.
pub fn territories_from_parallel<S: AsRef<str>>(
    defenses: &[u32],
    terrains: &[S],
) -> Result<Vec<Territory>, PlanError> {
    if defenses.len() != terrains.len() {
        return Err(PlanError::LengthMismatch {
            defenses: defenses.len(),
            terrains: terrains.len(),
        });
    }
    Ok(defenses
        .iter()
        .zip(terrains)
        .map(|(&defense, tag)| Territory::new(defense, Terrain::parse(tag.as_ref())))
        .collect())
}

/// Returns the defense values of a territory sequence, in order.
pub fn defenses(territories: &[Territory]) -> Vec<u32> {
    territories.iter().map(|t| t.defense).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tags() {
        assert_eq!(Terrain::parse("plain"), Terrain::Plain);
        assert_eq!(Terrain::parse("Plano"), Terrain::Plain);
        assert_eq!(Terrain::parse(" MOUNTAINOUS "), Terrain::Mountainous);
        assert_eq!(Terrain::parse("montañoso"), Terrain::Mountainous);
        assert_eq!(
            Terrain::parse("swamp"),
            Terrain::Other("swamp".to_string())
        );
    }

    #[test]
    fn terrain_serde_as_string() {
        let t: Territory = serde_json::from_str(r#"{"defense":7,"terrain":"plano"}"#).unwrap();
        assert_eq!(t, Territory::new(7, Terrain::Plain));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"defense":7,"terrain":"plain"}"#);
    }

    #[test]
    fn missing_terrain_defaults_to_other() {
        let t: Territory = serde_json::from_str(r#"{"defense":3}"#).unwrap();
        assert_eq!(t.terrain, Terrain::Other(String::new()));
    }

    #[test]
    fn parallel_sequences_zip_in_order() {
        let ts = territories_from_parallel(&[5, 10], &["plain", "mountainous"]).unwrap();
        assert_eq!(
            ts,
            vec![
                Territory::new(5, Terrain::Plain),
                Territory::new(10, Terrain::Mountainous)
            ]
        );
        assert_eq!(defenses(&ts), vec![5, 10]);
    }

    #[test]
    fn parallel_sequences_length_mismatch() {
        let err = territories_from_parallel(&[5, 10, 15], &["plain"]).unwrap_err();
        assert!(matches!(
            err,
            PlanError::LengthMismatch {
                defenses: 3,
                terrains: 1
            }
        ));
    }
}
