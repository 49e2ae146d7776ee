use serde::{Deserialize, Serialize};

/// Tactical formations the club actually lines up in.
///
/// The serde codes are the canonical strings stored in the Document and in
/// the remote `matches.formation` column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "3-4-3")]
    F343,
    #[serde(rename = "5-3-2")]
    F532,
}

impl Formation {
    /// Canonical formation code string (e.g., "4-3-3").
    pub fn code(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F352 => "3-5-2",
            Formation::F4231 => "4-2-3-1",
            Formation::F343 => "3-4-3",
            Formation::F532 => "5-3-2",
        }
    }

    /// Parse a canonical code string back into a formation.
    pub fn from_code(code: &str) -> Option<Formation> {
        match code {
            "4-4-2" => Some(Formation::F442),
            "4-3-3" => Some(Formation::F433),
            "3-5-2" => Some(Formation::F352),
            "4-2-3-1" => Some(Formation::F4231),
            "3-4-3" => Some(Formation::F343),
            "5-3-2" => Some(Formation::F532),
            _ => None,
        }
    }

    /// Returns (defenders, midfielders, forwards).
    pub fn shape(&self) -> (u8, u8, u8) {
        match self {
            Formation::F442 => (4, 4, 2),
            Formation::F433 => (4, 3, 3),
            Formation::F352 => (3, 5, 2),
            Formation::F4231 => (4, 5, 1),
            Formation::F343 => (3, 4, 3),
            Formation::F532 => (5, 3, 2),
        }
    }

    /// The eleven position labels a lineup for this formation is keyed by.
    ///
    /// Labels shared between two formations (e.g. the back four of 4-4-2
    /// and 4-3-3) keep their assigned player when the formation changes.
    pub fn position_labels(&self) -> &'static [&'static str] {
        match self {
            Formation::F442 => {
                &["GK", "LB", "CB1", "CB2", "RB", "LM", "CM1", "CM2", "RM", "ST1", "ST2"]
            }
            Formation::F433 => {
                &["GK", "LB", "CB1", "CB2", "RB", "CM1", "CM2", "CM3", "LW", "ST", "RW"]
            }
            Formation::F352 => {
                &["GK", "CB1", "CB2", "CB3", "LWB", "CM1", "CM2", "CM3", "RWB", "ST1", "ST2"]
            }
            Formation::F4231 => {
                &["GK", "LB", "CB1", "CB2", "RB", "DM1", "DM2", "LW", "AM", "RW", "ST"]
            }
            Formation::F343 => {
                &["GK", "CB1", "CB2", "CB3", "LM", "CM1", "CM2", "RM", "LW", "ST", "RW"]
            }
            Formation::F532 => {
                &["GK", "LWB", "CB1", "CB2", "CB3", "RWB", "CM1", "CM2", "CM3", "ST1", "ST2"]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for f in [
            Formation::F442,
            Formation::F433,
            Formation::F352,
            Formation::F4231,
            Formation::F343,
            Formation::F532,
        ] {
            assert_eq!(Formation::from_code(f.code()), Some(f));
        }
        assert_eq!(Formation::from_code("2-3-5"), None);
    }

    #[test]
    fn test_every_formation_has_eleven_labels() {
        for f in [
            Formation::F442,
            Formation::F433,
            Formation::F352,
            Formation::F4231,
            Formation::F343,
            Formation::F532,
        ] {
            assert_eq!(f.position_labels().len(), 11, "{}", f.code());
            assert_eq!(f.position_labels()[0], "GK");
        }
    }

    #[test]
    fn test_shape_counts_ten_outfielders() {
        for f in [
            Formation::F442,
            Formation::F433,
            Formation::F352,
            Formation::F4231,
            Formation::F343,
            Formation::F532,
        ] {
            let (d, m, a) = f.shape();
            assert_eq!(d + m + a, 10, "{}", f.code());
        }
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Formation::F4231).unwrap();
        assert_eq!(json, "\"4-2-3-1\"");
        let back: Formation = serde_json::from_str("\"3-5-2\"").unwrap();
        assert_eq!(back, Formation::F352);
    }
}
