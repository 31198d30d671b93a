/// How far a layer turns, relative to the clockwise sense of its face.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Turn {
    #[default]
    Cw = 1,
    Half = 2,
    Ccw = 3,
}

impl Turn {
    pub const fn all() -> [Turn; 3] {
        [Turn::Cw, Turn::Half, Turn::Ccw]
    }
    /// Clockwise quarter turns.
    pub const fn quarters(&self) -> u8 {
        *self as u8
    }
    pub const fn inverse(&self) -> Turn {
        match self {
            Turn::Cw => Turn::Ccw,
            Turn::Half => Turn::Half,
            Turn::Ccw => Turn::Cw,
        }
    }
}

/// suffix notation: "", "2", "'" (with "2'" and "'2" read as a half turn)
impl TryFrom<&str> for Turn {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.replace('’', "'").as_str() {
            "" | "1" => Ok(Turn::Cw),
            "2" | "2'" | "'2" => Ok(Turn::Half),
            "'" | "3" => Ok(Turn::Ccw),
            _ => Err(anyhow::anyhow!("invalid turn suffix: {}", s)),
        }
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Turn::Cw => write!(f, ""),
            Turn::Half => write!(f, "2"),
            Turn::Ccw => write!(f, "'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_undoes_turn() {
        for turn in Turn::all() {
            assert!((turn.quarters() + turn.inverse().quarters()) % 4 == 0);
        }
    }

    #[test]
    fn half_turn_suffixes() {
        assert!(Turn::try_from("2'").unwrap() == Turn::Half);
        assert!(Turn::try_from("'2").unwrap() == Turn::Half);
        assert!(Turn::try_from("’").unwrap() == Turn::Ccw);
        assert!(Turn::try_from("22").is_err());
    }
}
