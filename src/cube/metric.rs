/// Conventions for counting the length of a solution.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Metric {
    /// Half turn metric: any outer turn is one move, slices are two.
    #[default]
    Htm,
    /// Quarter turn metric: half turns count double.
    Qtm,
    /// Slice turn metric: any layer turn is one move.
    Stm,
    /// Execution turn metric: rotations count too.
    Etm,
}

impl Metric {
    pub const fn all() -> [Metric; 4] {
        [Metric::Htm, Metric::Qtm, Metric::Stm, Metric::Etm]
    }
}

impl TryFrom<&str> for Metric {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "htm" | "ftm" => Ok(Metric::Htm),
            "qtm" => Ok(Metric::Qtm),
            "stm" => Ok(Metric::Stm),
            "etm" => Ok(Metric::Etm),
            _ => Err(anyhow::anyhow!("invalid metric: {}", s)),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Metric::Htm => write!(f, "HTM"),
            Metric::Qtm => write!(f, "QTM"),
            Metric::Stm => write!(f, "STM"),
            Metric::Etm => write!(f, "ETM"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for metric in Metric::all() {
            assert!(metric == Metric::try_from(metric.to_string().as_str()).unwrap());
        }
    }

    #[test]
    fn face_turn_metric_alias() {
        assert!(Metric::try_from("FTM").unwrap() == Metric::Htm);
    }
}
