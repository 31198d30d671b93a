use super::phase::Phase;
use super::reconstruction::Reconstruction;
use crate::Seconds;
use crate::cube::Metric;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiPhase {
    pub name: String,
    pub moves: String,
    pub before: u8,
    pub after: u8,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiReconstruction {
    pub scramble: String,
    pub solution: String,
    pub metric: String,
    pub count: usize,
    pub progress: u8,
    pub solved: bool,
    pub time: Option<Seconds>,
    pub tps: Option<f32>,
    pub phases: Vec<ApiPhase>,
}

impl From<(&Phase, Metric)> for ApiPhase {
    fn from((phase, metric): (&Phase, Metric)) -> Self {
        Self {
            name: phase.label(),
            moves: phase.moves().to_string(),
            before: phase.before().into(),
            after: phase.after().into(),
            count: phase.count(metric),
        }
    }
}

impl From<(&Reconstruction, Metric, Option<Seconds>)> for ApiReconstruction {
    fn from((r, metric, time): (&Reconstruction, Metric, Option<Seconds>)) -> Self {
        Self {
            scramble: r.scramble().to_string(),
            solution: r.solution_text(),
            metric: metric.to_string(),
            count: r.count(metric),
            progress: r.progress().into(),
            solved: r.is_solved(),
            time,
            tps: time.and_then(|t| r.tps(metric, t)),
            phases: r
                .phases()
                .iter()
                .map(|phase| ApiPhase::from((phase, metric)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_phases_and_speed() {
        let r = Reconstruction::try_from(("R U R'", "R U' R'")).unwrap();
        let api = ApiReconstruction::from((&r, Metric::Htm, Some(1.5)));
        assert!(api.count == 3);
        assert!(api.tps == Some(2.));
        assert!(api.solved);
        assert!(api.phases.len() == 2);
        assert!(api.phases[0].name == "4th pair / OLS");
        assert!(api.phases[0].before == 4);
        assert!(api.phases[0].after == 9);
        assert!(api.phases[1].moves == "R'");
    }

    #[test]
    fn json_shape() {
        let r = Reconstruction::try_from(("U", "U'")).unwrap();
        let api = ApiReconstruction::from((&r, Metric::Qtm, None));
        let json = serde_json::to_value(&api).unwrap();
        assert!(json["metric"] == "QTM");
        assert!(json["tps"].is_null());
        assert!(json["phases"][0]["name"] == "AUF");
        let back = serde_json::from_value::<ApiReconstruction>(json).unwrap();
        assert!(back.solution == "U' // AUF");
    }
}
