use crate::error::Result;
use crate::serialization::write_json_file;
use pheromaze_core::{AntColonyOptimization, GenerationReport};
use pheromaze_data::Route;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything needed to reproduce and judge a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub route: Route,
    pub size: usize,
    pub ants_per_gen: usize,
    pub generations: usize,
    pub q: f64,
    pub evaporation: f64,
    pub seed: u64,
    pub config_fingerprint: String,
    pub ants_spawned: u64,
    pub ants_failed: u64,
    pub backtracks: u64,
    pub elapsed_ms: u64,
    /// RFC 3339 UTC timestamp.
    pub finished_at: String,
    pub history: Vec<GenerationReport>,
}

impl RunReport {
    #[must_use]
    pub fn from_colony(aco: &AntColonyOptimization<'_>, route: &Route, config_fingerprint: String) -> Self {
        let config = aco.config();
        let metrics = aco.metrics();
        Self {
            route: route.clone(),
            size: route.size(),
            ants_per_gen: config.ants_per_gen,
            generations: config.generations,
            q: config.q,
            evaporation: config.evaporation,
            seed: aco.master_seed(),
            config_fingerprint,
            ants_spawned: metrics.ants_spawned(),
            ants_failed: metrics.ants_failed(),
            backtracks: metrics.backtracks(),
            elapsed_ms: metrics.elapsed().as_millis() as u64,
            finished_at: chrono::Utc::now().to_rfc3339(),
            history: aco.history().to_vec(),
        }
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_json_file(self, &path)?;
        tracing::info!(path = %path.as_ref().display(), "Run report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::read_json_file;
    use pheromaze_core::{ColonyConfig, Maze};
    use pheromaze_data::{Coordinate, PathSpecification};

    #[test]
    fn test_report_captures_run() {
        let mut maze = Maze::open(4, 4).unwrap();
        let spec = PathSpecification::new(Coordinate::new(0, 0), Coordinate::new(3, 3));
        let config = ColonyConfig {
            ants_per_gen: 5,
            generations: 3,
            seed: Some(21),
            ..ColonyConfig::default()
        };
        let mut aco = AntColonyOptimization::new(&mut maze, config).unwrap();
        let route = aco.find_shortest_route(&spec).unwrap();

        let report = RunReport::from_colony(&aco, &route, "abc".to_string());
        assert_eq!(report.size, route.size());
        assert_eq!(report.seed, 21);
        assert_eq!(report.history.len(), 3);
        assert_eq!(report.ants_spawned, 15);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.finished_at).is_ok());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report.write(&path).unwrap();
        let loaded: RunReport = read_json_file(&path).unwrap();
        assert_eq!(loaded, report);
    }
}
