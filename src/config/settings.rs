use std::path::PathBuf;

pub struct SolverSettings {
    pub initial_skill: f64,
    pub convergence_tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            initial_skill: 1.0,
            convergence_tolerance: 1e-4,
            max_iterations: 10_000,
        }
    }
}

pub struct InputSettings {
    pub participation_path: PathBuf,
    pub results_path: PathBuf,
    pub report_path: PathBuf,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            participation_path: PathBuf::from("participation.csv"),
            results_path: PathBuf::from("results.csv"),
            report_path: default_report_path(),
        }
    }
}

fn default_report_path() -> PathBuf {
    std::env::var("SKILL_REPORT_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("skill_report.json"))
}

pub struct AppConfig {
    pub solver: SolverSettings,
    pub input: InputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            solver: SolverSettings::default(),
            input: InputSettings::default(),
        }
    }
}
