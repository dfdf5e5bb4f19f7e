use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::models::SkillReport;
use crate::errors::report_context;

/// JSON file sink for skill reports
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Create a writer, making sure the parent directory exists
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create report directory")?;
        }

        Ok(Self { path })
    }

    /// Write the report next to its destination, then swap it into place
    pub fn save(&self, report: &SkillReport) -> Result<()> {
        let temp_path = self.build_temp_path();

        if temp_path.exists() {
            fs::remove_file(&temp_path)
                .with_context(|| report_context("remove", &temp_path.display().to_string()))?;
        }

        self.write_json(&temp_path, report)?;
        fs::rename(&temp_path, &self.path)
            .with_context(|| report_context("move", &self.path.display().to_string()))?;

        info!("Saved skill report to: {}", self.path.display());
        Ok(())
    }

    /// Load a previously written report
    pub fn load(&self) -> Result<Option<SkillReport>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| report_context("read", &self.path.display().to_string()))?;
        let report = serde_json::from_str(&json).with_context(|| {
            let preview: String = json.chars().take(200).collect();
            format!("Failed to parse JSON from {:?}. First 200 chars: {}", self.path, preview)
        })?;
        Ok(Some(report))
    }

    fn build_temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_json(&self, path: &Path, report: &SkillReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
        fs::write(path, json)
            .with_context(|| report_context("write", &path.display().to_string()))?;
        Ok(())
    }
}
