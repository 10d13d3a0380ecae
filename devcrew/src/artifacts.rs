//! Saving stage outputs to disk.
//!
//! Each stage result is written as a timestamped markdown file; a full
//! staged run additionally writes a YAML summary tying the artifacts
//! together.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use tokio::fs;
use uuid::Uuid;

use crate::workflow::Stage;

/// Summary of one full staged run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Local>,
    pub project_description: String,
    pub stages: Vec<StageRecord>,
}

/// One stage's entry in the run summary.
#[derive(Debug, Serialize)]
pub struct StageRecord {
    pub stage: String,
    pub output_file: String,
}

/// Write one stage's output to `dir/<stage>_<timestamp>.md`.
///
/// Creates the directory if needed and returns the written path.
pub async fn save_stage_output(dir: &Path, stage: Stage, content: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("{}_{}.md", stage.slug(), timestamp));

    fs::write(&path, content)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(stage = stage.slug(), path = %path.display(), "saved stage output");
    Ok(path)
}

/// Write the run summary as YAML next to the stage artifacts.
pub async fn save_run_summary(dir: &Path, summary: &RunSummary) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let timestamp = summary.started_at.format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("run_summary_{}.yaml", timestamp));

    let yaml = serde_yaml::to_string(summary).context("failed to serialize run summary")?;
    fs::write(&path, yaml)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_stage_output_creates_file() {
        let dir = tempfile::tempdir().unwrap();

        let path = save_stage_output(dir.path(), Stage::Requirements, "the requirements doc")
            .await
            .unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("requirements_"));
        assert!(name.ends_with(".md"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "the requirements doc");
    }

    #[tokio::test]
    async fn test_save_run_summary_roundtrips() {
        let dir = tempfile::tempdir().unwrap();

        let summary = RunSummary {
            run_id: Uuid::new_v4(),
            started_at: Local::now(),
            project_description: "a blog platform".to_string(),
            stages: vec![StageRecord {
                stage: "requirements".to_string(),
                output_file: "requirements_20250101_000000.md".to_string(),
            }],
        };

        let path = save_run_summary(dir.path(), &summary).await.unwrap();
        assert!(path.exists());

        let yaml = std::fs::read_to_string(&path).unwrap();
        assert!(yaml.contains("a blog platform"));
        assert!(yaml.contains("requirements_20250101_000000.md"));
    }
}
