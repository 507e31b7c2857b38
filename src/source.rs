//! Named data sets and the load-or-create-fallback step shared by both
//! renderers.

use std::{fs, path::PathBuf};

use crate::{
    config::AppConfig,
    loader::{self, LoadError},
    stats::Summary,
};

pub const COLUMN1_FALLBACK: &str = "160 591 114 229 230 270 128 1657 624 1503";
pub const COLUMN2_FALLBACK: &str = "15.0 69.9 6.5 22.4 28.4 65.9 19.4 198.7 38.8 138.2";

#[derive(Debug, Clone)]
pub struct NamedSource {
    pub name: String,
    pub path: PathBuf,
    pub fallback: &'static str,
}

impl NamedSource {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, fallback: &'static str) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            fallback,
        }
    }

    /// The two column data sets, at the paths configured for this run.
    pub fn columns(config: &AppConfig) -> Vec<NamedSource> {
        vec![
            Self::new("column1", &config.column1, COLUMN1_FALLBACK),
            Self::new("column2", &config.column2, COLUMN2_FALLBACK),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    Computed(Summary),
    /// The source was missing and its fallback data set has been written.
    Created {
        reason: String,
    },
    Failed {
        reason: String,
    },
}

pub fn process(source: &NamedSource) -> SourceOutcome {
    match loader::load_from_file(&source.path) {
        Ok(list) => {
            let summary = Summary::of(&list);
            tracing::info!(
                "{}: {} values, mean {}, std dev {}",
                source.name,
                summary.count,
                summary.mean,
                summary.std_dev
            );
            SourceOutcome::Computed(summary)
        }
        Err(err @ LoadError::SourceNotFound(_)) => {
            tracing::warn!("{}, writing fallback data set", err);
            match fs::write(&source.path, source.fallback) {
                Ok(()) => SourceOutcome::Created {
                    reason: err.to_string(),
                },
                Err(write_err) => {
                    tracing::error!(
                        "Failed writing fallback to {}: {}",
                        source.path.display(),
                        write_err
                    );
                    SourceOutcome::Failed {
                        reason: format!("{err}; creating it failed: {write_err}"),
                    }
                }
            }
        }
        Err(err) => {
            let reason = format!("{:#}", anyhow::Error::from(err));
            tracing::error!("{}", reason);
            SourceOutcome::Failed { reason }
        }
    }
}
