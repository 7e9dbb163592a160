// src/export/mod.rs

pub mod csv;
pub mod download;

pub use csv::{DEFAULT_EXCLUDE, exclusion_set, serialize};
pub use download::{CSV_MIME, JSON_MIME, resolve_path, save_text};

use clap::ValueEnum;

/// Which record listing to export.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportSource {
    Customers,
    Trainings,
}

impl ExportSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportSource::Customers => "customers",
            ExportSource::Trainings => "trainings",
        }
    }

    /// File name used when `--file` is not given.
    pub fn default_file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }
}
