//! JSON summary of a finished session.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pixzoom_core::{Channels, Operation, PixelBuffer, ValidationMode};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn of(image: &PixelBuffer) -> Self {
        let (width, height) = image.dimensions();
        Self { width, height }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub channels: Channels,
    pub max_value: u16,
    pub input_size: Size,
    pub output_size: Size,
    pub mode: ValidationMode,
    pub operations: Vec<Operation>,
}

impl SessionReport {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize session report")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))
    }
}
