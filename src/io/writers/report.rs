use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::processing::pipeline::Favicon;
use crate::error::Result;
use crate::types::{BoundingBox, CropRegion, IconStrategy, OutputFormat, ResizeFilter};

/// Summary of one favicon run, written as a JSON sidecar on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaviconReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub source_width: u32,
    pub source_height: u32,
    pub content_bbox: Option<BoundingBox>,
    pub icon_region: CropRegion,
    pub padded: bool,
    pub strategy: IconStrategy,
    pub filter: ResizeFilter,
    /// Square sides written, one per PNG/ICO frame
    pub output_sizes: Vec<u32>,
    pub generated_at: DateTime<Utc>,
}

impl FaviconReport {
    pub fn new(
        input: &Path,
        output: &Path,
        format: OutputFormat,
        favicon: &Favicon,
        strategy: IconStrategy,
        filter: ResizeFilter,
        output_sizes: Vec<u32>,
    ) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            format,
            source_width: favicon.source_size.0,
            source_height: favicon.source_size.1,
            content_bbox: favicon.content_bbox,
            icon_region: favicon.icon_region,
            padded: favicon.padded,
            strategy,
            filter,
            output_sizes,
            generated_at: Utc::now(),
        }
    }
}

/// `favicon.png` -> `favicon.png.json`, so PNG and ICO outputs never collide.
pub fn sidecar_path(output: &Path) -> PathBuf {
    let mut name = output.as_os_str().to_owned();
    name.push(".json");
    PathBuf::from(name)
}

pub fn write_report_sidecar(output: &Path, report: &FaviconReport) -> Result<PathBuf> {
    let path = sidecar_path(output);
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json_string)?;
    info!("Created report sidecar: {:?}", path);
    Ok(path)
}
