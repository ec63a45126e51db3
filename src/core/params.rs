use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{IconStrategy, ResizeFilter};

/// Largest side an ICO directory entry can describe.
pub const MAX_ICO_SIZE: u32 = 256;

/// Favicon parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaviconParams {
    /// Output side in pixels (PNG output)
    pub size: u32,
    pub strategy: IconStrategy,
    pub filter: ResizeFilter,
    /// A pixel counts as content when its alpha is strictly above this value
    pub alpha_threshold: u8,
    /// Minimum run of transparent columns that separates icon from wordmark
    pub gap_columns: u32,
    /// If true, center the icon on a transparent square before resizing
    pub pad: bool,
    /// Frame sizes embedded when writing ICO
    pub ico_sizes: Vec<u32>,
}

impl Default for FaviconParams {
    fn default() -> Self {
        Self {
            size: 64,
            strategy: IconStrategy::LeftSquare,
            filter: ResizeFilter::Lanczos3,
            alpha_threshold: 0,
            gap_columns: 2,
            pad: false,
            ico_sizes: vec![16, 32, 48, 64],
        }
    }
}

impl FaviconParams {
    /// Load parameters from a JSON file; missing fields fall back to defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: FaviconParams = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ZeroSize {
                width: self.size,
                height: self.size,
            });
        }
        if self.gap_columns == 0 {
            return Err(Error::InvalidArgument {
                arg: "gap_columns",
                value: self.gap_columns.to_string(),
            });
        }
        if self.ico_sizes.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "ico_sizes",
                value: "[]".to_string(),
            });
        }
        if let Some(bad) = self
            .ico_sizes
            .iter()
            .find(|&&s| s == 0 || s > MAX_ICO_SIZE)
        {
            return Err(Error::InvalidArgument {
                arg: "ico_sizes",
                value: bad.to_string(),
            });
        }
        Ok(())
    }
}
