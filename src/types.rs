//! Shared types and enums used across favicrop.
//! Includes the icon isolation strategy (`IconStrategy`), the resampling filter
//! (`ResizeFilter`), the output container (`OutputFormat`) and the geometry types
//! (`BoundingBox`, `CropRegion`).
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum IconStrategy {
    /// Square of side `height` taken from the left edge when content is wider than tall
    #[default]
    LeftSquare,
    /// Everything left of the first transparent column gap
    Gap,
    /// Keep the whole cropped content
    Whole,
}

impl std::fmt::Display for IconStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconStrategy::LeftSquare => write!(f, "left-square"),
            IconStrategy::Gap => write!(f, "gap"),
            IconStrategy::Whole => write!(f, "whole"),
        }
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeFilter {
    Nearest,
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl std::fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResizeFilter::Nearest => "nearest",
            ResizeFilter::Bilinear => "bilinear",
            ResizeFilter::CatmullRom => "catmull-rom",
            ResizeFilter::Mitchell => "mitchell",
            ResizeFilter::Lanczos3 => "lanczos3",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Ico,
}

impl OutputFormat {
    /// `.ico` (any case) selects ICO; everything else is written as PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ico") => OutputFormat::Ico,
            _ => OutputFormat::Png,
        }
    }
}

/// Content bounds with exclusive `right`/`bottom`, i.e. `(left, top, right, bottom)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn to_region(&self) -> CropRegion {
        CropRegion {
            x: self.left,
            y: self.top,
            width: self.width(),
            height: self.height(),
        }
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/favicon.ico")), OutputFormat::Ico);
        assert_eq!(OutputFormat::from_path(Path::new("FAVICON.ICO")), OutputFormat::Ico);
        assert_eq!(OutputFormat::from_path(Path::new("favicon.png")), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("favicon")), OutputFormat::Png);
    }

    #[test]
    fn bbox_dimensions_are_exclusive() {
        let bbox = BoundingBox {
            left: 2,
            top: 3,
            right: 10,
            bottom: 7,
        };
        assert_eq!(bbox.width(), 8);
        assert_eq!(bbox.height(), 4);
        assert_eq!(
            bbox.to_region(),
            CropRegion {
                x: 2,
                y: 3,
                width: 8,
                height: 4
            }
        );
        assert_eq!(bbox.to_string(), "(2, 3, 10, 7)");
        assert!(!bbox.is_empty());
        assert!(BoundingBox { left: 4, top: 0, right: 4, bottom: 9 }.is_empty());
    }

    #[test]
    fn strategy_serializes_kebab_case() {
        let s = serde_json::to_string(&IconStrategy::LeftSquare).unwrap();
        assert_eq!(s, "\"left-square\"");
        let f: ResizeFilter = serde_json::from_str("\"catmull-rom\"").unwrap();
        assert_eq!(f, ResizeFilter::CatmullRom);
    }
}
