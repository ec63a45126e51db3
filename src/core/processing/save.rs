use std::path::Path;

use tracing::info;

use crate::core::params::FaviconParams;
use crate::core::processing::pipeline::{Favicon, render_sizes};
use crate::error::Result;
use crate::io::writers::ico::write_ico;
use crate::io::writers::png::write_png;
use crate::types::OutputFormat;

/// Write the favicon in the container implied by `output`'s extension.
/// Returns the format used and the square sizes written.
pub fn save_favicon(
    favicon: &Favicon,
    output: &Path,
    params: &FaviconParams,
) -> Result<(OutputFormat, Vec<u32>)> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let format = OutputFormat::from_path(output);
    let sizes = match format {
        OutputFormat::Png => {
            write_png(output, &favicon.image)?;
            vec![favicon.image.width()]
        }
        OutputFormat::Ico => {
            let frames = render_sizes(&favicon.icon, &params.ico_sizes, params.filter)?;
            write_ico(output, &frames)?;
            params.ico_sizes.clone()
        }
    };

    info!("Favicon saved to {}", output.display());
    Ok((format, sizes))
}
