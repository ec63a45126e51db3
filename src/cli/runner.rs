use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use favicrop::io::writers::report::write_report_sidecar;
use favicrop::{FaviconParams, create_favicon};

use super::args::CliArgs;
use super::errors::AppError;

fn parse_size(size: &str) -> Result<u32, AppError> {
    let parsed_size = size.trim().parse::<u32>().map_err(|_| AppError::InvalidSize {
        size: size.to_string(),
    })?;
    if parsed_size == 0 {
        return Err(AppError::ZeroSize { size: parsed_size });
    }
    Ok(parsed_size)
}

/// Defaults, then the optional config file, then explicit flags.
pub fn build_params(args: &CliArgs) -> Result<FaviconParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            info!("Loading parameters from {:?}", path);
            FaviconParams::from_json_file(path).map_err(|source| AppError::Config {
                path: path.display().to_string(),
                source,
            })?
        }
        None => FaviconParams::default(),
    };

    if let Some(size) = &args.size {
        params.size = parse_size(size)?;
    }
    if let Some(strategy) = args.strategy {
        params.strategy = strategy;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if let Some(threshold) = args.alpha_threshold {
        params.alpha_threshold = threshold;
    }
    if let Some(gap) = args.gap_columns {
        params.gap_columns = gap;
    }
    if !args.ico_sizes.is_empty() {
        params.ico_sizes = args.ico_sizes.clone();
    }
    if args.pad {
        params.pad = true;
    } else if args.no_pad {
        params.pad = false;
    }

    params.validate()?;
    Ok(params)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = build_params(&args)?;
    debug!("Effective parameters: {:?}", params);

    if !args.input.exists() {
        return Err(AppError::MissingInput {
            path: args.input.display().to_string(),
        }
        .into());
    }

    let report = create_favicon(&args.input, &args.output, &params).map_err(AppError::from)?;

    if args.report {
        write_report_sidecar(&args.output, &report).map_err(AppError::from)?;
    }

    info!(
        "Successfully processed: {:?} -> {:?}",
        args.input, args.output
    );
    Ok(())
}
