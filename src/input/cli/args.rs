use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::controllers::explorer::data::explorer_config::{ConfigError, ExplorerConfig};
use crate::core::actions::generate_fractal::render_strategy::RenderStrategy;
use crate::core::data::raster_size::RasterSize;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::navigation::NavigationLimits;

/// Everything the command line decides.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub config: ExplorerConfig,
    pub script: Option<String>,
    pub verbosity: Option<String>,
}

/// Builds the clap command. `with_script` adds `--commands` for headless use.
#[must_use]
pub fn explorer_command(with_script: bool) -> Command {
    let app = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Escape-time Mandelbrot renderer with keyboard pan and zoom");

    let app = app
        .arg(Arg::new("width")
            .long("width")
            .value_parser(clap::value_parser!(u32))
            .value_name("PIXELS")
            .help("Raster width in pixels (default: 940)"))
        .arg(Arg::new("height")
            .long("height")
            .value_parser(clap::value_parser!(u32))
            .value_name("PIXELS")
            .help("Raster height in pixels (default: 720)"))
        .arg(Arg::new("max-iterations")
            .long("max-iterations")
            .value_parser(clap::value_parser!(u32))
            .value_name("COUNT")
            .help("Iteration cap per pixel (default: 200)"))
        .arg(Arg::new("escape-radius")
            .long("escape-radius")
            .value_parser(clap::value_parser!(f64))
            .value_name("RADIUS")
            .help("Magnitude above which an orbit has escaped (default: 2.0)"))
        .arg(Arg::new("colour-mode")
            .long("colour-mode")
            .value_name("MODE")
            .help("Blue channel arithmetic: wrapping (default) or saturating"))
        .arg(Arg::new("contrast")
            .long("contrast")
            .value_parser(clap::value_parser!(u8))
            .value_name("CONTRAST")
            .help("Blue decrease per iteration (default: 25)"))
        .arg(Arg::new("centre-real")
            .long("centre-real")
            .value_parser(clap::value_parser!(f64))
            .allow_negative_numbers(true)
            .value_name("REAL")
            .help("Real part of the initial centre (default: 0)"))
        .arg(Arg::new("centre-imag")
            .long("centre-imag")
            .value_parser(clap::value_parser!(f64))
            .allow_negative_numbers(true)
            .value_name("IMAG")
            .help("Imaginary part of the initial centre (default: 0)"))
        .arg(Arg::new("deviation")
            .long("deviation")
            .value_parser(clap::value_parser!(f64))
            .value_name("DEVIATION")
            .help("Initial half-width of the view (default: 2.0)"))
        .arg(Arg::new("step")
            .long("step")
            .value_parser(clap::value_parser!(f64))
            .value_name("STEP")
            .help("Pan fraction and zoom factor, between 0 and 1 exclusive (default: 0.5)"))
        .arg(Arg::new("min-deviation")
            .long("min-deviation")
            .value_parser(clap::value_parser!(f64))
            .value_name("DEVIATION")
            .help("Smallest half-width zooming may reach (default: none)"))
        .arg(Arg::new("serial")
            .long("serial")
            .action(ArgAction::SetTrue)
            .help("Render on the calling thread instead of the rayon pool"))
        .arg(Arg::new("verbosity")
            .short('v')
            .long("verbosity")
            .number_of_values(1)
            .value_name("VERBOSITY_LEVEL")
            .help("Set verbosity level for output (trace, debug, info (default), warn, error)"));

    if with_script {
        app.arg(Arg::new("commands")
            .short('c')
            .long("commands")
            .value_name("SCRIPT")
            .help("Comma-separated commands: up, down, left, right, zoom, zoom-out, reset, quit"))
    } else {
        app
    }
}

/// Turns parsed matches into options, validating the resulting config.
pub fn parse_options(matches: &ArgMatches) -> Result<CliOptions, ConfigError> {
    let mut config = ExplorerConfig::default();

    let width = matches.get_one::<u32>("width").copied().unwrap_or(config.raster.width());
    let height = matches.get_one::<u32>("height").copied().unwrap_or(config.raster.height());
    config.raster = RasterSize::new(width, height)?;

    if let Some(max_iterations) = matches.get_one::<u32>("max-iterations") {
        config.max_iterations = *max_iterations;
    }
    if let Some(escape_radius) = matches.get_one::<f64>("escape-radius") {
        config.escape_radius = *escape_radius;
    }
    if let Some(mode) = matches.get_one::<String>("colour-mode") {
        config.colour_map_kind = MandelbrotColourMapKinds::from_mode_name(mode).ok_or_else(|| {
            ConfigError::InvalidArgument {
                name: "colour-mode".to_string(),
                value: mode.clone(),
            }
        })?;
    }
    if let Some(contrast) = matches.get_one::<u8>("contrast") {
        config.contrast = *contrast;
    }
    if let Some(real) = matches.get_one::<f64>("centre-real") {
        config.centre.real = *real;
    }
    if let Some(imag) = matches.get_one::<f64>("centre-imag") {
        config.centre.imag = *imag;
    }
    if let Some(deviation) = matches.get_one::<f64>("deviation") {
        config.deviation = *deviation;
    }
    if let Some(step) = matches.get_one::<f64>("step") {
        config.step = *step;
    }
    if let Some(min_deviation) = matches.get_one::<f64>("min-deviation") {
        config.limits = NavigationLimits::with_min_deviation(*min_deviation);
    }
    if matches.get_flag("serial") {
        config.strategy = RenderStrategy::Serial;
    }

    config.validate()?;

    let script = matches
        .try_get_one::<String>("commands")
        .ok()
        .flatten()
        .cloned();

    Ok(CliOptions {
        config,
        script,
        verbosity: matches.get_one::<String>("verbosity").cloned(),
    })
}
