use mandelbrot_navigator::{
    PixelsPresenterFactory, RunGuiCommand, explorer_command, init_logging, parse_options,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = explorer_command(false).get_matches();
    let options = parse_options(&matches)?;
    init_logging(options.verbosity.as_deref());

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), options.config);
    command.execute()?;

    Ok(())
}
