use mandelbrot_navigator::{
    ConsolePresenter, ExplorerController, ScriptedInput, explorer_command, init_logging,
    parse_options, run_explorer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = explorer_command(true).get_matches();
    let options = parse_options(&matches)?;
    init_logging(options.verbosity.as_deref());

    let mut input = ScriptedInput::from_script(options.script.as_deref().unwrap_or(""))?;
    let mut controller = ExplorerController::new(&options.config)?;
    let mut presenter = ConsolePresenter::new();

    run_explorer(&mut controller, &mut input, &mut presenter)?;

    Ok(())
}
