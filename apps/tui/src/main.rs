use clap::Parser;
use color_eyre::Result;
use portfolio_tui::cli::CliArgs;
use portfolio_tui::{event, logging, terminal, App, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = AppConfig::from_env();

    let headless = args.headless || args.json || !is_terminal();

    // The interactive UI owns the screen, so it logs to a file instead
    let log_file = (!headless).then(|| config.log_file.clone());
    logging::init(config.debug, log_file.as_deref())?;
    tracing::debug!("starting with {config:?}");

    let mut app = App::new(config);
    app.load_data().await;

    if headless {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup(true, true);

    if let Err(e) = &result {
        tracing::error!("exiting with error: {e}");
    }
    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
