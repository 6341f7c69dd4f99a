use clap::Parser;
use color_eyre::Result;
use property_map_tui::app::App;
use property_map_tui::cli::CliArgs;
use property_map_tui::config::AppConfig;
use property_map_tui::{event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = AppConfig::from_args(&args);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    let mut app = App::new(&config);
    app.load().await;

    // Print stats when asked to or when there is no terminal to draw on
    if args.headless || !is_terminal() {
        return event::run_headless(&app, args.json);
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup();

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
