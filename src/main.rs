use clap::Parser;
use color_eyre::Result;
use ticktop::app::App;
use ticktop::config::Config;
use ticktop::event::EventHandler;
use ticktop::system::kill::SignalController;
use ticktop::system::platform;
use ticktop::ui::TerminalPresenter;
use ticktop::{logging, scheduler};

/// Keys while running: `q` quits, `k` prompts for a PID to send SIGTERM to.
#[derive(Parser)]
#[command(
    name = "ticktop",
    version,
    about = "Live CPU and memory monitor for Linux processes"
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _cli = Cli::parse();
    logging::init()?;

    let config = Config::default();
    let source = platform::open_source()?;
    // Priming takes the throwaway baseline before anything is drawn.
    let mut app = App::new(&config, source, SignalController::new());

    let terminal = ratatui::init();
    let mut presenter = TerminalPresenter::new(terminal, config.table.name_width);
    let mut events = EventHandler::new();

    let result = scheduler::run(&mut app, &mut presenter, &mut events, &config.general).await;

    ratatui::restore();
    result?;

    println!("Exiting monitor...");
    Ok(())
}
