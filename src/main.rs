//! Five in a Row GUI
//!
//! Play against another person or the minimax AI, or watch two AIs play.
//! `--headless` plays an AI vs AI game in the terminal instead.

use clap::Parser;
use log::info;

use five_in_a_row::ui::FiveInARowApp;
use five_in_a_row::{Game, GameMode, SearchConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Minimax search depth (must be positive)
    #[arg(long, default_value_t = SearchConfig::DEFAULT_DEPTH as i32)]
    depth: i32,
    /// Game mode selected at start-up
    #[arg(long, value_enum, default_value_t = GameMode::HumanVsHuman)]
    mode: GameMode,
    /// Play one AI vs AI game in the terminal and exit
    #[arg(long)]
    headless: bool,
    #[arg(long, default_value = "info")]
    log_level: log::Level,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    simple_logger::init_with_level(args.log_level)?;

    let config = SearchConfig::new(args.depth)?;

    if args.headless {
        let mut game = Game::new(GameMode::AiVsAi, config);
        game.start()?;
        let outcome = game.play_out()?;
        println!("{}", game.board());
        info!("{:?} after {} moves", outcome, game.step());
        return Ok(());
    }

    let game = Game::new(args.mode, config);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Five in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Five in a Row",
        options,
        Box::new(|cc| Ok(Box::new(FiveInARowApp::new(cc, game)))),
    )?;
    Ok(())
}
