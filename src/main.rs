use std::process::ExitCode;

use clap::Parser;
use minimax_chess::config::GameConfig;
use minimax_chess::orchestrator::Orchestrator;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::parse();
    log::info!(
        "White: {:?}, Black: {:?}, ply limit {}, seed {}",
        config.white,
        config.black,
        config.max_plies,
        config.seed
    );

    let mut game = Orchestrator::from_config(&config);
    match game.run() {
        Ok(result) => {
            println!("{}", game.board());
            println!("{}", game.board().position().to_fen());
            println!("{result:?} after {} plies", game.plies_played());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("game aborted: {e}");
            ExitCode::FAILURE
        }
    }
}
