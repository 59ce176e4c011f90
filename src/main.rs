use anyhow::Result;
use env_logger::Env;
use log::info;

use skyscrapers_checker::config::Config;
use skyscrapers_checker::{loader, parser, validation};

fn main() -> Result<()> {
    // Parse configuration from command line
    let config = Config::from_args_and_env();

    env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_level)).init();

    let lines = loader::read_board_lines(&config.board_path)?;
    let board = parser::parse_board(&lines)?;
    info!(
        "checking {n}x{n} board from {path}",
        n = board.size(),
        path = config.board_path.display()
    );

    let verdict = validation::validate_board(&board);
    println!("{verdict}");

    Ok(())
}
