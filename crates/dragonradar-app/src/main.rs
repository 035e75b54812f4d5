use std::io;
use std::process::ExitCode;

use log::error;

use dragonradar_app::config::{self, DriverError};
use dragonradar_app::game_loop;
use dragonradar_sim::GameEngine;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("dragonradar: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DriverError> {
    let config = config::from_env()?;
    let mut engine = GameEngine::new(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    game_loop::run(&mut engine, stdin.lock(), &mut stdout)
}
