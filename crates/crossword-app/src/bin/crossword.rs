//! Crossword terminal application.
//!
//! Loads a CSV word list and runs submit rounds on standard input/output.

use std::{io, process};

use clap::Parser as _;
use crossword_app::{
    app,
    settings::{Args, Settings},
};

fn main() {
    better_panic::install();
    env_logger::init();

    let settings = Settings::from(Args::parse());
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = app::run(&settings, &mut stdin.lock(), &mut stdout.lock()) {
        log::error!("{err}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}
