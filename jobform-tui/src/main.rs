//! Terminal front end for the job-application form.

mod app;
mod error;
mod focus;
mod render;
mod terminal;

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use crate::app::App;
use crate::error::RuntimeError;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), RuntimeError> {
    // Stdout belongs to the raw-mode terminal; logs go to a file.
    let log_file = File::create("jobform-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    App::new().run()
}
