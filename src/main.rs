use anyhow::Result;
use log::info;
use std::io;

use recipe_book::menu;
use recipe_book::session::Session;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting Recipe Book");

    let mut session = Session::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut session, stdin.lock(), stdout.lock())?;

    info!("Session ended");
    Ok(())
}
