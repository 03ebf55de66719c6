#[macro_use]
extern crate log;

use dto::calendar_date::CalendarDate;
use gym_manager::command::Command;
use gym_manager::config::GymConfig;
use gym_manager::manager::GymManager;
use gym_manager::tools::{log_error, log_rejection};
use std::io;

fn main() {
    env_logger::init();

    let mut manager = GymManager::new(GymConfig::from_args());
    println!("Gym Manager running...");

    for line in io::stdin().lines() {
        // An unreadable input ends the session.
        let line = line.unwrap_or_else(log_error("Q".to_owned()));
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => {
                println!("{}", manager.execute(Command::Quit, CalendarDate::today()));
                return;
            }
            Ok(command) => print!("{}", with_newline(manager.execute(command, CalendarDate::today()))),
            Err(e) => println!("{}", log_rejection(e)),
        }
    }
    info!("Input closed");
}

fn with_newline(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
