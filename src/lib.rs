#[macro_use]
extern crate log;

pub mod attendance;
pub mod command;
pub mod config;
pub mod error;
pub mod fitness_class;
pub mod import;
pub mod manager;
pub mod member;
pub mod tools;
