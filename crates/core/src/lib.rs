#![forbid(unsafe_code)]

pub mod model;
pub mod parser;
pub mod prompt;
pub mod runner;
pub mod time;

pub use time::Clock;
