pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod lines;
pub mod loader;
pub mod report;
