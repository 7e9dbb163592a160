pub mod calendar;
pub mod config;
pub mod customers;
pub mod export;
mod grid;
pub mod init;
pub mod stats;
pub mod trainings;
