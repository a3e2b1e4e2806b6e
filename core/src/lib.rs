pub mod exec;
pub mod preflight;
pub mod runner;
