pub mod config;
pub mod macros;
pub mod output;
pub mod profile;
pub mod select;
