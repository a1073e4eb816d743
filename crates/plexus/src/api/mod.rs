pub mod config;
pub mod cue;
pub mod network;
pub mod types;
