pub mod animation_clock;
pub mod config;
pub mod experiment;
pub mod parameters;
