pub mod ohm;
pub mod orbit;
