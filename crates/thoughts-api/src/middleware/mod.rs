pub mod gate;
pub mod logging;
