pub mod osc;

pub use osc::{parse_message, OscCommand, OscController};
