#![no_std]

pub mod fees;
pub mod manager;
pub mod types;

pub use fees::calculate_pending_fees;
pub use manager::{is_in_range, modify_position, update_position, validate_position_params};
pub use types::{FeesOwed, PositionState};
