#![no_std]

pub mod engine;
pub mod fees;
pub mod types;

pub use engine::{swap_x_to_y, swap_y_to_x};
pub use fees::{accrue_fee, gross_up, FeeAsset};
pub use types::{SwapConfig, SwapOutcome, SwapResult, SwapState, TokenBalances};
