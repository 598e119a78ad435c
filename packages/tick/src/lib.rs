#![no_std]

pub mod inside;
pub mod registry;
pub mod types;
pub mod update;

pub use inside::{cumulatives_inside, fee_growth_inside};
pub use registry::{
    init_sentinels, insert_with_witness, is_sentinel, is_valid_tick, lookup, TickStorage,
};
pub use types::{Accumulators, CumulativesInside, FeeGrowth, TickState};
pub use update::{cross_tick, update_tick};
