// Time-weighted cumulatives oracle

#![no_std]

pub mod buffer;
pub mod observe;
pub mod types;

pub use buffer::{increase_observation_count, init_buffer, update_timed_cumulatives, CumulativesStorage};
pub use observe::{current_cumulatives, observe};
pub use types::{BufferMeta, CumulativesValue, SplCumulative, TickCumulative, TimedCumulatives};
