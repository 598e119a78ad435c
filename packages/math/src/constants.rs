// Constants shared by every package of the pool engine:
// - tick bounds of the segmented price grid
// - fixed-point scales
// - basis point arithmetic

// ============================================================
// TICK CONSTANTS
// ============================================================

/// Highest usable tick index (2^20 - 1)
/// Also the index of the upper sentinel tick
pub const MAX_TICK: i32 = 1_048_575;

/// Lowest usable tick index, index of the lower sentinel tick
pub const MIN_TICK: i32 = -MAX_TICK;

/// Number of bits in a tick index magnitude (one ladder rung per bit)
pub const TICK_LADDER_BITS: usize = 20;

// ============================================================
// FIXED POINT SCALES
// ============================================================

/// Sqrt prices are stored as sqrt(price) * 2^80
pub const X80_BITS: u32 = 80;

/// Fee growth and seconds-per-liquidity accumulators are scaled by 2^128
pub const X128_BITS: u32 = 128;

// ============================================================
// FEE CONSTANTS
// ============================================================

/// Basis point denominator (100% = 10000 bps)
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Maximum swap fee in basis points
pub const MAX_FEE_BPS: u32 = 10_000;
