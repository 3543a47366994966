/// Tick bounds of the concentrated-liquidity price grid.
pub const MIN_TICK: i32 = -887272;
pub const MAX_TICK: i32 = 887272;

pub const MIN_TICK_SPACING: i32 = 1;
pub const MAX_TICK_SPACING: i32 = 32767;

/// LP fee is capped at 100% in hundredths of a bip; the flag value marks a
/// dynamic-fee pool.
pub const MAX_LP_FEE: u32 = 1_000_000;
pub const DYNAMIC_FEE_FLAG: u32 = 0x800000;

pub fn is_valid_tick(tick: i32) -> bool {
    (MIN_TICK..=MAX_TICK).contains(&tick)
}

pub fn is_valid_tick_spacing(tick_spacing: i32) -> bool {
    (MIN_TICK_SPACING..=MAX_TICK_SPACING).contains(&tick_spacing)
}
