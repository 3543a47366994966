use alloy_primitives::B256;

use router_abi::v4::PoolKey;
use router_types::RouterCodecError;

use crate::pool_key::{PoolKeyHelper, TruncatedPoolId};
use crate::tick::is_valid_tick;

/// The uninitialized position word.
pub const EMPTY_POSITION_INFO: B256 = B256::ZERO;

/// Position metadata packed into one 32-byte word.
///
/// Layout: bytes 0..25 truncated pool id, bytes 25..28 tickUpper, bytes 28..31
/// tickLower (both 24-bit two's-complement big-endian), low bit of byte 31 the
/// subscriber flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PositionInfo {
    pub pool_id: TruncatedPoolId,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub has_subscriber: bool,
}

impl PositionInfo {
    pub fn new(pool_id: TruncatedPoolId, tick_lower: i32, tick_upper: i32, has_subscriber: bool) -> Self {
        Self { pool_id, tick_lower, tick_upper, has_subscriber }
    }

    pub fn from_pool_key(pool_key: &PoolKey, tick_lower: i32, tick_upper: i32, has_subscriber: bool) -> Self {
        Self::new(PoolKeyHelper::truncated_pool_id(pool_key), tick_lower, tick_upper, has_subscriber)
    }

    pub fn encode(&self) -> Result<B256, RouterCodecError> {
        if !is_valid_tick(self.tick_lower) {
            return Err(RouterCodecError::TickOutOfRange { tick: self.tick_lower });
        }
        if !is_valid_tick(self.tick_upper) {
            return Err(RouterCodecError::TickOutOfRange { tick: self.tick_upper });
        }
        if self.tick_lower >= self.tick_upper {
            return Err(RouterCodecError::InvalidTickRange {
                tick_lower: self.tick_lower,
                tick_upper: self.tick_upper,
            });
        }

        let mut word = [0u8; 32];
        word[..25].copy_from_slice(self.pool_id.as_slice());
        word[25..28].copy_from_slice(&pack_tick(self.tick_upper));
        word[28..31].copy_from_slice(&pack_tick(self.tick_lower));
        word[31] = self.has_subscriber as u8;

        Ok(B256::from(word))
    }

    pub fn decode(word: &B256) -> Self {
        Self {
            pool_id: TruncatedPoolId::from_slice(&word[..25]),
            tick_lower: extract_tick_lower(word),
            tick_upper: extract_tick_upper(word),
            has_subscriber: extract_has_subscriber(word),
        }
    }
}

pub fn extract_tick_upper(word: &B256) -> i32 {
    unpack_tick(&word[25..28])
}

pub fn extract_tick_lower(word: &B256) -> i32 {
    unpack_tick(&word[28..31])
}

pub fn extract_has_subscriber(word: &B256) -> bool {
    word[31] & 0x01 != 0
}

fn pack_tick(tick: i32) -> [u8; 3] {
    let raw = (tick as u32) & 0xFF_FFFF;
    [(raw >> 16) as u8, (raw >> 8) as u8, raw as u8]
}

/// Values >= 2^23 are negative in 24-bit two's complement.
fn unpack_tick(bytes: &[u8]) -> i32 {
    let raw = ((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | (bytes[2] as u32);
    if raw >= 0x80_0000 {
        raw as i32 - 0x100_0000
    } else {
        raw as i32
    }
}
