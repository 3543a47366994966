use thiserror::Error;

/// Failures surfaced by the plan codecs and the pool identity model.
///
/// Every failure is returned synchronously to the immediate caller; nothing is
/// retried or logged here, and a partially decoded plan is never returned.
#[derive(Debug, Error)]
pub enum RouterCodecError {
    #[error("unknown command code {code:#04x} at position {position}")]
    UnknownCommandCode { code: u8, position: usize },

    #[error("length mismatch: {commands} command bytes, {inputs} inputs")]
    LengthMismatch { commands: usize, inputs: usize },

    #[error("field decode failed for {command}: {source}")]
    FieldDecodeFailure {
        command: &'static str,
        #[source]
        source: alloy_sol_types::Error,
    },

    #[error("tick {tick} out of range")]
    TickOutOfRange { tick: i32 },

    #[error("invalid tick spacing {tick_spacing}")]
    InvalidTickSpacing { tick_spacing: i32 },

    #[error("fee {fee} exceeds the maximum LP fee and is not the dynamic-fee flag")]
    FeeOutOfRange { fee: u32 },

    #[error("invalid tick range: lower {tick_lower} >= upper {tick_upper}")]
    InvalidTickRange { tick_lower: i32, tick_upper: i32 },
}

impl RouterCodecError {
    pub fn field_decode(command: &'static str, source: alloy_sol_types::Error) -> Self {
        RouterCodecError::FieldDecodeFailure { command, source }
    }
}
