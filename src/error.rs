//! Error taxonomy for the encoding pipeline.
//!
//! All failures are synchronous and deterministic; nothing is retried.
//! Placement inconsistencies are capacity-table defects and fail by
//! assertion instead of surfacing here.

use crate::encoder::modes::Charset;
use crate::models::ECLevel;
use thiserror::Error;

/// Errors surfaced by `encode` and the rendering glue
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The payload needs a version beyond 40 at the requested EC level
    #[error("payload of {length} characters exceeds version 40 capacity at {ec_level:?}")]
    CapacityExceeded {
        /// Payload length in characters (bytes for byte mode)
        length: usize,
        /// Requested error correction level
        ec_level: ECLevel,
    },

    /// A character cannot be represented in the requested byte-mode charset
    #[error("character {character:?} is not representable in {charset}")]
    InvalidCharacter {
        /// Offending character
        character: char,
        /// Charset it failed against
        charset: Charset,
    },

    /// A configuration value was rejected before encoding started
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable rejection cause
        reason: String,
    },
}
