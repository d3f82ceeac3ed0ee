//! Message type-code decoding.
//!
//! The classifier only sees these predicates; `BitmaskTypes` decodes the
//! messaging database layout and tests substitute synthetic decoders.

use crate::constants::*;
use crate::{SummaryError, SummaryResult};

/// Boolean predicates over a raw type code. Predicates may overlap; the
/// classifier decides precedence.
pub trait MessageTypes: Send + Sync {
    fn is_group_update(&self, type_code: u64) -> bool;
    fn is_group_quit(&self, type_code: u64) -> bool;
    fn is_key_exchange(&self, type_code: u64) -> bool;
    fn is_failed_decrypt(&self, type_code: u64) -> bool;
    fn is_no_remote_session(&self, type_code: u64) -> bool;
    fn is_end_session(&self, type_code: u64) -> bool;
    fn is_legacy(&self, type_code: u64) -> bool;
    fn is_draft(&self, type_code: u64) -> bool;
    fn is_outgoing_call(&self, type_code: u64) -> bool;
    fn is_incoming_call(&self, type_code: u64) -> bool;
    fn is_missed_call(&self, type_code: u64) -> bool;
    fn is_joined(&self, type_code: u64) -> bool;
    fn is_expiration_timer_update(&self, type_code: u64) -> bool;
    fn is_identity_update(&self, type_code: u64) -> bool;
    fn is_identity_verified(&self, type_code: u64) -> bool;
    fn is_identity_default(&self, type_code: u64) -> bool;
    fn is_unsupported_message(&self, type_code: u64) -> bool;
}

/// Decoder for the messaging database's type bitmask.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmaskTypes;

impl BitmaskTypes {
    fn base_type(type_code: u64) -> u64 {
        type_code & BASE_TYPE_MASK
    }

    fn has(type_code: u64, bit: u64) -> bool {
        type_code & bit != 0
    }
}

impl MessageTypes for BitmaskTypes {
    fn is_group_update(&self, type_code: u64) -> bool {
        Self::has(type_code, GROUP_UPDATE_BIT)
    }

    fn is_group_quit(&self, type_code: u64) -> bool {
        Self::has(type_code, GROUP_QUIT_BIT)
    }

    fn is_key_exchange(&self, type_code: u64) -> bool {
        Self::has(type_code, KEY_EXCHANGE_BIT)
    }

    fn is_failed_decrypt(&self, type_code: u64) -> bool {
        Self::has(type_code, ENCRYPTION_REMOTE_FAILED_BIT)
    }

    fn is_no_remote_session(&self, type_code: u64) -> bool {
        Self::has(type_code, ENCRYPTION_REMOTE_NO_SESSION_BIT)
    }

    fn is_end_session(&self, type_code: u64) -> bool {
        Self::has(type_code, END_SESSION_BIT)
    }

    fn is_legacy(&self, type_code: u64) -> bool {
        Self::has(type_code, ENCRYPTION_REMOTE_LEGACY_BIT)
            || Self::has(type_code, ENCRYPTION_REMOTE_BIT)
    }

    fn is_draft(&self, type_code: u64) -> bool {
        Self::base_type(type_code) == BASE_DRAFT_TYPE
    }

    // Call records are stored without flag bits.
    fn is_outgoing_call(&self, type_code: u64) -> bool {
        type_code == OUTGOING_CALL_TYPE
    }

    fn is_incoming_call(&self, type_code: u64) -> bool {
        type_code == INCOMING_CALL_TYPE
    }

    fn is_missed_call(&self, type_code: u64) -> bool {
        type_code == MISSED_CALL_TYPE
    }

    fn is_joined(&self, type_code: u64) -> bool {
        Self::base_type(type_code) == JOINED_TYPE
    }

    fn is_expiration_timer_update(&self, type_code: u64) -> bool {
        Self::has(type_code, EXPIRATION_TIMER_UPDATE_BIT)
    }

    fn is_identity_update(&self, type_code: u64) -> bool {
        Self::has(type_code, KEY_EXCHANGE_IDENTITY_UPDATE_BIT)
    }

    fn is_identity_verified(&self, type_code: u64) -> bool {
        Self::has(type_code, KEY_EXCHANGE_IDENTITY_VERIFIED_BIT)
    }

    fn is_identity_default(&self, type_code: u64) -> bool {
        Self::has(type_code, KEY_EXCHANGE_IDENTITY_DEFAULT_BIT)
    }

    fn is_unsupported_message(&self, type_code: u64) -> bool {
        Self::base_type(type_code) == UNSUPPORTED_MESSAGE_TYPE
    }
}

/// Parse a type code given as decimal (`8388628`) or hex (`0x800014`).
pub fn parse_type_code(raw: &str) -> SummaryResult<u64> {
    let s = raw.trim().replace('_', "");
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| SummaryError::InvalidTypeCode(format!("'{}': {}", raw, e)))
}
