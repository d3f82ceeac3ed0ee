use serde::{Deserialize, Serialize};

/// What a thread's summary line describes. Produced by the classifier,
/// consumed by the renderer; carries only the payload rendering needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SummaryCategory {
    GroupUpdate,
    GroupQuit,
    KeyExchange,
    FailedDecrypt,
    NoRemoteSession,
    EndSession,
    LegacyType,
    /// Unsent draft; the body is shown after the draft label.
    Draft(String),
    OutgoingCall,
    IncomingCall,
    MissedCall,
    Joined,
    /// New disappearing-message timer in seconds. 0 = disabled.
    ExpirationTimerUpdate(u32),
    IdentityUpdate { is_group: bool },
    IdentityVerified,
    IdentityDefault,
    UnsupportedMessage,
    StickerMedia,
    /// View-once attachment with its content type, if known.
    RevealableMedia(Option<String>),
    GenericMedia,
    PlainBody(String),
}

impl SummaryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GroupUpdate => "group_update",
            Self::GroupQuit => "group_quit",
            Self::KeyExchange => "key_exchange",
            Self::FailedDecrypt => "failed_decrypt",
            Self::NoRemoteSession => "no_remote_session",
            Self::EndSession => "end_session",
            Self::LegacyType => "legacy_type",
            Self::Draft(_) => "draft",
            Self::OutgoingCall => "outgoing_call",
            Self::IncomingCall => "incoming_call",
            Self::MissedCall => "missed_call",
            Self::Joined => "joined",
            Self::ExpirationTimerUpdate(_) => "expiration_timer_update",
            Self::IdentityUpdate { .. } => "identity_update",
            Self::IdentityVerified => "identity_verified",
            Self::IdentityDefault => "identity_default",
            Self::UnsupportedMessage => "unsupported_message",
            Self::StickerMedia => "sticker_media",
            Self::RevealableMedia(_) => "revealable_media",
            Self::GenericMedia => "generic_media",
            Self::PlainBody(_) => "plain_body",
        }
    }

    /// True for the only category rendered without emphasis.
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::PlainBody(_))
    }
}

impl std::fmt::Display for SummaryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpirationTimerUpdate(seconds) => write!(f, "{}({}s)", self.as_str(), seconds),
            Self::IdentityUpdate { is_group } => write!(f, "{}(group={})", self.as_str(), is_group),
            Self::RevealableMedia(Some(ct)) => write!(f, "{}({})", self.as_str(), ct),
            _ => f.write_str(self.as_str()),
        }
    }
}
