//! Text collaborators of the renderer: template lookup, recipient names,
//! duration phrasing and media-type checks.

pub mod catalog;
pub mod duration;
pub mod media;

pub use catalog::{CatalogTextProvider, TemplateCatalog};
pub use duration::{DurationFormatter, ExpirationDurations};
pub use media::{MediaTypes, MimeMediaTypes};

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Supplies localized templates and the recipient's display name.
pub trait TextProvider: Send + Sync {
    fn lookup(&self, key: TemplateKey) -> String;
    /// Absent names resolve to an empty string or a provider placeholder.
    fn resolve_recipient_name(&self) -> String;
}

/// Every template the renderer can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateKey {
    GroupUpdated,
    LeftGroup,
    KeyExchange,
    BadEncrypted,
    NoSession,
    SessionReset,
    LegacyProtocol,
    DraftLabel,
    Called,
    CalledYou,
    MissedCall,
    /// One placeholder: recipient name.
    Joined,
    TimerDisabled,
    /// One placeholder: formatted duration.
    TimerUpdated,
    SafetyNumberChanged,
    /// One placeholder: recipient name.
    SafetyNumberChangedWith,
    MarkedVerified,
    MarkedUnverified,
    CouldNotProcess,
    Sticker,
    ViewOncePhoto,
    ViewOnceVideo,
    MediaMessage,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 23] = [
        Self::GroupUpdated,
        Self::LeftGroup,
        Self::KeyExchange,
        Self::BadEncrypted,
        Self::NoSession,
        Self::SessionReset,
        Self::LegacyProtocol,
        Self::DraftLabel,
        Self::Called,
        Self::CalledYou,
        Self::MissedCall,
        Self::Joined,
        Self::TimerDisabled,
        Self::TimerUpdated,
        Self::SafetyNumberChanged,
        Self::SafetyNumberChangedWith,
        Self::MarkedVerified,
        Self::MarkedUnverified,
        Self::CouldNotProcess,
        Self::Sticker,
        Self::ViewOncePhoto,
        Self::ViewOnceVideo,
        Self::MediaMessage,
    ];

    /// Key used in the `[templates]` config table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GroupUpdated => "group_updated",
            Self::LeftGroup => "left_group",
            Self::KeyExchange => "key_exchange",
            Self::BadEncrypted => "bad_encrypted",
            Self::NoSession => "no_session",
            Self::SessionReset => "session_reset",
            Self::LegacyProtocol => "legacy_protocol",
            Self::DraftLabel => "draft_label",
            Self::Called => "called",
            Self::CalledYou => "called_you",
            Self::MissedCall => "missed_call",
            Self::Joined => "joined",
            Self::TimerDisabled => "timer_disabled",
            Self::TimerUpdated => "timer_updated",
            Self::SafetyNumberChanged => "safety_number_changed",
            Self::SafetyNumberChangedWith => "safety_number_changed_with",
            Self::MarkedVerified => "marked_verified",
            Self::MarkedUnverified => "marked_unverified",
            Self::CouldNotProcess => "could_not_process",
            Self::Sticker => "sticker",
            Self::ViewOncePhoto => "view_once_photo",
            Self::ViewOnceVideo => "view_once_video",
            Self::MediaMessage => "media_message",
        }
    }

    pub fn takes_placeholder(&self) -> bool {
        matches!(self, Self::Joined | Self::TimerUpdated | Self::SafetyNumberChangedWith)
    }
}

impl std::fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemplateKey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown template key: {}", s))
    }
}

const ESCAPED_PERCENT: &str = "%%";

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%%|%(?:1\$)?s").unwrap())
}

/// Substitute the first `%s` / `%1$s` of `template` with `value`. `%%`
/// collapses to a literal `%` and never starts a placeholder.
pub fn fill_placeholder(template: &str, value: &str) -> String {
    let mut filled = false;
    placeholder_re()
        .replace_all(template, |caps: &Captures| {
            let m = &caps[0];
            if m == ESCAPED_PERCENT {
                "%".to_string()
            } else if filled {
                m.to_string()
            } else {
                filled = true;
                value.to_string()
            }
        })
        .into_owned()
}

pub fn has_placeholder(template: &str) -> bool {
    placeholder_re()
        .find_iter(template)
        .any(|m| m.as_str() != ESCAPED_PERCENT)
}
