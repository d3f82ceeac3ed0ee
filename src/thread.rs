use serde::{Deserialize, Serialize};

/// Snapshot of the fields of a thread's most recent record that drive its
/// summary line. Owned by the host; the engine only reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThreadMetadata {
    /// Raw message type bitmask as stored by the messaging database.
    pub type_code: u64,
    /// Message text. Empty for media-only records.
    pub body: String,
    /// Short display name of the thread recipient, when resolved.
    pub recipient_display_name: Option<String>,
    pub is_group_recipient: bool,
    /// Disappearing-message timer, in milliseconds. 0 = disabled.
    pub expires_in_millis: u64,
    /// MIME type of the snippet attachment, if any.
    pub content_type: Option<String>,
    pub is_sticker: bool,
    /// View-once attachment.
    pub is_revealable: bool,
}

impl ThreadMetadata {
    pub fn new(type_code: u64, body: impl Into<String>) -> Self {
        Self {
            type_code,
            body: body.into(),
            ..Self::default()
        }
    }

    /// Timer in whole seconds, saturating at `u32::MAX`.
    pub fn expires_in_seconds(&self) -> u32 {
        u32::try_from(self.expires_in_millis / 1000).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expires_in_seconds_floors() {
        let mut m = ThreadMetadata::new(0, "");
        m.expires_in_millis = 30_999;
        assert_eq!(m.expires_in_seconds(), 30);
        m.expires_in_millis = 999;
        assert_eq!(m.expires_in_seconds(), 0);
    }

    #[test]
    fn test_expires_in_seconds_saturates() {
        let mut m = ThreadMetadata::new(0, "");
        m.expires_in_millis = u64::MAX;
        assert_eq!(m.expires_in_seconds(), u32::MAX);
    }

    #[test]
    fn test_deserialize_partial_record() {
        let m: ThreadMetadata =
            serde_json::from_str(r#"{"type_code": 20, "body": "hi", "is_sticker": true}"#).unwrap();
        assert_eq!(m.type_code, 20);
        assert_eq!(m.body, "hi");
        assert!(m.is_sticker);
        assert!(!m.is_revealable);
        assert_eq!(m.recipient_display_name, None);
    }
}
