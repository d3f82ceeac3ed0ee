//! Classifier -- pick the one summary category for a thread's latest record.
//!
//! Type predicates overlap, so the rule table order is the contract: the
//! first matching rule wins and nothing after it is consulted. Records that
//! match no rule fall through to the media / plain-body cases.

use crate::category::SummaryCategory;
use crate::thread::ThreadMetadata;
use crate::types::{BitmaskTypes, MessageTypes};

/// One entry of the priority table.
pub struct ClassificationRule {
    pub name: &'static str,
    pub matches: fn(&dyn MessageTypes, u64) -> bool,
    pub build: fn(&ThreadMetadata) -> SummaryCategory,
}

/// Type-code rules in priority order.
pub static RULES: [ClassificationRule; 17] = [
    ClassificationRule {
        name: "group_update",
        matches: |t, c| t.is_group_update(c),
        build: |_| SummaryCategory::GroupUpdate,
    },
    ClassificationRule {
        name: "group_quit",
        matches: |t, c| t.is_group_quit(c),
        build: |_| SummaryCategory::GroupQuit,
    },
    ClassificationRule {
        name: "key_exchange",
        matches: |t, c| t.is_key_exchange(c),
        build: |_| SummaryCategory::KeyExchange,
    },
    ClassificationRule {
        name: "failed_decrypt",
        matches: |t, c| t.is_failed_decrypt(c),
        build: |_| SummaryCategory::FailedDecrypt,
    },
    ClassificationRule {
        name: "no_remote_session",
        matches: |t, c| t.is_no_remote_session(c),
        build: |_| SummaryCategory::NoRemoteSession,
    },
    ClassificationRule {
        name: "end_session",
        matches: |t, c| t.is_end_session(c),
        build: |_| SummaryCategory::EndSession,
    },
    ClassificationRule {
        name: "legacy",
        matches: |t, c| t.is_legacy(c),
        build: |_| SummaryCategory::LegacyType,
    },
    ClassificationRule {
        name: "draft",
        matches: |t, c| t.is_draft(c),
        build: |m| SummaryCategory::Draft(m.body.clone()),
    },
    ClassificationRule {
        name: "outgoing_call",
        matches: |t, c| t.is_outgoing_call(c),
        build: |_| SummaryCategory::OutgoingCall,
    },
    ClassificationRule {
        name: "incoming_call",
        matches: |t, c| t.is_incoming_call(c),
        build: |_| SummaryCategory::IncomingCall,
    },
    ClassificationRule {
        name: "missed_call",
        matches: |t, c| t.is_missed_call(c),
        build: |_| SummaryCategory::MissedCall,
    },
    ClassificationRule {
        name: "joined",
        matches: |t, c| t.is_joined(c),
        build: |_| SummaryCategory::Joined,
    },
    ClassificationRule {
        name: "expiration_timer_update",
        matches: |t, c| t.is_expiration_timer_update(c),
        build: |m| SummaryCategory::ExpirationTimerUpdate(m.expires_in_seconds()),
    },
    ClassificationRule {
        name: "identity_update",
        matches: |t, c| t.is_identity_update(c),
        build: |m| SummaryCategory::IdentityUpdate { is_group: m.is_group_recipient },
    },
    ClassificationRule {
        name: "identity_verified",
        matches: |t, c| t.is_identity_verified(c),
        build: |_| SummaryCategory::IdentityVerified,
    },
    ClassificationRule {
        name: "identity_default",
        matches: |t, c| t.is_identity_default(c),
        build: |_| SummaryCategory::IdentityDefault,
    },
    ClassificationRule {
        name: "unsupported_message",
        matches: |t, c| t.is_unsupported_message(c),
        build: |_| SummaryCategory::UnsupportedMessage,
    },
];

pub struct Classifier<T: MessageTypes = BitmaskTypes> {
    types: T,
}

impl Default for Classifier<BitmaskTypes> {
    fn default() -> Self {
        Self::new(BitmaskTypes)
    }
}

impl<T: MessageTypes> Classifier<T> {
    pub fn new(types: T) -> Self {
        Self { types }
    }

    /// Total: every record maps to exactly one category.
    pub fn classify(&self, meta: &ThreadMetadata) -> SummaryCategory {
        let types: &dyn MessageTypes = &self.types;

        if let Some(rule) = RULES.iter().find(|r| (r.matches)(types, meta.type_code)) {
            tracing::trace!(
                type_code = meta.type_code,
                rule = rule.name,
                "Classified by type code"
            );
            return (rule.build)(meta);
        }

        let category = Self::classify_content(meta);
        tracing::trace!(
            type_code = meta.type_code,
            category = category.as_str(),
            "Classified by content"
        );
        category
    }

    // Sticker is checked before revealable; both flags set => sticker.
    fn classify_content(meta: &ThreadMetadata) -> SummaryCategory {
        if !meta.body.is_empty() {
            return SummaryCategory::PlainBody(meta.body.clone());
        }
        if meta.is_sticker {
            SummaryCategory::StickerMedia
        } else if meta.is_revealable {
            SummaryCategory::RevealableMedia(meta.content_type.clone())
        } else {
            SummaryCategory::GenericMedia
        }
    }
}

/// Classify with the messaging database's bitmask layout.
pub fn classify(meta: &ThreadMetadata) -> SummaryCategory {
    Classifier::<BitmaskTypes>::default().classify(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::test_helpers::{FlagTypes, MetadataBuilder};

    fn expected_for(name: &str, meta: &ThreadMetadata) -> SummaryCategory {
        let rule = RULES.iter().find(|r| r.name == name).unwrap();
        (rule.build)(meta)
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "group_update",
                "group_quit",
                "key_exchange",
                "failed_decrypt",
                "no_remote_session",
                "end_session",
                "legacy",
                "draft",
                "outgoing_call",
                "incoming_call",
                "missed_call",
                "joined",
                "expiration_timer_update",
                "identity_update",
                "identity_verified",
                "identity_default",
                "unsupported_message",
            ]
        );
    }

    #[test]
    fn test_each_rule_alone_selects_its_category() {
        let meta = MetadataBuilder::new().body("hi").expires_in_millis(5_000).build();
        for rule in RULES.iter() {
            let classifier = Classifier::new(FlagTypes::with(&[rule.name]));
            assert_eq!(classifier.classify(&meta), (rule.build)(&meta), "rule {}", rule.name);
        }
    }

    #[test]
    fn test_earlier_rule_wins_over_every_later_rule() {
        let meta = MetadataBuilder::new().body("hi").group(true).build();
        for (i, first) in RULES.iter().enumerate() {
            for later in RULES.iter().skip(i + 1) {
                let classifier = Classifier::new(FlagTypes::with(&[later.name, first.name]));
                assert_eq!(
                    classifier.classify(&meta),
                    expected_for(first.name, &meta),
                    "{} should win over {}",
                    first.name,
                    later.name
                );
            }
        }
    }

    #[test]
    fn test_all_predicates_set_yields_group_update() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        let classifier = Classifier::new(FlagTypes::with(&names));
        let meta = MetadataBuilder::new().build();
        assert_eq!(classifier.classify(&meta), SummaryCategory::GroupUpdate);
    }

    #[test]
    fn test_no_predicate_falls_through_to_content() {
        let classifier = Classifier::new(FlagTypes::none());
        let meta = MetadataBuilder::new().body("hello").build();
        assert_eq!(classifier.classify(&meta), SummaryCategory::PlainBody("hello".into()));
        let meta = MetadataBuilder::new().build();
        assert_eq!(classifier.classify(&meta), SummaryCategory::GenericMedia);
    }

    #[test]
    fn test_sticker_wins_over_revealable() {
        let meta = MetadataBuilder::new()
            .sticker(true)
            .revealable(true)
            .content_type("video/mp4")
            .build();
        assert_eq!(
            Classifier::new(FlagTypes::none()).classify(&meta),
            SummaryCategory::StickerMedia
        );
    }

    #[test]
    fn test_revealable_carries_content_type() {
        let meta = MetadataBuilder::new().revealable(true).content_type("image/jpeg").build();
        assert_eq!(
            classify(&meta),
            SummaryCategory::RevealableMedia(Some("image/jpeg".into()))
        );
    }

    #[test]
    fn test_media_flags_ignored_when_body_present() {
        let meta = MetadataBuilder::new().body("caption").sticker(true).revealable(true).build();
        assert_eq!(classify(&meta), SummaryCategory::PlainBody("caption".into()));
    }

    #[test]
    fn test_draft_keeps_body_unmodified() {
        let meta = MetadataBuilder::new().type_code(BASE_DRAFT_TYPE).body("  half typed ").build();
        assert_eq!(classify(&meta), SummaryCategory::Draft("  half typed ".into()));
    }

    #[test]
    fn test_expiration_seconds_from_millis() {
        let base = BASE_INBOX_TYPE | EXPIRATION_TIMER_UPDATE_BIT;
        let meta = MetadataBuilder::new().type_code(base).expires_in_millis(0).build();
        assert_eq!(classify(&meta), SummaryCategory::ExpirationTimerUpdate(0));
        let meta = MetadataBuilder::new().type_code(base).expires_in_millis(30_000).build();
        assert_eq!(classify(&meta), SummaryCategory::ExpirationTimerUpdate(30));
        let meta = MetadataBuilder::new().type_code(base).expires_in_millis(1_999).build();
        assert_eq!(classify(&meta), SummaryCategory::ExpirationTimerUpdate(1));
    }

    #[test]
    fn test_identity_update_uses_group_flag() {
        let code = BASE_INBOX_TYPE | KEY_EXCHANGE_IDENTITY_UPDATE_BIT;
        let meta = MetadataBuilder::new().type_code(code).group(true).build();
        assert_eq!(classify(&meta), SummaryCategory::IdentityUpdate { is_group: true });
        let meta = MetadataBuilder::new().type_code(code).build();
        assert_eq!(classify(&meta), SummaryCategory::IdentityUpdate { is_group: false });
    }

    #[test]
    fn test_bitmask_priority_group_update_over_timer() {
        let code = BASE_INBOX_TYPE | GROUP_UPDATE_BIT | EXPIRATION_TIMER_UPDATE_BIT;
        let meta = MetadataBuilder::new().type_code(code).body("ignored").build();
        assert_eq!(classify(&meta), SummaryCategory::GroupUpdate);
    }

    #[test]
    fn test_bitmask_failed_decrypt_over_legacy() {
        let code = BASE_INBOX_TYPE | ENCRYPTION_REMOTE_BIT | ENCRYPTION_REMOTE_FAILED_BIT;
        let meta = MetadataBuilder::new().type_code(code).build();
        assert_eq!(classify(&meta), SummaryCategory::FailedDecrypt);
    }

    #[test]
    fn test_generic_media_round_trip() {
        let meta = MetadataBuilder::new().type_code(BASE_INBOX_TYPE | SECURE_MESSAGE_BIT).build();
        assert_eq!(classify(&meta), SummaryCategory::GenericMedia);
    }
}
