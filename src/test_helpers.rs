//! Shared test utilities -- metadata builder, synthetic decoder, fixed-text provider.
//!
//! Available only under `#[cfg(test)]`.

use std::collections::{HashMap, HashSet};

use crate::text::{TemplateKey, TextProvider};
use crate::thread::ThreadMetadata;
use crate::types::MessageTypes;

// ============================================================================
// MetadataBuilder
// ============================================================================

pub struct MetadataBuilder {
    meta: ThreadMetadata,
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self {
            meta: ThreadMetadata::default(),
        }
    }

    pub fn type_code(mut self, code: u64) -> Self {
        self.meta.type_code = code;
        self
    }

    pub fn body(mut self, b: &str) -> Self {
        self.meta.body = b.to_string();
        self
    }

    pub fn recipient(mut self, name: &str) -> Self {
        self.meta.recipient_display_name = Some(name.to_string());
        self
    }

    pub fn group(mut self, g: bool) -> Self {
        self.meta.is_group_recipient = g;
        self
    }

    pub fn expires_in_millis(mut self, ms: u64) -> Self {
        self.meta.expires_in_millis = ms;
        self
    }

    pub fn content_type(mut self, ct: &str) -> Self {
        self.meta.content_type = Some(ct.to_string());
        self
    }

    pub fn sticker(mut self, s: bool) -> Self {
        self.meta.is_sticker = s;
        self
    }

    pub fn revealable(mut self, r: bool) -> Self {
        self.meta.is_revealable = r;
        self
    }

    pub fn build(self) -> ThreadMetadata {
        self.meta
    }
}

// ============================================================================
// FlagTypes
// ============================================================================

/// Decoder whose predicates are switched on by rule name, ignoring the code.
pub struct FlagTypes {
    on: HashSet<String>,
}

impl FlagTypes {
    pub fn none() -> Self {
        Self { on: HashSet::new() }
    }

    pub fn with(names: &[&str]) -> Self {
        Self {
            on: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    fn is(&self, name: &str) -> bool {
        self.on.contains(name)
    }
}

impl MessageTypes for FlagTypes {
    fn is_group_update(&self, _: u64) -> bool {
        self.is("group_update")
    }
    fn is_group_quit(&self, _: u64) -> bool {
        self.is("group_quit")
    }
    fn is_key_exchange(&self, _: u64) -> bool {
        self.is("key_exchange")
    }
    fn is_failed_decrypt(&self, _: u64) -> bool {
        self.is("failed_decrypt")
    }
    fn is_no_remote_session(&self, _: u64) -> bool {
        self.is("no_remote_session")
    }
    fn is_end_session(&self, _: u64) -> bool {
        self.is("end_session")
    }
    fn is_legacy(&self, _: u64) -> bool {
        self.is("legacy")
    }
    fn is_draft(&self, _: u64) -> bool {
        self.is("draft")
    }
    fn is_outgoing_call(&self, _: u64) -> bool {
        self.is("outgoing_call")
    }
    fn is_incoming_call(&self, _: u64) -> bool {
        self.is("incoming_call")
    }
    fn is_missed_call(&self, _: u64) -> bool {
        self.is("missed_call")
    }
    fn is_joined(&self, _: u64) -> bool {
        self.is("joined")
    }
    fn is_expiration_timer_update(&self, _: u64) -> bool {
        self.is("expiration_timer_update")
    }
    fn is_identity_update(&self, _: u64) -> bool {
        self.is("identity_update")
    }
    fn is_identity_verified(&self, _: u64) -> bool {
        self.is("identity_verified")
    }
    fn is_identity_default(&self, _: u64) -> bool {
        self.is("identity_default")
    }
    fn is_unsupported_message(&self, _: u64) -> bool {
        self.is("unsupported_message")
    }
}

// ============================================================================
// FixedTextProvider
// ============================================================================

/// Provider with explicit templates; unset keys return the key name.
pub struct FixedTextProvider {
    templates: HashMap<TemplateKey, String>,
    recipient: Option<String>,
}

impl FixedTextProvider {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            recipient: None,
        }
    }

    pub fn template(mut self, key: TemplateKey, text: &str) -> Self {
        self.templates.insert(key, text.to_string());
        self
    }

    pub fn recipient(mut self, name: &str) -> Self {
        self.recipient = Some(name.to_string());
        self
    }
}

impl TextProvider for FixedTextProvider {
    fn lookup(&self, key: TemplateKey) -> String {
        self.templates
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.as_str().to_string())
    }

    fn resolve_recipient_name(&self) -> String {
        self.recipient.clone().unwrap_or_default()
    }
}
