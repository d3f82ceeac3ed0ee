//! Template catalog -- built-in English templates plus config overrides.

use std::collections::HashMap;

use super::{has_placeholder, TemplateKey, TextProvider};
use crate::{SummaryError, SummaryResult};

fn english(key: TemplateKey) -> &'static str {
    match key {
        TemplateKey::GroupUpdated => "Group updated",
        TemplateKey::LeftGroup => "Left the group",
        TemplateKey::KeyExchange => "Key exchange message",
        TemplateKey::BadEncrypted => "Bad encrypted message",
        TemplateKey::NoSession => "Message encrypted for non-existing session",
        TemplateKey::SessionReset => "Secure session reset",
        TemplateKey::LegacyProtocol => {
            "Message encrypted with a legacy protocol version that is no longer supported."
        }
        TemplateKey::DraftLabel => "Draft:",
        TemplateKey::Called => "Called",
        TemplateKey::CalledYou => "Called you",
        TemplateKey::MissedCall => "Missed call",
        TemplateKey::Joined => "%s joined",
        TemplateKey::TimerDisabled => "Disappearing messages disabled",
        TemplateKey::TimerUpdated => "Disappearing message time set to %s",
        TemplateKey::SafetyNumberChanged => "Safety number changed",
        TemplateKey::SafetyNumberChangedWith => "Your safety number with %s has changed.",
        TemplateKey::MarkedVerified => "You marked verified",
        TemplateKey::MarkedUnverified => "You marked unverified",
        TemplateKey::CouldNotProcess => "Message could not be processed",
        TemplateKey::Sticker => "Sticker",
        TemplateKey::ViewOncePhoto => "Disappearing photo",
        TemplateKey::ViewOnceVideo => "Disappearing video",
        TemplateKey::MediaMessage => "Media message",
    }
}

/// Complete key -> template table. Always has an entry for every key.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: HashMap<TemplateKey, String>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl TemplateCatalog {
    pub fn english() -> Self {
        let templates = TemplateKey::ALL
            .iter()
            .map(|k| (*k, english(*k).to_string()))
            .collect();
        Self { templates }
    }

    /// English defaults with `overrides` (config key -> text) applied.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> SummaryResult<Self> {
        let mut catalog = Self::english();
        for (name, text) in overrides {
            let key: TemplateKey = name
                .parse()
                .map_err(|_| SummaryError::UnknownTemplate(name.clone()))?;
            if key.takes_placeholder() && !has_placeholder(text) {
                tracing::warn!(
                    key = %key,
                    "Template override has no %s placeholder, substituted value will not be shown"
                );
            }
            catalog.templates.insert(key, text.clone());
        }
        tracing::debug!(overrides = overrides.len(), "Template catalog loaded");
        Ok(catalog)
    }

    pub fn get(&self, key: TemplateKey) -> &str {
        self.templates
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| english(key))
    }

    /// All entries in `TemplateKey::ALL` order.
    pub fn entries(&self) -> impl Iterator<Item = (TemplateKey, &str)> + '_ {
        TemplateKey::ALL.iter().map(move |k| (*k, self.get(*k)))
    }
}

/// `TextProvider` over a catalog for one thread's recipient.
#[derive(Debug, Clone, Copy)]
pub struct CatalogTextProvider<'a> {
    catalog: &'a TemplateCatalog,
    recipient_name: Option<&'a str>,
}

impl<'a> CatalogTextProvider<'a> {
    pub fn new(catalog: &'a TemplateCatalog, recipient_name: Option<&'a str>) -> Self {
        Self {
            catalog,
            recipient_name,
        }
    }
}

impl TextProvider for CatalogTextProvider<'_> {
    fn lookup(&self, key: TemplateKey) -> String {
        self.catalog.get(key).to_string()
    }

    fn resolve_recipient_name(&self) -> String {
        self.recipient_name.unwrap_or_default().to_string()
    }
}
