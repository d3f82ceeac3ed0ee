//! Renderer -- turn a summary category into styled text.
//!
//! Every category except `PlainBody` is emphasized. Drafts emphasize only
//! the label in front of the body; all others emphasize the whole line.

use crate::category::SummaryCategory;
use crate::classifier::{classify, Classifier};
use crate::styled::StyledSummary;
use crate::text::{
    fill_placeholder, DurationFormatter, ExpirationDurations, MediaTypes, MimeMediaTypes,
    TemplateKey, TextProvider,
};
use crate::thread::ThreadMetadata;
use crate::types::MessageTypes;

pub struct Renderer<D: DurationFormatter = ExpirationDurations, M: MediaTypes = MimeMediaTypes> {
    durations: D,
    media: M,
}

impl Default for Renderer<ExpirationDurations, MimeMediaTypes> {
    fn default() -> Self {
        Self::new(ExpirationDurations, MimeMediaTypes)
    }
}

impl<D: DurationFormatter, M: MediaTypes> Renderer<D, M> {
    pub fn new(durations: D, media: M) -> Self {
        Self { durations, media }
    }

    /// Total: every category renders, missing inputs degrade to defaults.
    pub fn render(&self, category: &SummaryCategory, provider: &dyn TextProvider) -> StyledSummary {
        let key = match category {
            SummaryCategory::PlainBody(body) => return StyledSummary::plain(body.clone()),
            SummaryCategory::Draft(body) => {
                let label = provider.lookup(TemplateKey::DraftLabel);
                let label_len = label.chars().count();
                return StyledSummary::emphasized_prefix(format!("{} {}", label, body), label_len);
            }
            SummaryCategory::Joined => {
                let name = provider.resolve_recipient_name();
                let template = provider.lookup(TemplateKey::Joined);
                return StyledSummary::emphasized(fill_placeholder(&template, &name));
            }
            SummaryCategory::IdentityUpdate { is_group: false } => {
                let name = provider.resolve_recipient_name();
                let template = provider.lookup(TemplateKey::SafetyNumberChangedWith);
                return StyledSummary::emphasized(fill_placeholder(&template, &name));
            }
            SummaryCategory::ExpirationTimerUpdate(seconds) if *seconds > 0 => {
                let time = self.durations.format(*seconds);
                let template = provider.lookup(TemplateKey::TimerUpdated);
                return StyledSummary::emphasized(fill_placeholder(&template, &time));
            }
            SummaryCategory::RevealableMedia(content_type) => {
                if self.media.is_video(content_type.as_deref()) {
                    TemplateKey::ViewOnceVideo
                } else {
                    TemplateKey::ViewOncePhoto
                }
            }
            SummaryCategory::ExpirationTimerUpdate(_) => TemplateKey::TimerDisabled,
            SummaryCategory::IdentityUpdate { is_group: true } => TemplateKey::SafetyNumberChanged,
            SummaryCategory::GroupUpdate => TemplateKey::GroupUpdated,
            SummaryCategory::GroupQuit => TemplateKey::LeftGroup,
            SummaryCategory::KeyExchange => TemplateKey::KeyExchange,
            SummaryCategory::FailedDecrypt => TemplateKey::BadEncrypted,
            SummaryCategory::NoRemoteSession => TemplateKey::NoSession,
            SummaryCategory::EndSession => TemplateKey::SessionReset,
            SummaryCategory::LegacyType => TemplateKey::LegacyProtocol,
            SummaryCategory::OutgoingCall => TemplateKey::Called,
            SummaryCategory::IncomingCall => TemplateKey::CalledYou,
            SummaryCategory::MissedCall => TemplateKey::MissedCall,
            SummaryCategory::IdentityVerified => TemplateKey::MarkedVerified,
            SummaryCategory::IdentityDefault => TemplateKey::MarkedUnverified,
            SummaryCategory::UnsupportedMessage => TemplateKey::CouldNotProcess,
            SummaryCategory::StickerMedia => TemplateKey::Sticker,
            SummaryCategory::GenericMedia => TemplateKey::MediaMessage,
        };
        tracing::trace!(
            category = category.as_str(),
            template = key.as_str(),
            "Rendered fixed template"
        );
        StyledSummary::emphasized(provider.lookup(key))
    }

    /// Classify with `classifier`, then render.
    pub fn summarize<T: MessageTypes>(
        &self,
        classifier: &Classifier<T>,
        meta: &ThreadMetadata,
        provider: &dyn TextProvider,
    ) -> StyledSummary {
        self.render(&classifier.classify(meta), provider)
    }
}

/// Render with the reference duration and media-type collaborators.
pub fn render(category: &SummaryCategory, provider: &dyn TextProvider) -> StyledSummary {
    Renderer::<ExpirationDurations, MimeMediaTypes>::default().render(category, provider)
}

/// Classify then render.
pub fn summarize(meta: &ThreadMetadata, provider: &dyn TextProvider) -> StyledSummary {
    render(&classify(meta), provider)
}
