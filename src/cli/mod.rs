pub mod batch;
pub mod classify;
pub mod summarize;
pub mod templates;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use thread_summary::config::SummaryConfig;
use thread_summary::text::{CatalogTextProvider, TemplateCatalog};
use thread_summary::types::parse_type_code;
use thread_summary::{classify, render, MarkupStyle, ThreadMetadata};

/// Record fields given on the command line.
#[derive(Args, Debug)]
pub struct RecordArgs {
    /// Message type code (decimal or 0x-prefixed hex)
    #[arg(long)]
    pub type_code: String,
    /// Message body
    #[arg(long, default_value = "")]
    pub body: String,
    /// Recipient display name
    #[arg(long)]
    pub recipient: Option<String>,
    /// Recipient is a group
    #[arg(long)]
    pub group: bool,
    /// Disappearing-message timer in milliseconds
    #[arg(long, default_value_t = 0)]
    pub expires_in_ms: u64,
    /// Attachment MIME type
    #[arg(long)]
    pub content_type: Option<String>,
    /// Attachment is a sticker
    #[arg(long)]
    pub sticker: bool,
    /// Attachment is view-once
    #[arg(long)]
    pub revealable: bool,
}

impl RecordArgs {
    pub fn to_metadata(&self) -> Result<ThreadMetadata> {
        Ok(ThreadMetadata {
            type_code: parse_type_code(&self.type_code)?,
            body: self.body.clone(),
            recipient_display_name: self.recipient.clone(),
            is_group_recipient: self.group,
            expires_in_millis: self.expires_in_ms,
            content_type: self.content_type.clone(),
            is_sticker: self.sticker,
            is_revealable: self.revealable,
        })
    }
}

/// How a summary is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markup(MarkupStyle),
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            other => other
                .parse::<MarkupStyle>()
                .map(Self::Markup)
                .map_err(|_| {
                    format!("Unknown format: {}. Use: plain, markdown, ansi, html, json", other)
                }),
        }
    }
}

/// Load config from `path` or the default location.
pub fn load_config(path: Option<&Path>) -> Result<SummaryConfig> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(SummaryConfig::default_path);
    SummaryConfig::load(&path).with_context(|| format!("Failed to load config {}", path.display()))
}

pub fn load_catalog(cfg: &SummaryConfig) -> Result<TemplateCatalog> {
    cfg.catalog().context("Invalid [templates] section in config")
}

/// Summarize one record into a single output line.
pub fn format_record(
    meta: &ThreadMetadata,
    catalog: &TemplateCatalog,
    format: OutputFormat,
) -> Result<String> {
    let provider = CatalogTextProvider::new(catalog, meta.recipient_display_name.as_deref());
    let category = classify(meta);
    let summary = render(&category, &provider);

    match format {
        OutputFormat::Markup(style) => Ok(summary.to_markup(style)),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "category": category.as_str(),
                "text": summary.text(),
                "emphasis": summary.emphasis(),
            });
            serde_json::to_string(&value).context("Failed to encode summary")
        }
    }
}
