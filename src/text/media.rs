/// Decides which view-once template a content type gets.
pub trait MediaTypes: Send + Sync {
    fn is_video(&self, content_type: Option<&str>) -> bool;
}

/// MIME-prefix check. Absent or unparseable types are not video.
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeMediaTypes;

impl MediaTypes for MimeMediaTypes {
    fn is_video(&self, content_type: Option<&str>) -> bool {
        content_type
            .map(|ct| ct.trim().to_ascii_lowercase().starts_with("video/"))
            .unwrap_or(false)
    }
}
