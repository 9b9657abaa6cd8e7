//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/UI types here. Adapters map their payloads into these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the legacy string encoding of a media suggestion.
pub const MEDIA_MARKER_PREFIX: &str = "MEDIA_SUGGESTION";

/// Curated media category requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Relaxation,
    Meditation,
    Nature,
    Music,
    Therapy,
    /// A media request with no recognisable category.
    #[serde(rename = "none")]
    Unspecified,
}

impl MediaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Relaxation => "relaxation",
            MediaCategory::Meditation => "meditation",
            MediaCategory::Nature => "nature",
            MediaCategory::Music => "music",
            MediaCategory::Therapy => "therapy",
            MediaCategory::Unspecified => "none",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "relaxation" => Some(MediaCategory::Relaxation),
            "meditation" => Some(MediaCategory::Meditation),
            "nature" => Some(MediaCategory::Nature),
            "music" => Some(MediaCategory::Music),
            "therapy" => Some(MediaCategory::Therapy),
            "none" => Some(MediaCategory::Unspecified),
            _ => None,
        }
    }
}

impl fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preferred media format. Catalog items are always `Audio` or `Video`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Audio,
    Any,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Audio => "audio",
            MediaType::Any => "any",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "video" => Some(MediaType::Video),
            "audio" => Some(MediaType::Audio),
            "any" => Some(MediaType::Any),
            _ => None,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected request for curated media. Short-circuits text generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaIntentSignal {
    /// True detected category; `Unspecified` when only a verb or type keyword matched.
    pub category: MediaCategory,
    pub media_type: MediaType,
    pub suggested_text: String,
}

impl MediaIntentSignal {
    /// Category the consumer should pull media from. Defaults to relaxation.
    pub fn marker_category(&self) -> MediaCategory {
        match self.category {
            MediaCategory::Unspecified => MediaCategory::Relaxation,
            other => other,
        }
    }

    /// Legacy `MEDIA_SUGGESTION:<category>:<type>:<text>` encoding.
    pub fn to_marker(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            MEDIA_MARKER_PREFIX,
            self.marker_category(),
            self.media_type,
            self.suggested_text
        )
    }

    /// Parse the legacy encoding. The text part may itself contain `:`.
    pub fn parse_marker(raw: &str) -> Option<Self> {
        let rest = raw
            .strip_prefix(MEDIA_MARKER_PREFIX)?
            .strip_prefix(':')?;
        let mut parts = rest.splitn(3, ':');
        let category = MediaCategory::parse(parts.next()?)?;
        let media_type = MediaType::parse(parts.next()?)?;
        let suggested_text = parts.next()?.to_string();
        Some(Self {
            category,
            media_type,
            suggested_text,
        })
    }
}

/// Coarse emotion tag. Exactly one per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Sadness,
    Anxiety,
    Anger,
    Joy,
    Fear,
    Neutral,
}

impl EmotionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Sadness => "sadness",
            EmotionLabel::Anxiety => "anxiety",
            EmotionLabel::Anger => "anger",
            EmotionLabel::Joy => "joy",
            EmotionLabel::Fear => "fear",
            EmotionLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of emotion analysis on arbitrary text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    pub emotion: EmotionLabel,
    pub confidence: f32,
    pub text: String,
}

/// Where a text reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// External generation service.
    External,
    /// Rule-based topic pools.
    Fallback,
    /// Fixed placeholder after an empty completion or a hard error.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReply {
    pub text: String,
    pub source: ReplySource,
}

impl GeneratedReply {
    pub fn external(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::External,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Fallback,
        }
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: ReplySource::Placeholder,
        }
    }
}

/// Final answer of the response pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Media(MediaIntentSignal),
    Text(GeneratedReply),
}

impl Reply {
    /// Human-readable reply text.
    pub fn text(&self) -> &str {
        match self {
            Reply::Media(signal) => &signal.suggested_text,
            Reply::Text(reply) => &reply.text,
        }
    }

    pub fn media(&self) -> Option<&MediaIntentSignal> {
        match self {
            Reply::Media(signal) => Some(signal),
            Reply::Text(_) => None,
        }
    }

    /// Reply as a single string, media suggestions in the legacy marker form.
    pub fn to_wire_string(&self) -> String {
        match self {
            Reply::Media(signal) => signal.to_marker(),
            Reply::Text(reply) => reply.text.clone(),
        }
    }
}

/// System + user prompt pair sent to the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// One curated media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub category: MediaCategory,
    pub url: &'static str,
    pub thumbnail: Option<&'static str>,
    pub duration_secs: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrisisLevel {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    ImmediateIntervention,
    UrgentSupport,
    SupportiveResources,
    ContinueConversation,
}

/// Crisis indicators found in a message. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisAssessment {
    pub level: CrisisLevel,
    pub triggers: Vec<&'static str>,
    pub protective_factors: Vec<&'static str>,
    pub immediate_risk: bool,
    pub recommended_action: RecommendedAction,
    pub resources: Vec<&'static str>,
}

impl CrisisAssessment {
    pub fn detected(&self) -> bool {
        self.level != CrisisLevel::None
    }
}

/// Everything the boundary returns for one user message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub reply: Reply,
    pub emotion: EmotionLabel,
    pub crisis: CrisisAssessment,
    /// Supportive sentence shown alongside the resources when a crisis is detected.
    pub crisis_message: Option<&'static str>,
    pub suggested_media: Option<MediaItem>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
