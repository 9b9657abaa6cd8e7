//! Keyword classifier: media-request detection and emotion tagging.
//!
//! Matching is plain substring containment on the lower-cased input. No
//! tokenizing, no stemming: "hear" matches inside "heart" and that is accepted.

use super::entities::{EmotionAnalysis, EmotionLabel, MediaCategory, MediaIntentSignal, MediaType};

/// Fixed confidence reported by [`analyze_emotion`]; the keyword table is not calibrated.
pub const EMOTION_CONFIDENCE: f32 = 0.85;

/// Verbs that mark a message as a media request on their own.
const MEDIA_VERBS: &[&str] = &["play", "show", "listen", "watch", "start"];

/// Category keyword sets in declaration order. First match wins.
const CATEGORY_KEYWORDS: &[(MediaCategory, &[&str])] = &[
    (
        MediaCategory::Relaxation,
        &["relax", "relaxing", "calm", "peaceful", "stress relief", "unwind"],
    ),
    (
        MediaCategory::Meditation,
        &["meditate", "meditation", "mindfulness", "breathing", "center"],
    ),
    (
        MediaCategory::Nature,
        &["nature", "forest", "ocean", "rain", "birds", "water", "natural"],
    ),
    (
        MediaCategory::Music,
        &["music", "song", "play music", "melody", "tune"],
    ),
    (
        MediaCategory::Therapy,
        &["anxiety", "depression", "sleep", "insomnia", "therapy", "therapeutic"],
    ),
];

// Type keywords never select a category; they only bias the media type.
const VIDEO_KEYWORDS: &[&str] = &["video", "watch", "show me", "play video"];
const AUDIO_KEYWORDS: &[&str] = &["audio", "sound", "listen", "hear"];
const MUSIC_KEYWORDS: &[&str] = &["music", "song", "play music", "melody", "tune"];

const GENERIC_MEDIA_TEXT: &str = "I'd love to help you with some wellness content! Let me suggest something that might be perfect for how you're feeling right now! ✨";

/// Emotion keyword sets in priority order. First match wins.
const EMOTION_KEYWORDS: &[(EmotionLabel, &[&str])] = &[
    (
        EmotionLabel::Sadness,
        &["sad", "depressed", "down", "upset", "cry"],
    ),
    (
        EmotionLabel::Anxiety,
        &["anxious", "anxiety", "worried", "stress", "nervous"],
    ),
    (EmotionLabel::Anger, &["angry", "mad", "furious", "irritated"]),
    (
        EmotionLabel::Joy,
        &["happy", "joy", "excited", "great", "wonderful"],
    ),
    (EmotionLabel::Fear, &["scared", "afraid", "fear", "terrified"]),
];

pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Template sentence for a media reply. `Unspecified` gets the generic sentence.
pub fn media_template(category: MediaCategory) -> &'static str {
    match category {
        MediaCategory::Relaxation => {
            "Of course! I have some wonderful relaxing content that might help you unwind. Let me suggest something perfect for you! 🎵"
        }
        MediaCategory::Meditation => {
            "That's a great idea! Meditation can be so helpful. I have some guided meditation content that you might enjoy. Let me share something calming with you! 🧘‍♀️"
        }
        MediaCategory::Nature => {
            "Nature sounds are so soothing! I have some beautiful nature content that can help you feel more connected and peaceful. Let me play something for you! 🌿"
        }
        MediaCategory::Music => {
            "Music is such a wonderful way to lift your spirits! I have some lovely, calming music that might be just what you need. Let me play something for you! 🎶"
        }
        MediaCategory::Therapy => {
            "I understand you're looking for something therapeutic. I have some specially selected content designed to help with relaxation and wellness. Let me suggest something that might help! 💙"
        }
        MediaCategory::Unspecified => GENERIC_MEDIA_TEXT,
    }
}

/// Detect a request for curated media.
///
/// Returns `None` unless a media verb, a category keyword, a video keyword or
/// an audio/music keyword is present.
pub fn classify_media(text: &str) -> Option<MediaIntentSignal> {
    let text = text.to_lowercase();

    let has_verb = contains_any(&text, MEDIA_VERBS);
    let category = CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map(|(category, _)| *category);
    let wants_video = contains_any(&text, VIDEO_KEYWORDS);
    let wants_audio = contains_any(&text, AUDIO_KEYWORDS) || contains_any(&text, MUSIC_KEYWORDS);

    if !(has_verb || category.is_some() || wants_video || wants_audio) {
        return None;
    }

    let media_type = if wants_video {
        MediaType::Video
    } else if wants_audio {
        MediaType::Audio
    } else {
        MediaType::Any
    };
    let category = category.unwrap_or(MediaCategory::Unspecified);

    Some(MediaIntentSignal {
        category,
        media_type,
        suggested_text: media_template(category).to_string(),
    })
}

/// Tag the message with exactly one emotion. No match yields `Neutral`.
pub fn classify_emotion(text: &str) -> EmotionLabel {
    let text = text.to_lowercase();
    EMOTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map(|(label, _)| *label)
        .unwrap_or(EmotionLabel::Neutral)
}

pub fn analyze_emotion(text: &str) -> EmotionAnalysis {
    EmotionAnalysis {
        emotion: classify_emotion(text),
        confidence: EMOTION_CONFIDENCE,
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relaxing_music_is_relaxation_audio() {
        let signal = classify_media("play some relaxing music").unwrap();
        assert_eq!(signal.category, MediaCategory::Relaxation);
        assert_eq!(signal.media_type, MediaType::Audio);
        assert_eq!(signal.suggested_text, media_template(MediaCategory::Relaxation));
    }

    #[test]
    fn test_video_keyword_wins_over_audio() {
        let signal = classify_media("Show me a video with ocean sounds").unwrap();
        assert_eq!(signal.category, MediaCategory::Nature);
        assert_eq!(signal.media_type, MediaType::Video);
    }

    #[test]
    fn test_verb_only_reports_unspecified_category() {
        let signal = classify_media("start").unwrap();
        assert_eq!(signal.category, MediaCategory::Unspecified);
        assert_eq!(signal.media_type, MediaType::Any);
        assert_eq!(signal.marker_category(), MediaCategory::Relaxation);
        assert_eq!(signal.suggested_text, GENERIC_MEDIA_TEXT);
    }

    #[test]
    fn test_type_keyword_alone_is_media_request() {
        let signal = classify_media("any audio?").unwrap();
        assert_eq!(signal.category, MediaCategory::Unspecified);
        assert_eq!(signal.media_type, MediaType::Audio);
    }

    #[test]
    fn test_category_order_breaks_ties() {
        // "meditation" and "therapy" both match; meditation is declared first.
        let signal = classify_media("meditation for insomnia").unwrap();
        assert_eq!(signal.category, MediaCategory::Meditation);
    }

    #[test]
    fn test_plain_chat_is_not_media() {
        assert!(classify_media("I feel so anxious today").is_none());
        assert!(classify_media("tell me a joke").is_none());
    }

    #[test]
    fn test_emotion_priority_order() {
        assert_eq!(classify_emotion("I'm sad and anxious"), EmotionLabel::Sadness);
        assert_eq!(classify_emotion("worried and furious"), EmotionLabel::Anxiety);
        assert_eq!(classify_emotion("so MAD, not scared"), EmotionLabel::Anger);
        assert_eq!(classify_emotion("happy but afraid"), EmotionLabel::Joy);
        assert_eq!(classify_emotion("terrified"), EmotionLabel::Fear);
    }

    #[test]
    fn test_emotion_neutral_when_nothing_matches() {
        assert_eq!(classify_emotion("what's the time"), EmotionLabel::Neutral);
        assert_eq!(classify_emotion(""), EmotionLabel::Neutral);
    }

    #[test]
    fn test_anxious_today() {
        assert_eq!(classify_emotion("I feel so anxious today"), EmotionLabel::Anxiety);
    }

    #[test]
    fn test_analyze_emotion_fixed_confidence() {
        let analysis = analyze_emotion("I am terrified");
        assert_eq!(analysis.emotion, EmotionLabel::Fear);
        assert_eq!(analysis.confidence, EMOTION_CONFIDENCE);
        assert_eq!(analysis.text, "I am terrified");
    }
}
