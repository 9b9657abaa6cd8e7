//! Crisis indicator detection. Informational metadata; never changes routing.

use super::entities::{
    CrisisAssessment, CrisisLevel, EmotionAnalysis, EmotionLabel, RecommendedAction,
};
use rand::Rng;
use rand::seq::SliceRandom;

const HIGH_KEYWORDS: &[&str] = &[
    // suicide
    "suicide",
    "kill myself",
    "end my life",
    "take my life",
    "want to die",
    "ending it all",
    "no point living",
    "better off dead",
    "suicide plan",
    "overdose",
    "hanging",
    "jump off",
    "cut myself deep",
    "razor blade",
    // self-harm
    "hurt myself badly",
    "cut deep",
    "burn myself",
    "harm myself seriously",
    // violence to others
    "kill someone",
    "hurt others",
    "violent thoughts",
    "homicidal",
    // immediate danger
    "gun",
    "pills to overdose",
    "rope to hang",
    "bridge to jump",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "self harm",
    "cut myself",
    "scratch myself",
    "hurt myself",
    "self injury",
    "cutting",
    "burning myself",
    "hitting myself",
    "self mutilation",
    "thoughts of death",
    "wish i was dead",
    "life not worth living",
    "everyone better without me",
    "disappear forever",
    "escape everything",
    "tired of living",
    "give up on life",
    "cant go on",
    "no hope",
    "everything is pointless",
    "nothing matters",
    "too much pain",
    "unbearable",
    "overwhelming sadness",
];

const LOW_KEYWORDS: &[&str] = &[
    "feeling hopeless",
    "very depressed",
    "extremely sad",
    "deeply troubled",
    "crisis",
    "breaking down",
    "falling apart",
    "cant cope",
    "overwhelmed",
    "desperate",
    "panic attack",
    "severe anxiety",
    "mental breakdown",
];

const PROTECTIVE_FACTORS: &[&str] = &[
    "getting help",
    "therapy",
    "counseling",
    "support system",
    "family support",
    "friends care",
    "seeking treatment",
    "medication helping",
    "feeling better",
    "things improving",
    "hope",
    "future plans",
    "goals",
    "looking forward",
];

const EMERGENCY_RESOURCES: &[&str] = &[
    "National Suicide Prevention Lifeline: 988",
    "Crisis Text Line: Text HOME to 741741",
    "Emergency Services: 911",
];

const SUPPORT_RESOURCES: &[&str] = &[
    "SAMHSA National Helpline: 1-800-662-4357",
    "NAMI HelpLine: 1-800-950-6264",
];

const HIGH_RESPONSES: &[&str] = &[
    "I'm very concerned about what you've shared. Your safety is the most important thing right now. Please consider reaching out for immediate help.",
    "What you're going through sounds extremely difficult. You don't have to face this alone - there are people who want to help you right now.",
    "I can hear how much pain you're in. Please know that there are trained professionals available 24/7 who can provide the support you need.",
];

const MEDIUM_RESPONSES: &[&str] = &[
    "I can hear that you're going through a really tough time. It's important to know that these feelings can change, and support is available.",
    "Thank you for sharing something so difficult with me. Have you been able to talk to anyone else about how you're feeling?",
    "It takes courage to express these feelings. While I'm here to listen, I'd also like to make sure you know about some additional resources that might help.",
];

const LOW_RESPONSES: &[&str] = &[
    "I can see that you're struggling right now, and I want you to know that your feelings are valid and understandable.",
    "It sounds like you're going through a challenging time. Sometimes it helps to talk through these feelings with someone.",
    "I'm here to listen and support you. How long have you been feeling this way?",
];

const NO_CRISIS_RESPONSES: &[&str] = &[
    "Thank you for sharing that with me. How are you feeling about the situation?",
    "I appreciate you opening up. What would be most helpful for you right now?",
    "I'm here to listen and support you. What else is on your mind?",
];

/// Minimum emotion confidence that lifts a sad/anxious message to `Low`.
const EMOTION_ESCALATION_CONFIDENCE: f32 = 0.8;

fn find_matches(text: &str, keywords: &[&'static str]) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|k| text.contains(k))
        .collect()
}

pub fn recommended_action(level: CrisisLevel) -> RecommendedAction {
    match level {
        CrisisLevel::High => RecommendedAction::ImmediateIntervention,
        CrisisLevel::Medium => RecommendedAction::UrgentSupport,
        CrisisLevel::Low => RecommendedAction::SupportiveResources,
        CrisisLevel::None => RecommendedAction::ContinueConversation,
    }
}

pub fn emergency_resources(level: CrisisLevel) -> Vec<&'static str> {
    match level {
        CrisisLevel::High => EMERGENCY_RESOURCES.to_vec(),
        CrisisLevel::Medium => EMERGENCY_RESOURCES
            .iter()
            .chain(SUPPORT_RESOURCES)
            .copied()
            .collect(),
        CrisisLevel::Low => SUPPORT_RESOURCES.to_vec(),
        CrisisLevel::None => Vec::new(),
    }
}

/// Supportive sentences for a crisis level. Never empty.
pub fn crisis_responses(level: CrisisLevel) -> &'static [&'static str] {
    match level {
        CrisisLevel::High => HIGH_RESPONSES,
        CrisisLevel::Medium => MEDIUM_RESPONSES,
        CrisisLevel::Low => LOW_RESPONSES,
        CrisisLevel::None => NO_CRISIS_RESPONSES,
    }
}

/// Pick a supportive sentence for `level`.
pub fn crisis_response<R: Rng + ?Sized>(level: CrisisLevel, rng: &mut R) -> &'static str {
    let pool = crisis_responses(level);
    pool.choose(rng).copied().unwrap_or(NO_CRISIS_RESPONSES[0])
}

/// Scan `text` for crisis indicators.
///
/// Level is the highest severity with a match. A sad or anxious emotion
/// reading lifts `None` to `Low`; protective factors lower the level one step
/// (never below `Low`).
pub fn assess_crisis(text: &str, emotion: Option<&EmotionAnalysis>) -> CrisisAssessment {
    let text = text.to_lowercase();

    let high = find_matches(&text, HIGH_KEYWORDS);
    let medium = find_matches(&text, MEDIUM_KEYWORDS);
    let low = find_matches(&text, LOW_KEYWORDS);
    let protective_factors = find_matches(&text, PROTECTIVE_FACTORS);

    let mut level = if !high.is_empty() {
        CrisisLevel::High
    } else if !medium.is_empty() {
        CrisisLevel::Medium
    } else if !low.is_empty() {
        CrisisLevel::Low
    } else {
        CrisisLevel::None
    };

    if let Some(analysis) = emotion {
        let distressed = matches!(
            analysis.emotion,
            EmotionLabel::Sadness | EmotionLabel::Anxiety
        );
        if level == CrisisLevel::None
            && distressed
            && analysis.confidence > EMOTION_ESCALATION_CONFIDENCE
        {
            level = CrisisLevel::Low;
        }
    }

    if !protective_factors.is_empty() {
        level = match level {
            CrisisLevel::High => CrisisLevel::Medium,
            CrisisLevel::Medium => CrisisLevel::Low,
            other => other,
        };
    }

    let triggers = high.into_iter().chain(medium).chain(low).collect();

    CrisisAssessment {
        level,
        triggers,
        protective_factors,
        immediate_risk: level == CrisisLevel::High,
        recommended_action: recommended_action(level),
        resources: emergency_resources(level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::analyze_emotion;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_high_severity() {
        let a = assess_crisis("I want to die", None);
        assert_eq!(a.level, CrisisLevel::High);
        assert!(a.immediate_risk);
        assert_eq!(a.recommended_action, RecommendedAction::ImmediateIntervention);
        assert_eq!(a.triggers, vec!["want to die"]);
        assert_eq!(a.resources.len(), 3);
    }

    #[test]
    fn test_protective_factor_lowers_level() {
        let a = assess_crisis("I want to die but I am getting help", None);
        assert_eq!(a.level, CrisisLevel::Medium);
        assert!(!a.immediate_risk);
        assert_eq!(a.protective_factors, vec!["getting help"]);
        assert_eq!(a.resources.len(), 5);
    }

    #[test]
    fn test_low_is_floor_for_protective_factors() {
        let a = assess_crisis("I'm overwhelmed, but therapy is going ok", None);
        assert_eq!(a.level, CrisisLevel::Low);
        assert_eq!(a.recommended_action, RecommendedAction::SupportiveResources);
    }

    #[test]
    fn test_emotion_lifts_none_to_low() {
        let analysis = analyze_emotion("I'm sad today");
        assert_eq!(assess_crisis("I'm sad today", None).level, CrisisLevel::None);
        let a = assess_crisis("I'm sad today", Some(&analysis));
        assert_eq!(a.level, CrisisLevel::Low);
        assert!(a.triggers.is_empty());
    }

    #[test]
    fn test_crisis_response_comes_from_level_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        for level in [
            CrisisLevel::High,
            CrisisLevel::Medium,
            CrisisLevel::Low,
            CrisisLevel::None,
        ] {
            assert_eq!(crisis_responses(level).len(), 3);
            for _ in 0..10 {
                let reply = crisis_response(level, &mut rng);
                assert!(crisis_responses(level).contains(&reply), "{level:?}: {reply:?}");
            }
        }
        assert!(!HIGH_RESPONSES.iter().any(|r| MEDIUM_RESPONSES.contains(r)));
    }

    #[test]
    fn test_calm_message_has_no_crisis() {
        let a = assess_crisis("Lovely walk in the park", Some(&analyze_emotion("Lovely walk")));
        assert!(!a.detected());
        assert_eq!(a.recommended_action, RecommendedAction::ContinueConversation);
        assert!(a.resources.is_empty());
    }
}
