//! End-to-end scenarios through ChatService with a scripted delegate.

use mindchat::adapters::ai::{MockBehavior, MockGenerationAdapter};
use mindchat::domain::errors::{GENERIC_ERROR_REPLY, TRANSPORT_ERROR_REPLY};
use mindchat::domain::fallback::{Topic, pool};
use mindchat::domain::{
    EmotionLabel, GenerationError, MediaCategory, MediaIntentSignal, MediaLibrary, MediaType,
    RandomSource, Reply, ReplySource,
};
use mindchat::ports::GenerationPort;
use mindchat::usecases::{ChatService, ResponseOrchestrator};
use std::sync::Arc;

fn service_with(mock: &Arc<MockGenerationAdapter>) -> ChatService {
    let generator: Arc<dyn GenerationPort> = mock.clone();
    ChatService::new(
        ResponseOrchestrator::new(Some(generator)),
        MediaLibrary::builtin(),
    )
}

fn offline_service() -> ChatService {
    ChatService::new(ResponseOrchestrator::new(None), MediaLibrary::builtin())
}

#[tokio::test]
async fn relaxing_music_is_media_without_generation() {
    let mock = Arc::new(MockGenerationAdapter::replying("unused"));
    let svc = service_with(&mock);

    let out = svc.send_message("play some relaxing music").await.unwrap();

    let signal = out.reply.media().expect("media reply");
    assert_eq!(signal.category, MediaCategory::Relaxation);
    assert_eq!(signal.media_type, MediaType::Audio);
    let item = out.suggested_media.expect("catalog item");
    assert_eq!(item.category, MediaCategory::Relaxation);
    assert_eq!(item.media_type, MediaType::Audio);
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn media_marker_round_trips_through_wire_string() {
    let out = offline_service()
        .send_message("I want to watch the ocean")
        .await
        .unwrap();

    let wire = out.reply.to_wire_string();
    assert!(wire.starts_with("MEDIA_SUGGESTION:nature:video:"));
    let parsed = MediaIntentSignal::parse_marker(&wire).unwrap();
    assert_eq!(Some(&parsed), out.reply.media());
}

#[tokio::test]
async fn anxious_message_without_generation_uses_anxiety_pool() {
    let out = offline_service()
        .send_message("I feel so anxious today")
        .await
        .unwrap();

    assert_eq!(out.emotion, EmotionLabel::Anxiety);
    match out.reply {
        Reply::Text(reply) => {
            assert_eq!(reply.source, ReplySource::Fallback);
            assert!(pool(Topic::Anxiety).contains(&reply.text.as_str()));
        }
        Reply::Media(m) => panic!("unexpected media reply {m:?}"),
    }
}

#[tokio::test]
async fn joke_goes_to_generation_when_available() {
    let mock = Arc::new(MockGenerationAdapter::replying("A generated joke."));
    let out = service_with(&mock).send_message("tell me a joke").await.unwrap();

    assert_eq!(out.reply.text(), "A generated joke.");
    assert_eq!(mock.calls(), 1);
    let prompt = mock.last_prompt().unwrap();
    assert_eq!(prompt.user_prompt, "tell me a joke");
    assert!(prompt.system_prompt.contains("tell me a joke"));
}

#[tokio::test]
async fn joke_under_quota_uses_canned_jokes() {
    let mock = Arc::new(MockGenerationAdapter::failing(
        GenerationError::QuotaExceeded("insufficient_quota".into()),
    ));
    let svc = service_with(&mock);

    for _ in 0..10 {
        let out = svc.send_message("tell me a joke").await.unwrap();
        let text = out.reply.text();
        assert!(pool(Topic::Joke).contains(&text));
        assert_ne!(text, TRANSPORT_ERROR_REPLY);
        assert!(
            ["make up everything", "looked surprised", "outstanding in his field"]
                .iter()
                .any(|punchline| text.contains(punchline))
        );
    }
    assert_eq!(mock.calls(), 10);
}

#[tokio::test]
async fn unconfigured_delegate_always_answers() {
    let svc = offline_service();
    for message in ["hello", "zzz", "I'm so upset", "I am furious", "great news!", "?"] {
        let out = svc.send_message(message).await.unwrap();
        assert!(!out.reply.text().is_empty(), "empty reply for {message:?}");
    }
}

#[tokio::test]
async fn panicking_delegate_yields_generic_reply() {
    let mock = Arc::new(MockGenerationAdapter::new(MockBehavior::Panic));
    let out = service_with(&mock).send_message("how are you").await.unwrap();

    assert_eq!(out.reply.text(), GENERIC_ERROR_REPLY);
}

#[tokio::test]
async fn seeded_sessions_repeat() {
    let build = || {
        ChatService::new(
            ResponseOrchestrator::new(None).with_random_source(RandomSource::Seeded(11)),
            MediaLibrary::builtin(),
        )
    };
    let a = build().send_message("show me something").await.unwrap();
    let b = build().send_message("show me something").await.unwrap();

    assert_eq!(a.reply, b.reply);
    assert_eq!(
        a.suggested_media.map(|m| m.id),
        b.suggested_media.map(|m| m.id)
    );
}

#[tokio::test]
async fn reply_serializes_for_the_boundary() {
    let out = offline_service().send_message("hello").await.unwrap();
    let json = serde_json::to_value(&out).unwrap();

    assert_eq!(json["reply"]["kind"], "text");
    assert_eq!(json["reply"]["source"], "fallback");
    assert_eq!(json["emotion"], "neutral");
    assert_eq!(json["crisis"]["level"], "none");
    assert!(json["timestamp"].is_string());
}
