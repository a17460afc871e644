//! End-to-end chat flows over the canned responder.

use std::sync::Arc;

use oneiro_application::ChatUseCase;
use oneiro_core::chat::{ChatStore, MessageRole};
use oneiro_core::config::ChatConfig;
use oneiro_core::responder::{Locale, ReplyCategory, response_text};
use oneiro_core::user::DefaultUserProfileService;
use oneiro_infrastructure::MockInsightService;

fn usecase() -> ChatUseCase {
    ChatUseCase::with_components(
        ChatStore::with_config(ChatConfig::instant()),
        Arc::new(DefaultUserProfileService),
        Arc::new(MockInsightService::instant()),
    )
}

#[tokio::test]
async fn a_conversation_turn_adds_a_user_and_an_assistant_message() {
    let chat = usecase();
    chat.start_session(None).await;

    chat.converse("I was flying last night", Some("dream-1".to_string()), None)
        .await;

    let session = chat.store().current_session().await.unwrap();
    assert_eq!(session.messages.len(), 3);
    assert_eq!(session.messages[1].role, MessageRole::User);
    assert_eq!(
        session.messages[2].content,
        response_text(Locale::En, ReplyCategory::Flying)
    );
}

#[tokio::test]
async fn locale_tags_select_the_reply_language() {
    let chat = usecase();
    chat.start_session(None).await;

    chat.converse("rüyamda su vardı", None, Some("tr")).await;
    let session = chat.store().current_session().await.unwrap();
    assert_eq!(
        session.messages[2].content,
        response_text(Locale::Tr, ReplyCategory::Water)
    );

    // Unknown tags fall back to English.
    chat.converse("deep water again", None, Some("de")).await;
    let session = chat.store().current_session().await.unwrap();
    assert_eq!(
        session.messages[4].content,
        response_text(Locale::En, ReplyCategory::Water)
    );
}

#[tokio::test]
async fn the_profile_locale_applies_when_no_tag_is_given() {
    let chat = usecase();
    chat.start_session(None).await;

    chat.converse("nothing notable", None, None).await;
    let session = chat.store().current_session().await.unwrap();
    assert_eq!(
        session.messages[2].content,
        response_text(Locale::En, ReplyCategory::Generic)
    );
}

#[tokio::test]
async fn direct_insight_requests_bypass_the_session() {
    let chat = usecase();

    let reply = chat
        .request_insight("a shadow chased me", Some("en"))
        .await
        .unwrap();
    assert_eq!(reply, response_text(Locale::En, ReplyCategory::Chase));
    // No session was touched.
    assert!(chat.store().sessions().await.is_empty());
}

#[tokio::test]
async fn recents_follow_activity_order() {
    let chat = usecase();
    let first = chat.start_session(Some("first".to_string())).await;
    std::thread::sleep(std::time::Duration::from_millis(2));
    chat.start_session(Some("second".to_string())).await;

    std::thread::sleep(std::time::Duration::from_millis(2));
    chat.store().set_current_session(Some(first.clone())).await;
    chat.converse("back to the first thread", None, None).await;

    let recents = chat.recent_sessions(Some(10)).await;
    assert_eq!(recents[0].id, first.id);
    assert_eq!(recents.len(), 2);
}
