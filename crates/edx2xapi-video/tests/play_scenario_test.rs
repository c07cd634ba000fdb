//! End-to-end conversion of a wire-format `play_video` event.

use edx2xapi_core::converter::ConverterConfig;
use edx2xapi_core::identity::generate_id;
use edx2xapi_core::orchestrator::{convert_dict_event, convert_str_event};
use edx2xapi_test_support::{
    PLATFORM_URL, PLAY_VIDEO_CANONICAL, PLAY_VIDEO_STATEMENT_ID, UUID_NAMESPACE,
};
use edx2xapi_video::application::converters::UiPlayVideoToVideoPlayed;
use serde_json::json;
use uuid::Uuid;

fn converter() -> UiPlayVideoToVideoPlayed {
    UiPlayVideoToVideoPlayed::new(ConverterConfig::parse(UUID_NAMESPACE, PLATFORM_URL).unwrap())
}

#[test]
fn test_play_event_produces_played_statement() {
    // Arrange
    let raw: serde_json::Value = serde_json::from_str(PLAY_VIDEO_CANONICAL).unwrap();

    // Act
    let statement = convert_dict_event(&raw, PLAY_VIDEO_CANONICAL, &converter()).unwrap();

    // Assert
    let namespace = Uuid::parse_str(UUID_NAMESPACE).unwrap();
    assert_eq!(statement.id, generate_id(namespace, PLAY_VIDEO_CANONICAL));
    assert_eq!(statement.id.to_string(), PLAY_VIDEO_STATEMENT_ID);
    assert_eq!(statement.verb.id, "https://w3id.org/xapi/video/verbs/played");
    assert_eq!(statement.timestamp, "2021-01-01T00:00:00+00:00");
    assert_eq!(statement.version, "1.0.0");
    assert_eq!(statement.actor.account.name, "1");
    assert_eq!(
        statement.result.unwrap().extensions["https://w3id.org/xapi/video/extensions/time"],
        json!(12.5)
    );
    assert_eq!(
        statement.object.id,
        "https://x.test/xblock/block-v1:-course-v1:+type@video+block@abc123"
    );
}

#[test]
fn test_redelivered_event_keeps_statement_id() {
    let first = convert_str_event(PLAY_VIDEO_CANONICAL, &converter()).unwrap();
    let second = convert_str_event(PLAY_VIDEO_CANONICAL, &converter()).unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let converter = &converter();

    let ids: Vec<Uuid> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(move || convert_str_event(PLAY_VIDEO_CANONICAL, converter).unwrap().id)
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(ids.iter().all(|id| id.to_string() == PLAY_VIDEO_STATEMENT_ID));
}
