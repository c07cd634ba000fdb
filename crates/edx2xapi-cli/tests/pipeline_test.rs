//! Integration tests for the line-oriented conversion pipeline.

use edx2xapi_cli::config::Settings;
use edx2xapi_cli::error::AppError;
use edx2xapi_cli::pipeline::{Summary, default_registry, run};
use edx2xapi_core::converter::ConverterConfig;
use edx2xapi_core::statement::Statement;
use edx2xapi_test_support::{
    PLATFORM_URL, PLAY_VIDEO_CANONICAL, PLAY_VIDEO_STATEMENT_ID, UUID_NAMESPACE, load_video_event,
    page_close_event, play_video_event, seek_video_event, server_event,
};
use serde_json::json;

fn settings(ignore_errors: bool, fail_on_unknown: bool) -> Settings {
    Settings {
        converter: ConverterConfig::parse(UUID_NAMESPACE, PLATFORM_URL).unwrap(),
        ignore_errors,
        fail_on_unknown,
    }
}

fn convert(settings: &Settings, lines: &[String]) -> (Result<Summary, AppError>, Vec<Statement>) {
    let registry = default_registry(&settings.converter);
    let input = lines.join("\n");
    let mut output = Vec::new();
    let result = run(settings, &registry, input.as_bytes(), &mut output);
    let statements = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    (result, statements)
}

fn unsupported_event() -> String {
    let mut value = play_video_event(1.0).value;
    value["event_type"] = json!("show_transcript");
    serde_json::to_string(&value).unwrap()
}

fn broken_event() -> String {
    let mut value = play_video_event(1.0).value;
    value["session"] = json!("not-a-uuid");
    serde_json::to_string(&value).unwrap()
}

#[test]
fn test_run_converts_every_supported_event_in_order() {
    // Arrange
    let settings = settings(false, false);
    let lines = vec![
        load_video_event().raw,
        PLAY_VIDEO_CANONICAL.to_owned(),
        String::new(),
        seek_video_event(1.0, 2.0).raw,
        page_close_event("https://x.test/dashboard").raw,
        server_event("/dashboard").raw,
    ];

    // Act
    let (result, statements) = convert(&settings, &lines);

    // Assert
    assert_eq!(
        result.unwrap(),
        Summary {
            converted: 5,
            skipped: 0,
            failed: 0
        }
    );
    let verbs: Vec<&str> = statements.iter().map(|s| s.verb.id.as_str()).collect();
    assert_eq!(
        verbs,
        vec![
            "http://adlnet.gov/expapi/verbs/initialized",
            "https://w3id.org/xapi/video/verbs/played",
            "https://w3id.org/xapi/video/verbs/seeked",
            "http://adlnet.gov/expapi/verbs/terminated",
            "http://id.tincanapi.com/verb/viewed",
        ]
    );
    assert_eq!(statements[1].id.to_string(), PLAY_VIDEO_STATEMENT_ID);
}

#[test]
fn test_run_skips_unsupported_events_by_default() {
    let settings = settings(false, false);
    let lines = vec![unsupported_event(), load_video_event().raw];

    let (result, statements) = convert(&settings, &lines);

    assert_eq!(
        result.unwrap(),
        Summary {
            converted: 1,
            skipped: 1,
            failed: 0
        }
    );
    assert_eq!(statements.len(), 1);
}

#[test]
fn test_run_fails_on_unknown_when_asked() {
    let settings = settings(false, true);
    let lines = vec![load_video_event().raw, unsupported_event()];

    let (result, statements) = convert(&settings, &lines);

    let Err(AppError::Conversion(err)) = result else {
        panic!("expected a conversion error");
    };
    assert_eq!(err.index, 1);
    assert!(err.is_unsupported());
    assert_eq!(statements.len(), 1);
}

#[test]
fn test_run_aborts_on_first_failure_naming_converter_and_index() {
    let settings = settings(false, false);
    let lines = vec![load_video_event().raw, broken_event(), load_video_event().raw];

    let (result, statements) = convert(&settings, &lines);

    let Err(AppError::Conversion(err)) = result else {
        panic!("expected a conversion error");
    };
    assert_eq!(err.index, 1);
    assert_eq!(err.converter, "UiPlayVideoToVideoPlayed");
    assert_eq!(statements.len(), 1);
}

#[test]
fn test_run_ignores_failures_when_asked() {
    let settings = settings(true, false);
    let lines = vec![broken_event(), load_video_event().raw, "{truncated".to_owned()];

    let (result, statements) = convert(&settings, &lines);

    assert_eq!(
        result.unwrap(),
        Summary {
            converted: 1,
            skipped: 0,
            failed: 2
        }
    );
    assert_eq!(statements.len(), 1);
}
