use std::time::Duration;

use compass_application::{GatewayError, ScoringGateway};
use compass_domain::{
    AnswerMap, AxisScoreSet, ClientMetadata, DeviceClass, LikertValue, Profile, QuizResult,
    QuestionSet, ResultKey, SaveRequest,
};
use compass_infrastructure::HttpScoringGateway;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway(server: &MockServer) -> HttpScoringGateway {
    HttpScoringGateway::with_config(server.uri(), Some(Duration::from_secs(5))).unwrap()
}

fn answers() -> AnswerMap {
    [
        ("q1".to_string(), LikertValue::new(2).unwrap()),
        ("q2".to_string(), LikertValue::new(-1).unwrap()),
    ]
    .into_iter()
    .collect()
}

fn key() -> ResultKey {
    ResultKey::parse("IDEO-AB12-CD34").unwrap()
}

#[tokio::test]
async fn questions_are_returned_untouched() {
    let server = MockServer::start().await;
    let body = json!({
        "questions": [
            {"id": "q1", "axis": "economic", "text": "Markets allocate resources best."}
        ],
        "by_axis": {
            "economic": [{"id": "q1", "text": "Markets allocate resources best."}]
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .mount(&server)
        .await;

    let raw = gateway(&server).fetch_questions().await.unwrap();
    assert_eq!(raw, body);
    assert_eq!(QuestionSet::from_json(&raw).unwrap().len(), 1);
}

#[tokio::test]
async fn submit_posts_answers_and_parses_scores() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/submit"))
        .and(body_json(json!({"answers": {"q1": 2, "q2": -1}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "axes": {"economic": 10, "social": -2, "community": null},
            "profile": {"key": "liberal_classico_mercado", "label": "Classical liberal"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let scored = gateway(&server).submit(&answers()).await.unwrap();
    assert_eq!(scored.axes.get("economic"), Some(10.0));
    assert_eq!(scored.axes.get("social"), Some(-2.0));
    assert!(scored.axes.get("community").unwrap().is_nan());
    assert_eq!(scored.profile.display_label(), "Classical liberal");
}

#[tokio::test]
async fn submit_server_error_is_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/submit"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = gateway(&server).submit(&answers()).await.unwrap_err();
    assert!(matches!(err, GatewayError::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn slow_service_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/submit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"axes": {}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let gateway =
        HttpScoringGateway::with_config(server.uri(), Some(Duration::from_millis(200))).unwrap();
    let err = gateway.submit(&answers()).await.unwrap_err();
    assert!(matches!(err, GatewayError::Timeout));
}

#[tokio::test]
async fn save_sends_metadata_and_returns_key() {
    let server = MockServer::start().await;

    let mut axes = AxisScoreSet::new();
    axes.insert("economic", 10.0);
    let result = QuizResult::new(
        answers(),
        axes,
        Profile::from_key_label(Some("centro".to_string()), Some("Center".to_string())),
    );
    let request = SaveRequest::new(
        &result,
        &ClientMetadata::new("pt-BR", DeviceClass::Mobile),
        "0.4.0",
    );

    Mock::given(method("POST"))
        .and(path("/api/save_result"))
        .and(body_json(json!({
            "answers": {"q1": 2, "q2": -1},
            "scores": {"economic": 10.0},
            "profile_key": "centro",
            "profile_label": "Center",
            "locale": "pt-BR",
            "device": "mobile",
            "version": "0.4.0"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result_id": "IDEO-AB12-CD34"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let issued = gateway(&server).save_result(&request).await.unwrap();
    assert_eq!(issued, key());
}

#[tokio::test]
async fn save_with_malformed_issued_key_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/save_result"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result_id": "42"})))
        .mount(&server)
        .await;

    let request = SaveRequest::new(
        &QuizResult::new(answers(), AxisScoreSet::new(), Profile::default()),
        &ClientMetadata::default(),
        "0.4.0",
    );
    let err = gateway(&server).save_result(&request).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidResponse(_)));
}

#[tokio::test]
async fn fetch_result_accepts_stored_record_shape() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/result/IDEO-AB12-CD34"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "IDEO-AB12-CD34",
            "timestamp": "2025-03-01T12:30:00",
            "version": "0.4.0",
            "answers": {"q1": 2, "q2": -1},
            "scores": {"economic": 10, "social": -2},
            "profile_key": "liberal_classico_mercado",
            "profile_label": "Classical liberal"
        })))
        .mount(&server)
        .await;

    let stored = gateway(&server).fetch_result(&key()).await.unwrap();
    assert_eq!(stored.key, key());
    assert_eq!(stored.result.answers, answers());
    assert_eq!(stored.result.axes.get("economic"), Some(10.0));
    assert_eq!(
        stored.result.profile.key.as_deref(),
        Some("liberal_classico_mercado")
    );
    assert!(stored.saved_at.is_some());
}

#[tokio::test]
async fn fetch_result_missing_variants_are_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/result/IDEO-AAAA-0000"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/result/IDEO-BBBB-0000"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/result/IDEO-CCCC-0000"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": "Result not found"})),
        )
        .mount(&server)
        .await;

    let gateway = gateway(&server);
    for raw in ["IDEO-AAAA-0000", "IDEO-BBBB-0000", "IDEO-CCCC-0000"] {
        let key = ResultKey::parse(raw).unwrap();
        let err = gateway.fetch_result(&key).await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound), "{raw}: {err:?}");
    }
}

#[tokio::test]
async fn fetch_result_with_unrelated_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/result/IDEO-AB12-CD34"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let err = gateway(&server).fetch_result(&key()).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidResponse(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_service_is_connection_error() {
    // Nothing listens on the discard port
    let gateway =
        HttpScoringGateway::with_config("http://127.0.0.1:9", Some(Duration::from_secs(2)))
            .unwrap();
    let err = gateway.fetch_questions().await.unwrap_err();
    assert!(matches!(
        err,
        GatewayError::ConnectionError(_) | GatewayError::Timeout
    ));
}
