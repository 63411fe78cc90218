//! Tests for the distance-matrix client against a mock HTTP server.

use mockito::{Matcher, Server, ServerGuard};
use travel_cost_server::domain::Postcode;
use travel_cost_server::travel::{
    NetworkError, ResponseError, TravelCostConfig, TravelCostError, TravelCostService,
};

const PATH: &str = "/maps/api/distancematrix/json";

fn pc(s: &str) -> Postcode {
    Postcode::parse(s).unwrap()
}

fn service_for(server: &ServerGuard) -> TravelCostService {
    let config =
        TravelCostConfig::new("test-api-key").with_base_url(format!("{}{}", server.url(), PATH));
    TravelCostService::new(config).unwrap()
}

fn ok_body(seconds: u64) -> String {
    format!(
        r#"{{
            "destination_addresses": ["London EC1A 1BB, UK"],
            "origin_addresses": ["London SW1A 1AA, UK"],
            "rows": [{{
                "elements": [{{
                    "distance": {{"text": "5.2 km", "value": 5213}},
                    "duration": {{"text": "45 mins", "value": {seconds}}},
                    "status": "OK"
                }}]
            }}],
            "status": "OK"
        }}"#
    )
}

#[tokio::test]
async fn returns_duration_in_seconds() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("origins".into(), "SW1A 1AA".into()),
            Matcher::UrlEncoded("destinations".into(), "EC1A 1BB".into()),
            Matcher::UrlEncoded("mode".into(), "driving".into()),
            Matcher::UrlEncoded("key".into(), "test-api-key".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ok_body(2700))
        .expect(1)
        .create_async()
        .await;

    let seconds = service_for(&server)
        .fetch_travel_time(&pc("sw1a1aa"), &pc("ec1a1bb"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(seconds, 2700);
}

#[tokio::test]
async fn query_parameters_are_percent_encoded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", PATH)
        .match_query(Matcher::Regex(
            "origins=SW1A\\+1AA&destinations=EC1A\\+1BB&mode=driving&key=a%26b".into(),
        ))
        .with_status(200)
        .with_body(ok_body(60))
        .create_async()
        .await;

    let config = TravelCostConfig::new("a&b").with_base_url(format!("{}{}", server.url(), PATH));
    let service = TravelCostService::new(config).unwrap();

    let seconds = service
        .fetch_travel_time(&pc("SW1A1AA"), &pc("EC1A1BB"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(seconds, 60);
}

#[tokio::test]
async fn non_ok_top_level_status() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid.", "rows": []}"#,
        )
        .create_async()
        .await;

    let err = service_for(&server)
        .fetch_travel_time(&pc("SW1A1AA"), &pc("EC1A1BB"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TravelCostError::InvalidResponse(ResponseError::Status { ref status, .. })
            if status == "REQUEST_DENIED"
    ));
}

#[tokio::test]
async fn empty_elements() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "OK", "rows": [{"elements": []}]}"#)
        .create_async()
        .await;

    let err = service_for(&server)
        .fetch_travel_time(&pc("SW1A1AA"), &pc("EC1A1BB"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TravelCostError::InvalidResponse(ResponseError::NoElements)
    ));
}

#[tokio::test]
async fn element_status_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "OK", "rows": [{"elements": [{"status": "NOT_FOUND"}]}]}"#)
        .create_async()
        .await;

    let err = service_for(&server)
        .fetch_travel_time(&pc("SW1A1AA"), &pc("EC1A1BB"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TravelCostError::InvalidResponse(ResponseError::ElementStatus(ref s)) if s == "NOT_FOUND"
    ));
}

#[tokio::test]
async fn malformed_body() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>definitely not json</html>")
        .create_async()
        .await;

    let err = service_for(&server)
        .fetch_travel_time(&pc("SW1A1AA"), &pc("EC1A1BB"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TravelCostError::InvalidResponse(ResponseError::Decode { .. })
    ));
}

#[tokio::test]
async fn non_200_statuses_are_network_errors() {
    for status in [201, 400, 403, 404, 500, 503] {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", PATH)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_body(ok_body(2700))
            .expect(1)
            .create_async()
            .await;

        let err = service_for(&server)
            .fetch_travel_time(&pc("SW1A1AA"), &pc("EC1A1BB"))
            .await
            .unwrap_err();

        mock.assert_async().await;
        match err {
            TravelCostError::Network(NetworkError::Status { status: got, .. }) => {
                assert_eq!(got as usize, status)
            }
            other => panic!("status {status}: unexpected {other:?}"),
        }
    }
}

#[tokio::test]
async fn transport_failure_is_network_error() {
    // Grab a free port, then close it so the connection is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = TravelCostConfig::new("key").with_base_url(format!("http://{addr}{PATH}"));
    let service = TravelCostService::new(config).unwrap();

    let err = service
        .fetch_travel_time(&pc("SW1A1AA"), &pc("EC1A1BB"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TravelCostError::Network(NetworkError::Transport(_))
    ));
}

#[tokio::test]
async fn transport_error_does_not_leak_api_key() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config =
        TravelCostConfig::new("super-secret-key").with_base_url(format!("http://{addr}{PATH}"));
    let service = TravelCostService::new(config).unwrap();

    let err = service
        .fetch_travel_time(&pc("SW1A1AA"), &pc("EC1A1BB"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TravelCostError::Network(NetworkError::Transport(_))
    ));
    assert!(!err.to_string().contains("super-secret-key"), "{err}");
    assert!(!format!("{err:?}").contains("super-secret-key"), "{err:?}");
}
