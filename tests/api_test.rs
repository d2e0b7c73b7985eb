//! HTTP client tests against a mocked backend

use std::time::Duration;

use courtside::{
    api::{ApiClient, NewPlayer},
    CancelToken,
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn teams_payload() -> serde_json::Value {
    json!([
        { "name": "Celtics", "city": "Boston", "conference": "East" },
        { "name": "Lakers", "city": "Los Angeles", "conference": "West" }
    ])
}

#[tokio::test]
async fn test_player_info_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/player-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 30,
                "name": "Stephen Curry",
                "team": "Warriors",
                "position": "PG",
                "height": "6'2\"",
                "weight": "185 lbs"
            }
        ])))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let players = api.player_info(&CancelToken::new()).await.unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Stephen Curry");
    assert_eq!(players[0].position, "PG");
}

#[tokio::test]
async fn test_player_stats_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/player-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Luka Doncic", "team": "Mavericks", "points": 33.9, "rebounds": 9.2, "assists": 9.8 }
        ])))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let stats = api.player_stats(&CancelToken::new()).await.unwrap();

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].points, 33.9);
}

#[tokio::test]
async fn test_teams_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(teams_payload()))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let teams = api.teams(&CancelToken::new()).await.unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[1].city, "Los Angeles");
}

#[tokio::test]
async fn test_stadiums_envelope_unwrapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stadiums"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "stadiums": [
                {
                    "id": 2,
                    "name": "TD Garden",
                    "team": "Celtics",
                    "location": "Boston, MA",
                    "capacity": 19156,
                    "opened": 1995,
                    "imageUrl": "https://example.com/tdgarden.jpg"
                }
            ]
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let stadiums = api.stadiums(&CancelToken::new()).await.unwrap();

    assert_eq!(stadiums.len(), 1);
    assert_eq!(stadiums[0].capacity, 19156);
}

#[tokio::test]
async fn test_non_2xx_maps_to_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let err = api.teams(&CancelToken::new()).await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert!(!err.is_network());
    assert!(!err.is_cancelled());
}

#[tokio::test]
async fn test_network_error_has_no_status() {
    // Nothing is listening on this port; the request never gets a response.
    let api = ApiClient::new("http://127.0.0.1:1").unwrap();
    let err = api.teams(&CancelToken::new()).await.unwrap_err();

    assert!(err.is_network());
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_cancelled_before_send_never_hits_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_json(teams_payload()))
        .expect(0)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let token = CancelToken::new();
    token.cancel();

    let err = api.teams(&token).await.unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_result_arriving_after_cancellation_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/teams"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(teams_payload())
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let token = CancelToken::new();

    // Let the request get on the wire, then cancel while the response is
    // still pending. The decoded body must come back as Cancelled.
    let fetch = api.teams(&token);
    let cancel = async {
        tokio::task::yield_now().await;
        token.cancel();
    };
    let (result, ()) = tokio::join!(fetch, cancel);

    assert!(result.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn test_create_player_posts_body() {
    let server = MockServer::start().await;
    let body = NewPlayer {
        name: "Jayson Tatum".to_string(),
        position: "SF".to_string(),
        team: "Celtics".to_string(),
    };
    Mock::given(method("POST"))
        .and(path("/api/players"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    api.create_player(&body).await.unwrap();
}

#[tokio::test]
async fn test_create_player_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/players"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let body = NewPlayer {
        name: "Nobody".to_string(),
        position: "PG".to_string(),
        team: "Nowhere".to_string(),
    };
    let err = api.create_player(&body).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}
