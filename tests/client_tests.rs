use serde_json::json;
use spotify_lookup::api::TOP_TRACKS_MAX;
use spotify_lookup::{
    run_report, ClientConfig, Credentials, ReportRequest, SpotifyClient, SpotifyError,
};
use wiremock::matchers::{
    body_string, header, method, path, query_param, query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";
const BEARER: &str = "Bearer test-token";
const ARTIST_ID: &str = "0du5cEVh5yTK9QJze8zA0C";
const ALBUM_ID: &str = "4PgleR09JVnm3zY1fW3XBA";

fn config(server: &MockServer) -> ClientConfig {
    ClientConfig::new(Credentials::new("id", "secret"))
        .with_accounts_url(server.uri())
        .with_api_url(format!("{}/v1", server.uri()))
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", "Basic aWQ6c2VjcmV0"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn connect(server: &MockServer) -> SpotifyClient {
    mount_token(server).await;
    SpotifyClient::connect(config(server)).await.unwrap()
}

async fn mount_artist_search(server: &MockServer, items: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "Bruno Mars"))
        .and(query_param("type", "artist"))
        .and(query_param("limit", "1"))
        .and(query_param_is_missing("market"))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "artists": { "items": items, "limit": 1, "offset": 0, "total": 1 }
        })))
        .mount(server)
        .await;
}

async fn mount_album_search(server: &MockServer, items: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("q", "99%"))
        .and(query_param("type", "album"))
        .and(query_param("limit", "1"))
        .and(query_param("market", "VN"))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "albums": { "items": items, "limit": 1, "offset": 0, "total": 0 }
        })))
        .mount(server)
        .await;
}

fn tracks(names: &[&str]) -> serde_json::Value {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "id": format!("track{}", i),
                "name": name,
                "track_number": i + 1,
                "duration_ms": 200000,
                "artists": [ { "id": ARTIST_ID, "name": "Bruno Mars" } ]
            })
        })
        .collect()
}

#[tokio::test]
async fn test_connect_acquires_token() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    assert_eq!(client.token().access_token, TOKEN);
    assert_eq!(client.token().expires_in, 3600);
}

#[tokio::test]
async fn test_invalid_credentials_are_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_client",
            "error_description": "Invalid client"
        })))
        .mount(&server)
        .await;

    let result = SpotifyClient::connect(config(&server)).await;
    match result {
        Err(SpotifyError::Auth(msg)) => assert!(msg.contains("invalid_client")),
        other => panic!("expected Auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_token_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let result = SpotifyClient::connect(config(&server)).await;
    assert!(matches!(result, Err(SpotifyError::Auth(_))));
}

#[tokio::test]
async fn test_search_artist_found() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_artist_search(
        &server,
        json!([{ "id": ARTIST_ID, "name": "Bruno Mars", "genres": ["pop"], "popularity": 90 }]),
    )
    .await;

    let artist = client.search_artist("Bruno Mars").await.unwrap().unwrap();
    assert!(!artist.id.is_empty());
    assert_eq!(artist.id, ARTIST_ID);
    assert_eq!(artist.name, "Bruno Mars");
}

#[tokio::test]
async fn test_search_artist_empty() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_artist_search(&server, json!([])).await;

    let artist = client.search_artist("Bruno Mars").await.unwrap();
    assert!(artist.is_none());
}

#[tokio::test]
async fn test_search_album_empty() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_album_search(&server, json!([])).await;

    let album = client.search_album("99%").await.unwrap();
    assert!(album.is_none());
}

#[tokio::test]
async fn test_search_album_without_market() {
    let server = MockServer::start().await;
    mount_token(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("type", "album"))
        .and(query_param_is_missing("market"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "albums": { "items": [ { "id": ALBUM_ID, "name": "99%" } ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = SpotifyClient::connect(config(&server).with_album_market(None))
        .await
        .unwrap();
    let album = client.search_album("99%").await.unwrap().unwrap();
    assert_eq!(album.id, ALBUM_ID);
}

#[tokio::test]
async fn test_artist_top_tracks() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/artists/{}/top-tracks", ARTIST_ID)))
        .and(query_param("country", "VN"))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": tracks(&["Die With A Smile", "Grenade", "Locked Out of Heaven"])
        })))
        .mount(&server)
        .await;

    let top = client.artist_top_tracks(ARTIST_ID).await.unwrap();
    assert!(top.len() <= TOP_TRACKS_MAX);
    assert_eq!(top.len(), 3);
    assert!(top.iter().all(|t| !t.name.is_empty()));
    assert_eq!(top[1].name, "Grenade");
}

#[tokio::test]
async fn test_album_tracks() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/albums/{}/tracks", ALBUM_ID)))
        .and(header("authorization", BEARER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": tracks(&["One", "Two"]),
            "next": null
        })))
        .mount(&server)
        .await;

    let listing = client.album_tracks(ALBUM_ID).await.unwrap();
    let names: Vec<_> = listing.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["One", "Two"]);
}

#[tokio::test]
async fn test_service_error_is_typed() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/artists/{}/top-tracks", ARTIST_ID)))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "status": 401, "message": "Invalid access token" }
        })))
        .mount(&server)
        .await;

    match client.artist_top_tracks(ARTIST_ID).await {
        Err(SpotifyError::Service { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid access token");
        }
        other => panic!("expected Service error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_search_response() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    match client.search_artist("Bruno Mars").await {
        Err(SpotifyError::MissingField(field)) => assert_eq!(field, "artists.items"),
        other => panic!("expected MissingField, got {:?}", other),
    }
}

#[tokio::test]
async fn test_report_prints_numbered_lists() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_artist_search(&server, json!([{ "id": ARTIST_ID, "name": "Bruno Mars" }])).await;
    mount_album_search(&server, json!([{ "id": ALBUM_ID, "name": "99%" }])).await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/artists/{}/top-tracks", ARTIST_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tracks": tracks(&["A", "B", "C"])
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/albums/{}/tracks", ALBUM_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": tracks(&["X", "Y"])
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut out = Vec::new();
    run_report(&client, &ReportRequest::default(), &mut out)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Top tracks from Bruno Mars.\n\
         1. A\n\
         2. B\n\
         3. C\n\
         Top tracks from 99% album.\n\
         1. X\n\
         2. Y\n"
    );
}

#[tokio::test]
async fn test_report_stops_when_album_missing() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    mount_artist_search(&server, json!([{ "id": ARTIST_ID, "name": "Bruno Mars" }])).await;
    mount_album_search(&server, json!([])).await;

    let mut out = Vec::new();
    let result = run_report(&client, &ReportRequest::default(), &mut out).await;

    assert!(matches!(result, Err(SpotifyError::AlbumNotFound(ref name)) if name == "99%"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_ids_stay_inside_their_path_segment() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path("/v1/albums/a%2Fb%3Fc/tracks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": tracks(&["Only"])
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listing = client.album_tracks("a/b?c").await.unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].name, "Only");
}

#[tokio::test]
async fn test_non_json_listing_is_parse_error() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/v1/albums/{}/tracks", ALBUM_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.album_tracks(ALBUM_ID).await;
    assert!(matches!(result, Err(SpotifyError::ParseError(_))));
}
