/// AniList client tests against a local mock GraphQL server
mod common;

use std::collections::HashSet;
use std::time::Duration;

use anidle::anilist::{AniListClient, FetchError};
use anidle::catalog::{FetchOptions, fetch_catalog};
use anidle::models::{CombineMode, MediaFormat, Settings};
use anidle::{Error, build_candidate_pool};
use common::{MockServer, Route, list_needle, media_list_body, user_needle};

#[test]
fn test_fetch_media_list_parses_entries() {
    let body = media_list_body(&[
        (1, "TV", "CURRENT", Some(2005), Some(12_000)),
        (2, "MOVIE", "COMPLETED", None, None),
        (3, "SOMETHING_NEW", "PLANNING", Some(2023), Some(10)),
    ]);
    let server = MockServer::start(vec![Route::new(&list_needle("alice"), 200, &body)]);
    let client = AniListClient::with_endpoint(&server.url);

    let entries = client.fetch_media_list("alice").unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].id, 1);
    assert_eq!(entries[0].format, Some(MediaFormat::Tv));
    assert_eq!(entries[0].year, Some(2005));
    assert_eq!(entries[0].popularity, Some(12_000));
    assert_eq!(entries[1].format, Some(MediaFormat::Movie));
    assert_eq!(entries[1].year, None);
    assert_eq!(entries[2].format, Some(MediaFormat::Unknown));
}

#[test]
fn test_fetch_media_list_skips_null_rows() {
    let body = r#"{"data":{"MediaListCollection":{"lists":[
        null,
        {"entries":[null,{"status":"CURRENT","media":null},{"status":"CURRENT","media":{"id":7,"format":"TV","startDate":null,"popularity":null}}]},
        {"entries":null}
    ]}}}"#;
    let server = MockServer::start(vec![Route::new(&list_needle("alice"), 200, body)]);
    let client = AniListClient::with_endpoint(&server.url);

    let entries = client.fetch_media_list("alice").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, 7);
}

#[test]
fn test_graphql_errors_on_success_status() {
    let body = r#"{"data":null,"errors":[{"message":"Private user","status":403}]}"#;
    let server = MockServer::start(vec![Route::new(&list_needle("hidden"), 200, body)]);
    let client = AniListClient::with_endpoint(&server.url);

    let err = client.fetch_media_list("hidden").unwrap_err();
    assert_eq!(err, FetchError::GraphQl("Private user".to_string()));
}

#[test]
fn test_http_error_carries_graphql_message() {
    let body = r#"{"data":null,"errors":[{"message":"User not found","status":404}]}"#;
    let server = MockServer::start(vec![Route::new(&list_needle("ghost"), 404, body)]);
    let client = AniListClient::with_endpoint(&server.url);

    let err = client.fetch_media_list("ghost").unwrap_err();
    assert_eq!(err, FetchError::Status { status: 404, message: "User not found".to_string() });
}

#[test]
fn test_rate_limited() {
    let server =
        MockServer::start(vec![Route::new(&list_needle("alice"), 429, r#"{"errors":[]}"#)]);
    let client = AniListClient::with_endpoint(&server.url);

    assert_eq!(client.fetch_media_list("alice").unwrap_err(), FetchError::RateLimited);
}

#[test]
fn test_malformed_body_is_decode_error() {
    let server = MockServer::start(vec![Route::new(&list_needle("alice"), 200, "not json")]);
    let client = AniListClient::with_endpoint(&server.url);

    assert!(matches!(client.fetch_media_list("alice"), Err(FetchError::Decode(_))));
}

#[test]
fn test_transport_error() {
    // Nothing listens on port 9 locally
    let client = AniListClient::with_endpoint("http://127.0.0.1:9/");
    assert!(matches!(client.fetch_media_list("alice"), Err(FetchError::Transport(_))));
}

#[test]
fn test_user_exists() {
    let server = MockServer::start(vec![
        Route::new(&user_needle("alice"), 200, r#"{"data":{"User":{"id":42}}}"#),
        Route::new(
            &user_needle("ghost"),
            404,
            r#"{"data":{"User":null},"errors":[{"message":"Not Found.","status":404}]}"#,
        ),
        Route::new(&user_needle("nulluser"), 200, r#"{"data":{"User":null}}"#),
        Route::new(&user_needle("busy"), 429, "{}"),
    ]);
    let client = AniListClient::with_endpoint(&server.url);

    assert_eq!(client.user_exists("alice"), Ok(true));
    assert_eq!(client.user_exists("ghost"), Ok(false));
    assert_eq!(client.user_exists("nulluser"), Ok(false));
    assert_eq!(client.user_exists("busy"), Err(FetchError::RateLimited));
}

#[test]
fn test_pool_built_through_client() {
    let server = MockServer::start(vec![
        Route::new(
            &list_needle("alice"),
            200,
            &media_list_body(&[
                (1, "TV", "CURRENT", Some(2001), None),
                (2, "TV", "COMPLETED", Some(2002), None),
                (3, "TV", "CURRENT", Some(2003), None),
            ]),
        ),
        Route::new(
            &list_needle("bob"),
            200,
            &media_list_body(&[
                (2, "TV", "CURRENT", Some(2002), None),
                (3, "TV", "COMPLETED", Some(2003), None),
                (4, "TV", "CURRENT", Some(2004), None),
            ]),
        ),
    ]);
    let client = AniListClient::with_endpoint(&server.url);
    let settings = Settings {
        anilist_usernames: vec!["alice".to_string(), "bob".to_string()],
        combine: CombineMode::Intersect,
        ..Settings::default()
    };

    let pool = build_candidate_pool(&client, &settings).unwrap();
    assert_eq!(pool.ids, HashSet::from([2, 3]));
}

#[test]
fn test_pool_names_failing_user() {
    let server = MockServer::start(vec![
        Route::new(&list_needle("alice"), 200, &media_list_body(&[(1, "TV", "CURRENT", None, None)])),
        Route::new(&list_needle("bob"), 500, r#"{"errors":[{"message":"boom"}]}"#),
    ]);
    let client = AniListClient::with_endpoint(&server.url);
    let settings = Settings {
        anilist_usernames: vec!["alice".to_string(), "bob".to_string()],
        ..Settings::default()
    };

    match build_candidate_pool(&client, &settings) {
        Err(Error::RemoteFetch { user, message }) => {
            assert_eq!(user, "bob");
            assert!(message.contains("boom"));
        }
        other => panic!("expected RemoteFetch, got {:?}", other.map(|p| p.ids)),
    }
}

#[test]
fn test_catalog_download_pages() {
    let page1 = r#"{"data":{"Page":{"pageInfo":{"currentPage":1,"hasNextPage":true},"media":[
        {"id":1,"title":{"romaji":"Cowboy Bebop","english":"Cowboy Bebop"}},
        {"id":5,"title":{"romaji":"Cowboy Bebop: Tengoku no Tobira","english":null}}
    ]}}}"#;
    let page2 = r#"{"data":{"Page":{"pageInfo":{"currentPage":2,"hasNextPage":false},"media":[
        {"id":6,"title":{"romaji":"Trigun","english":"Trigun"}}
    ]}}}"#;
    let server = MockServer::start(vec![
        Route::new(r#""page":1,"#, 200, page1),
        Route::new(r#""page":2,"#, 200, page2),
    ]);
    let client = AniListClient::with_endpoint(&server.url);
    let options = FetchOptions { per_page: 2, pause: Duration::ZERO, ..FetchOptions::default() };

    let records = fetch_catalog(&client, &options).unwrap();
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 5, 6]);
    assert_eq!(records[1].english, "");
    assert_eq!(records[2].romaji, "Trigun");
}
