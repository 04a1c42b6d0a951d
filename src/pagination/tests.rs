//! Tests for pagination module

use super::*;
use crate::decode::{decode_page, Decoder, ResourceJson};
use crate::error::Error;
use crate::models::{Event, EventCategory};
use futures::TryStreamExt;
use serde_json::json;
use std::sync::Arc;

fn event(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "associated_object_id": "account_in71c4amph0vgo2qllky",
        "associated_object_type": "account",
        "category": "account.created",
        "created_at": "2020-01-31T23:59:59Z",
        "type": "event"
    })
}

fn list(ids: &[&str], next_cursor: Option<&str>) -> Vec<u8> {
    let data: Vec<_> = ids.iter().map(|id| event(id)).collect();
    serde_json::to_vec(&json!({ "data": data, "next_cursor": next_cursor })).unwrap()
}

fn three_pages() -> StaticPages {
    StaticPages::new()
        .first(list(&["event_1", "event_2"], Some("c1")))
        .after("c1", list(&["event_3"], Some("c2")))
        .after("c2", list(&["event_4", "event_5"], None))
}

// ============================================================================
// NextPage Tests
// ============================================================================

#[test]
fn test_next_page_from_cursor() {
    let next = NextPage::from_cursor(Some("abc"));
    assert!(next.is_continue());
    assert_eq!(next.cursor(), Some("abc"));

    assert!(NextPage::from_cursor(None).is_done());
    assert!(NextPage::from_cursor(Some("")).is_done());
    assert_eq!(NextPage::Done.cursor(), None);
}

// ============================================================================
// ListParams Tests
// ============================================================================

#[test]
fn test_list_params_query_pairs() {
    assert!(ListParams::new().query_pairs().is_empty());

    let params = ListParams::new().cursor("c1").limit(25);
    assert_eq!(
        params.query_pairs(),
        vec![("cursor", "c1".to_string()), ("limit", "25".to_string())]
    );
}

// ============================================================================
// PaginationConfig Tests
// ============================================================================

#[test]
fn test_pagination_config_validate() {
    assert!(PaginationConfig::default().validate().is_ok());
    assert!(PaginationConfig {
        limit: Some(MAX_LIMIT),
        max_pages: Some(1)
    }
    .validate()
    .is_ok());

    assert!(PaginationConfig {
        limit: Some(0),
        max_pages: None
    }
    .validate()
    .is_err());
    assert!(PaginationConfig {
        limit: Some(MAX_LIMIT + 1),
        max_pages: None
    }
    .validate()
    .is_err());
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert_eq!(state.pages, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(state.cursor.is_none());
    assert!(!state.done);
}

#[test]
fn test_pagination_state_advance() {
    let mut state = PaginationState::with_cursor("c0");
    state.record_page(3);
    state.advance(NextPage::from_cursor(Some("c1")));
    assert_eq!(state.pages, 1);
    assert_eq!(state.total_fetched, 3);
    assert_eq!(state.cursor.as_deref(), Some("c1"));

    state.record_page(2);
    state.advance(NextPage::Done);
    assert_eq!(state.total_fetched, 5);
    assert!(state.cursor.is_none());
    assert!(state.done);
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_page_with_null_cursor_is_last() {
    let page: Page<Event> = decode_page(&list(&["event_1"], None)).unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.data[0].category, EventCategory::AccountCreated);
    assert!(!page.has_next_page());
    assert!(page.next().is_done());
    assert!(page.json.next_cursor.is_null());
}

#[test]
fn test_page_with_empty_cursor_is_last() {
    let page: Page<Event> = decode_page(br#"{"data": [], "next_cursor": ""}"#).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_next_page());
    assert_eq!(page.next_cursor(), None);
}

#[test]
fn test_page_with_absent_cursor_is_last() {
    let page: Page<Event> = decode_page(br#"{"data": []}"#).unwrap();
    assert!(!page.has_next_page());
    assert!(page.json.next_cursor.is_missing());
}

#[test]
fn test_page_keeps_envelope_extras_and_raw() {
    let body = br#"{"data": [], "next_cursor": "c1", "total_count": 9}"#;
    let page: Page<Event> = decode_page(body).unwrap();

    assert_eq!(page.next_cursor(), Some("c1"));
    assert_eq!(page.json.extras()["total_count"], "9");
    assert_eq!(page.json.raw().as_bytes(), body);
}

#[test]
fn test_page_items_have_metadata() {
    let mut item = event("event_1");
    item["webhook_attempts"] = json!(2);
    let body = serde_json::to_vec(&json!({ "data": [item], "next_cursor": null })).unwrap();

    let page: Page<Event> = decode_page(&body).unwrap();
    assert_eq!(page.data[0].json.extras["webhook_attempts"], "2");
}

#[test]
fn test_page_strict_applies_to_items() {
    let body = br#"{"data": [{"id": "event_1"}], "next_cursor": null}"#;
    assert!(decode_page::<Event>(body).is_ok());

    let err = Decoder::strict().decode_page::<Event>(body).unwrap_err();
    assert!(matches!(err, Error::MissingField { ref model, .. } if model == "Event"));
}

#[test]
fn test_page_data_must_be_array() {
    let err = decode_page::<Event>(br#"{"data": {}, "next_cursor": null}"#).unwrap_err();
    assert_eq!(err.field(), Some("data"));
}

#[test]
fn test_page_deserialize_via_serde() {
    let page: Page<Event> = serde_json::from_slice(&list(&["event_1"], Some("c1"))).unwrap();
    assert_eq!(page.data[0].id, "event_1");
    assert_eq!(page.next_cursor(), Some("c1"));
}

#[tokio::test]
async fn test_page_next_page_follows_cursor() {
    let fetcher = three_pages();
    let decoder = Decoder::default();

    let first: Page<Event> = decoder
        .decode_page(&fetcher.fetch_page(&ListParams::new()).await.unwrap())
        .unwrap();
    let second = first
        .next_page(&fetcher, &decoder, Some(2))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.data[0].id, "event_3");

    let requests = fetcher.requests();
    assert_eq!(requests[1], ListParams::new().cursor("c1").limit(2));
}

#[tokio::test]
async fn test_page_next_page_at_end_does_not_fetch() {
    let fetcher = StaticPages::new();
    let page: Page<Event> = decode_page(&list(&["event_1"], None)).unwrap();

    let next = page
        .next_page(&fetcher, &Decoder::default(), None)
        .await
        .unwrap();
    assert!(next.is_none());
    assert_eq!(fetcher.request_count(), 0);
}

// ============================================================================
// Pager Tests
// ============================================================================

#[tokio::test]
async fn test_pager_terminates_after_last_page() {
    let fetcher = Arc::new(three_pages());
    let mut pager: Pager<Event, _> = Pager::new(fetcher.clone());

    let mut pages = 0;
    while let Some(page) = pager.next_page().await.unwrap() {
        pages += 1;
        assert!(!page.is_empty());
    }

    assert_eq!(pages, 3);
    assert_eq!(fetcher.request_count(), 3);
    assert_eq!(pager.state().pages, 3);
    assert_eq!(pager.state().total_fetched, 5);
    assert!(pager.state().done);

    // Exhausted pagers stay exhausted
    assert!(pager.next_page().await.unwrap().is_none());
    assert_eq!(fetcher.request_count(), 3);
}

#[tokio::test]
async fn test_pager_stream_yields_items_in_order() {
    let ids: Vec<String> = Pager::<Event, _>::new(three_pages())
        .into_stream()
        .map_ok(|event| event.id)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(ids, ["event_1", "event_2", "event_3", "event_4", "event_5"]);
}

#[tokio::test]
async fn test_pager_resumes_from_cursor() {
    let fetcher = Arc::new(three_pages());
    let events = Pager::<Event, _>::new(fetcher.clone())
        .starting_at("c2")
        .collect_all()
        .await
        .unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "event_4");
    assert_eq!(fetcher.requests()[0].cursor.as_deref(), Some("c2"));
}

#[tokio::test]
async fn test_pager_applies_config() {
    let fetcher = Arc::new(three_pages());
    let config = PaginationConfig {
        limit: Some(2),
        max_pages: Some(2),
    };
    let mut pager: Pager<Event, _> = Pager::new(fetcher.clone()).with_config(&config);

    assert!(pager.next_page().await.unwrap().is_some());
    assert!(pager.next_page().await.unwrap().is_some());
    assert!(pager.next_page().await.unwrap().is_none());
    assert_eq!(pager.cursor(), Some("c2"));

    let requests = fetcher.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|params| params.limit == Some(2)));
}

#[tokio::test]
async fn test_pager_propagates_fetch_errors() {
    let fetcher = StaticPages::new().first(list(&["event_1"], Some("missing")));
    let result = Pager::<Event, _>::new(fetcher).collect_all().await;

    assert!(matches!(result, Err(Error::Fetch { .. })));
}

#[tokio::test]
async fn test_pager_propagates_decode_errors() {
    let fetcher = StaticPages::new().first(b"not json".to_vec());
    let mut pager: Pager<Event, _> = Pager::new(fetcher).with_decoder(Decoder::strict());

    let err = pager.next_page().await.unwrap_err();
    assert!(err.is_decode_error());
    assert!(!pager.state().done);
}
