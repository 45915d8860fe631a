use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use futures::executor::block_on;

use super::*;
use crate::net::test_support::{ScriptedTransport, client_with, respond};
use crate::util::storage::MemoryTokenStore;

// =============================================================
// Outbound
// =============================================================

#[test]
fn requests_resolve_against_base_url_with_json_and_credentials() {
    let transport = ScriptedTransport::with(vec![respond(200, "{}")]);
    let client = client_with(transport.clone(), Arc::new(MemoryTokenStore::default()));

    block_on(client.get("/collections/public")).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].url, "https://shop.test/api/collections/public");
    assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
    assert!(requests[0].with_credentials);
    assert_eq!(requests[0].body, None);
}

#[test]
fn bearer_header_attached_when_token_stored() {
    let transport = ScriptedTransport::with(vec![respond(200, "{}")]);
    let client = client_with(transport.clone(), Arc::new(MemoryTokenStore::with_token("tok-1")));

    block_on(client.get("/me")).unwrap();

    assert_eq!(transport.requests()[0].header("Authorization"), Some("Bearer tok-1"));
}

#[test]
fn no_bearer_header_without_token() {
    let transport = ScriptedTransport::with(vec![respond(200, "{}")]);
    let client = client_with(transport.clone(), Arc::new(MemoryTokenStore::default()));

    block_on(client.get("/me")).unwrap();

    assert_eq!(transport.requests()[0].header("Authorization"), None);
}

#[test]
fn token_is_read_per_request() {
    let transport = ScriptedTransport::with(vec![respond(200, "{}"), respond(200, "{}")]);
    let tokens = Arc::new(MemoryTokenStore::default());
    let client = client_with(transport.clone(), tokens.clone());

    block_on(client.get("/a")).unwrap();
    tokens.set_token("late");
    block_on(client.get("/b")).unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].header("Authorization"), None);
    assert_eq!(requests[1].header("Authorization"), Some("Bearer late"));
}

#[test]
fn post_put_patch_serialize_json_bodies() {
    let transport = ScriptedTransport::with(vec![respond(201, "{}"), respond(200, "{}"), respond(200, "{}")]);
    let client = client_with(transport.clone(), Arc::new(MemoryTokenStore::default()));
    let payload = serde_json::json!({ "title": "Summer" });

    block_on(client.post("/collections", &payload)).unwrap();
    block_on(client.put("/collections/c1", &payload)).unwrap();
    block_on(client.patch("/collections/c1", &payload)).unwrap();

    let requests = transport.requests();
    let methods: Vec<_> = requests.iter().map(|r| r.method).collect();
    assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Put, HttpMethod::Patch]);
    for request in &requests {
        assert_eq!(request.body.as_deref(), Some(r#"{"title":"Summer"}"#));
    }
}

#[test]
fn delete_sends_no_body() {
    let transport = ScriptedTransport::with(vec![respond(204, "")]);
    let client = client_with(transport.clone(), Arc::new(MemoryTokenStore::default()));

    block_on(client.delete("/collections/c1")).unwrap();

    assert_eq!(transport.requests()[0].method, HttpMethod::Delete);
    assert_eq!(transport.requests()[0].body, None);
}

// =============================================================
// Inbound
// =============================================================

#[test]
fn non_2xx_becomes_status_error() {
    let transport = ScriptedTransport::with(vec![respond(500, "boom")]);
    let client = client_with(transport, Arc::new(MemoryTokenStore::default()));

    let err = block_on(client.get("/x")).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, body: "boom".to_owned() });
}

#[test]
fn unauthorized_clears_token_and_notifies_once() {
    let transport = ScriptedTransport::with(vec![respond(401, "nope")]);
    let tokens = Arc::new(MemoryTokenStore::with_token("stale"));
    let client = client_with(transport, tokens.clone());
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let _sub = client.unauthorized().subscribe(move |event| sink.lock().unwrap().push(*event));

    let err = block_on(client.get("/orders")).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 401, body: "nope".to_owned() });
    assert_eq!(tokens.token(), None);
    assert_eq!(*events.lock().unwrap(), vec![UnauthorizedEvent { status: 401 }]);
}

#[test]
fn other_errors_keep_token_and_stay_silent() {
    let transport = ScriptedTransport::with(vec![
        respond(403, ""),
        respond(500, ""),
        Err(ApiError::Transport("offline".to_owned())),
    ]);
    let tokens = Arc::new(MemoryTokenStore::with_token("keep"));
    let client = client_with(transport, tokens.clone());
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let _sub = client.unauthorized().subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    for _ in 0..3 {
        assert!(block_on(client.get("/x")).is_err());
    }

    assert_eq!(tokens.token().as_deref(), Some("keep"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn transport_errors_pass_through_unchanged() {
    let transport = ScriptedTransport::with(vec![Err(ApiError::Transport("dns".to_owned()))]);
    let client = client_with(transport, Arc::new(MemoryTokenStore::default()));

    assert_eq!(block_on(client.get("/x")), Err(ApiError::Transport("dns".to_owned())));
}

#[test]
fn get_json_decodes_body() {
    let transport = ScriptedTransport::with(vec![respond(200, r#"{"n":3}"#)]);
    let client = client_with(transport, Arc::new(MemoryTokenStore::default()));

    let value: serde_json::Value = block_on(client.get_json("/x")).unwrap();
    assert_eq!(value, serde_json::json!({ "n": 3 }));
}

#[test]
fn get_json_reports_malformed_body() {
    let transport = ScriptedTransport::with(vec![respond(200, "<html>")]);
    let client = client_with(transport, Arc::new(MemoryTokenStore::default()));

    let err = block_on(client.get_json::<serde_json::Value>("/x")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
