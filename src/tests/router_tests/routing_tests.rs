// src/tests/router_tests/routing_tests.rs

use crate::api::ApiClient;
use crate::errors::ServerError;
use crate::router::handle;
use astra::Body;
use http::{Method, Request};

/// Client pointed at a port nothing listens on; routes that never reach the
/// backend must still behave, routes that do must surface an API error.
fn offline_api() -> ApiClient {
    ApiClient::new("http://127.0.0.1:9").expect("client construction is local only")
}

#[test]
fn unknown_route_is_not_found() {
    let api = offline_api();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/relatorios")
        .body(Body::empty())
        .unwrap();

    match handle(req, &api) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn status_post_without_id_is_bad_request_before_any_network_call() {
    let api = offline_api();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/ordens/status")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from("status=concluida".as_bytes().to_vec()))
        .unwrap();

    match handle(req, &api) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("id")),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[test]
fn materials_post_with_bad_quantity_is_bad_request() {
    let api = offline_api();
    let body = "id=OS-1&materiais=Dobradi%C3%A7a%3Bduas";
    let req = Request::builder()
        .method(Method::POST)
        .uri("/ordens/materiais")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.as_bytes().to_vec()))
        .unwrap();

    match handle(req, &api) {
        Err(ServerError::BadRequest(msg)) => assert!(msg.contains("quantidade")),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[test]
fn orders_page_surfaces_backend_failure_as_api_error() {
    let api = offline_api();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/ordens")
        .body(Body::empty())
        .unwrap();

    match handle(req, &api) {
        Err(ServerError::Api(_)) => {}
        other => panic!("expected Api error, got {other:?}"),
    }
}
