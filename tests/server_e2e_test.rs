// ABOUTME: Real HTTP server end-to-end test over a spawned axum instance
// ABOUTME: Exercises the search plus favorites flow with an actual HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![doc = "Real server end-to-end tests"]

mod common;

use anyhow::Result;
use rand::Rng;
use std::net::TcpListener;
use std::time::Duration;
use tokio::time::sleep;

/// Check if a port is available
fn is_port_available(port: u16) -> bool {
    TcpListener::bind(format!("127.0.0.1:{port}")).is_ok()
}

/// Find an available port for testing
fn find_available_port() -> u16 {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let port = rng.gen_range(10000..60000);
        if is_port_available(port) {
            return port;
        }
    }
    panic!("Could not find an available port after 100 attempts");
}

#[tokio::test]
async fn test_search_and_favorites_flow_over_http() -> Result<()> {
    let (resources, _dir) = common::test_resources();
    let app = common::test_app(resources);
    let port = find_available_port();

    let _handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}"))
            .await
            .unwrap();
        axum::serve(listener, app).await.unwrap();
    });

    // Wait for server to be ready
    sleep(Duration::from_millis(200)).await;

    let client = reqwest::Client::new();
    let base = format!("http://127.0.0.1:{port}");

    // Search 飯, find 白飯糰 with one fuzzy hit
    let body: serde_json::Value = client
        .get(format!("{base}/search"))
        .query(&[("ingredient", "飯")])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["count"], 1);
    assert_eq!(body["fuzzy_match_count"], 1);
    assert_eq!(body["results"][0]["name"], "白飯糰");

    // Favorite it, then list favorites
    let body: serde_json::Value = client
        .post(format!("{base}/favorite"))
        .query(&[("name", "白飯糰")])
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["favorites_count"], 1);

    let body: serde_json::Value = client
        .get(format!("{base}/favorite"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(body["count"], 1);
    assert_eq!(body["favorites"][0]["name"], "白飯糰");

    // Unknown detail lookup stays an ordinary 200 with an error object
    let response = client
        .get(format!("{base}/detail"))
        .query(&[("name", "不存在的菜")])
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = response.json().await?;
    assert!(body["error"].as_str().unwrap().contains("不存在的菜"));

    Ok(())
}
