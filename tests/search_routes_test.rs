// ABOUTME: Integration tests for the recipe search and lookup endpoints
// ABOUTME: Verifies filtering semantics, annotation, and the error-object contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recette Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![doc = "Recipe route integration tests"]

mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

#[tokio::test]
async fn test_root_banner() -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();
    let app = common::test_app(resources);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("recipe"));

    Ok(())
}

#[tokio::test]
async fn test_search_by_ingredient_substring() -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();
    let app = common::test_app(resources);

    // Querying 飯 finds 白飯糰 through its 白飯 ingredient
    let response = app
        .oneshot(
            Request::builder()
                .uri("/search?ingredient=%E9%A3%AF")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["fuzzy_match_count"], 1);
    assert_eq!(body["results"][0]["name"], "白飯糰");
    assert_eq!(body["results"][0]["is_favorite"], false);
    assert_eq!(body["ingredients_query"][0], "飯");

    Ok(())
}

#[tokio::test]
async fn test_search_multi_term_is_and() -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();

    // 番茄 and 蛋 both hit 番茄炒蛋
    let response = common::test_app(resources.clone())
        .oneshot(
            Request::builder()
                .uri("/search?ingredient=%E7%95%AA%E8%8C%84&ingredient=%E8%9B%8B")
                .body(Body::empty())?,
        )
        .await?;
    let body = common::body_json(response).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["name"], "番茄炒蛋");
    assert_eq!(body["fuzzy_match_count"], 2);

    // 番茄 and 飯 never co-occur: AND excludes everything
    let response = common::test_app(resources)
        .oneshot(
            Request::builder()
                .uri("/search?ingredient=%E7%95%AA%E8%8C%84&ingredient=%E9%A3%AF")
                .body(Body::empty())?,
        )
        .await?;
    let body = common::body_json(response).await;
    assert_eq!(body["count"], 0);
    assert_eq!(body["fuzzy_match_count"], 0);

    Ok(())
}

#[tokio::test]
async fn test_search_category_alias() -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();

    // "home" matches both "home" and "家常菜" categories
    let response = common::test_app(resources.clone())
        .oneshot(
            Request::builder()
                .uri("/search?category=home")
                .body(Body::empty())?,
        )
        .await?;
    let body = common::body_json(response).await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["category"], "home");
    assert_eq!(body["fuzzy_match_count"], 0);
    assert!(body["ingredients_query"].is_null());

    // "dessert" matches both "dessert" and "甜點"
    let response = common::test_app(resources)
        .oneshot(
            Request::builder()
                .uri("/search?category=dessert")
                .body(Body::empty())?,
        )
        .await?;
    let body = common::body_json(response).await;
    assert_eq!(body["count"], 2);

    Ok(())
}

#[tokio::test]
async fn test_search_category_and_ingredient() -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();

    let response = common::test_app(resources)
        .oneshot(
            Request::builder()
                .uri("/search?category=dessert&ingredient=%E5%A5%B6")
                .body(Body::empty())?,
        )
        .await?;
    let body = common::body_json(response).await;

    // Only 芒果布丁 (鮮奶) is a dessert with an ingredient containing 奶
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["name"], "芒果布丁");

    Ok(())
}

#[tokio::test]
async fn test_list_returns_everything_annotated() -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();
    resources.favorites.add("白飯糰").await?;

    let response = common::test_app(resources)
        .oneshot(Request::builder().uri("/list").body(Body::empty())?)
        .await?;
    let body = common::body_json(response).await;

    assert_eq!(body["count"], 4);
    let recipes = body["recipes"].as_array().unwrap();
    for recipe in recipes {
        let expected = recipe["name"] == "白飯糰";
        assert_eq!(recipe["is_favorite"], expected);
    }

    Ok(())
}

#[tokio::test]
async fn test_random_draws_a_known_recipe() -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();
    let names: Vec<String> = common::sample_recipes()
        .into_iter()
        .map(|r| r.name)
        .collect();

    let response = common::test_app(resources)
        .oneshot(Request::builder().uri("/random").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(names.contains(&body["name"].as_str().unwrap().to_owned()));
    assert!(body["is_favorite"].is_boolean());

    Ok(())
}

#[tokio::test]
async fn test_random_on_empty_store_reports_error_object() -> Result<(), Box<dyn std::error::Error>>
{
    let (resources, _dir) = common::test_resources_with(Vec::new());

    let response = common::test_app(resources)
        .oneshot(Request::builder().uri("/random").body(Body::empty())?)
        .await?;

    // Error-object convention: still a 200
    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("no recipes"));

    Ok(())
}

#[tokio::test]
async fn test_detail_exact_match() -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();

    let response = common::test_app(resources)
        .oneshot(
            Request::builder()
                .uri("/detail?name=%E7%99%BD%E9%A3%AF%E7%B3%B0")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["name"], "白飯糰");
    assert_eq!(body["category"], "home");
    assert_eq!(body["is_favorite"], false);

    Ok(())
}

#[tokio::test]
async fn test_detail_unknown_name_is_error_object_not_404(
) -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();

    // 不存在的菜
    let response = common::test_app(resources)
        .oneshot(
            Request::builder()
                .uri("/detail?name=%E4%B8%8D%E5%AD%98%E5%9C%A8%E7%9A%84%E8%8F%9C")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("不存在的菜"));

    Ok(())
}

#[tokio::test]
async fn test_health_endpoint() -> Result<(), Box<dyn std::error::Error>> {
    let (resources, _dir) = common::test_resources();

    let response = common::test_app(resources)
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["status"], "healthy");

    Ok(())
}
