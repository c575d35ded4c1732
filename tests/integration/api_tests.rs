//! End-to-end tests against a running server
//!
//! They need a live instance on localhost:8080 with its database, and
//! network access to the Google Books API.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080";

/// Stable volume id used by the Google Books API documentation
const KNOWN_VOLUME_ID: &str = "zyTCAlFPjgYC";

/// Client that keeps cookies and leaves redirects to the tests
fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

/// Unique signup payload per test run
fn fresh_email(tag: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}+{}@example.org", tag, nanos)
}

async fn sign_up(client: &Client, email: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/signup", BASE_URL))
        .form(&[
            ("first_name", "Test"),
            ("last_name", "Reader"),
            ("email", email),
            ("password", password),
            ("confirm_password", password),
        ])
        .send()
        .await
        .expect("Failed to send signup request")
}

async fn log_in(client: &Client, email: &str, password: &str) -> reqwest::Response {
    client
        .post(format!("{}/login", BASE_URL))
        .form(&[("email", email), ("password", password)])
        .send()
        .await
        .expect("Failed to send login request")
}

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .expect("No Location header")
        .to_str()
        .expect("Bad Location header")
}

/// Decode the flash cookie value from a Set-Cookie header
fn flash_message(response: &reqwest::Response) -> Option<String> {
    let raw = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("flash="))?;
    let value = raw.strip_prefix("flash=")?.split(';').next()?;
    let json = BASE64.decode(value).ok()?;
    let flash: Value = serde_json::from_slice(&json).ok()?;
    Some(flash["message"].as_str()?.to_string())
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let response = client()
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_signup_then_login_establishes_session() {
    let client = client();
    let email = fresh_email("flow");

    let response = sign_up(&client, &email, "reading4fun").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = log_in(&client, &email, "reading4fun").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cookies: Vec<_> = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("session=")));

    // The session now opens protected pages
    let response = client
        .get(format!("{}/favourite", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_duplicate_signup_redirects_to_login() {
    let client = client();
    let email = fresh_email("dup");

    let response = sign_up(&client, &email, "reading4fun").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = sign_up(&client, &email, "reading4fun").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("Email already registered. Please log in.")
    );
}

#[tokio::test]
#[ignore]
async fn test_login_unknown_email_redirects_to_signup() {
    let response = log_in(&client(), &fresh_email("ghost"), "whatever").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/signup");
}

#[tokio::test]
#[ignore]
async fn test_login_wrong_password_does_not_reveal_account() {
    let client = client();
    let email = fresh_email("wrongpw");

    sign_up(&client, &email, "correct-horse").await;

    let response = log_in(&client, &email, "battery-staple").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(
        flash_message(&response).as_deref(),
        Some("Invalid email or password")
    );
}

#[tokio::test]
#[ignore]
async fn test_search_renders_results() {
    let client = client();
    let email = fresh_email("search");
    sign_up(&client, &email, "reading4fun").await;
    log_in(&client, &email, "reading4fun").await;

    let response = client
        .post(format!("{}/search", BASE_URL))
        .form(&[("query", "the lord of the rings")])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Search results"));
    assert!(body.contains("/receive/"));
}

#[tokio::test]
#[ignore]
async fn test_save_favourite_and_list_it() {
    let client = client();
    let email = fresh_email("fav");
    sign_up(&client, &email, "reading4fun").await;
    log_in(&client, &email, "reading4fun").await;

    let response = client
        .post(format!("{}/receive/{}", BASE_URL, KNOWN_VOLUME_ID))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = client
        .get(format!("{}/favourite", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    // Title, the flattened author list and the description all come
    // back from the stored row
    assert!(body.contains("The Google Story"));
    assert!(body.contains("David A. Vise, Mark Malseed"));
    assert!(body.contains("Sergey Brin"));
}

#[tokio::test]
#[ignore]
async fn test_favourites_are_per_account() {
    let owner = client();
    let owner_email = fresh_email("owner");
    sign_up(&owner, &owner_email, "reading4fun").await;
    log_in(&owner, &owner_email, "reading4fun").await;
    let response = owner
        .post(format!("{}/receive/{}", BASE_URL, KNOWN_VOLUME_ID))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    // A second account sees an empty list
    let other = client();
    let other_email = fresh_email("other");
    sign_up(&other, &other_email, "reading4fun").await;
    log_in(&other, &other_email, "reading4fun").await;

    let response = other
        .get(format!("{}/favourite", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("No favourites yet"));
}

#[tokio::test]
#[ignore]
async fn test_volume_page_renders_save_form() {
    let response = client()
        .get(format!("{}/receive/{}", BASE_URL, KNOWN_VOLUME_ID))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Save to favourites"));
}

#[tokio::test]
#[ignore]
async fn test_logout_drops_session() {
    let client = client();
    let email = fresh_email("logout");
    sign_up(&client, &email, "reading4fun").await;
    log_in(&client, &email, "reading4fun").await;

    let response = client
        .get(format!("{}/logout", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = client
        .get(format!("{}/favourite", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}
