//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variable: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a user and log in, returning the created user and a token
async fn register_and_login(server: &TestServer) -> (CreateUserRequest, UserResponse, String) {
    let request = CreateUserRequest::unique();
    let response = server.post("/api/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let login = LoginRequest::from_create(&request);
    let response = server.post("/api/users/login", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    (request, user, token.token)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(user.name, request.name);
    assert_eq!(user.email, request.email);
    assert!(user.id > 0);
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    // First registration
    server.post("/api/users", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/users", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let request = CreateUserRequest::unique();
    server.post("/api/users", &request).await.unwrap();

    // Login
    let login = LoginRequest::from_create(&request);
    let response = server.post("/api/users/login", &login).await.unwrap();
    let token: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!token.token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateUserRequest::unique();
    server.post("/api/users", &request).await.unwrap();

    let login = LoginRequest {
        email: request.email.clone(),
        password: format!("{}x", request.password),
    };
    let response = server.post("/api/users/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateUserRequest::unique();
    server.post("/api/users", &request).await.unwrap();

    // Unknown account and wrong password must be indistinguishable
    let unknown = server
        .post(
            "/api/users/login",
            &LoginRequest {
                email: "nonexistent@example.com".to_string(),
                password: "whatever".to_string(),
            },
        )
        .await
        .unwrap();
    let wrong = server
        .post(
            "/api/users/login",
            &LoginRequest {
                email: request.email.clone(),
                password: "wrong".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        unknown.text().await.unwrap(),
        wrong.text().await.unwrap()
    );
}

#[tokio::test]
async fn test_login_empty_fields_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(
            "/api/users/login",
            &LoginRequest {
                email: String::new(),
                password: "password123".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post(
            "/api/users/login",
            &LoginRequest {
                email: "john@example.com".to_string(),
                password: String::new(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_tampered_token_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = register_and_login(&server).await;

    // Flip the first character of the signature segment (the trailing
    // characters carry padding bits some decoders ignore)
    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    assert_eq!(parts.len(), 3);
    let first = parts[2].remove(0);
    parts[2].insert(0, if first == 'A' { 'B' } else { 'A' });
    let tampered = parts.join(".");

    let response = server.get_auth("/api/users", &tampered).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_protected_route_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/users").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get("/api/products").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// User CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_get_user_by_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user, token) = register_and_login(&server).await;

    let response = server
        .get_auth(&format!("/api/users/{}", user.id), &token)
        .await
        .unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.email, user.email);
}

#[tokio::test]
async fn test_list_users_includes_registered() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user, token) = register_and_login(&server).await;

    let response = server.get_auth("/api/users", &token).await.unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(users.iter().any(|u| u.id == user.id));
}

#[tokio::test]
async fn test_update_user_name_and_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user, token) = register_and_login(&server).await;

    let new_email = format!("updated{}@example.com", unique_suffix());
    let update = UpdateUserRequest {
        name: "Updated Name".to_string(),
        email: new_email.clone(),
        password: None,
    };
    let response = server
        .put_auth(&format!("/api/users/{}", user.id), &token, &update)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.name, "Updated Name");
    assert_eq!(updated.email, new_email);
}

#[tokio::test]
async fn test_update_user_password_changes_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, user, token) = register_and_login(&server).await;

    let update = UpdateUserRequest {
        name: request.name.clone(),
        email: request.email.clone(),
        password: Some("newpassword123".to_string()),
    };
    let response = server
        .put_auth(&format!("/api/users/{}", user.id), &token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Old password no longer works
    let response = server
        .post("/api/users/login", &LoginRequest::from_create(&request))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    // New password does
    let response = server
        .post(
            "/api/users/login",
            &LoginRequest {
                email: request.email.clone(),
                password: "newpassword123".to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_delete_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, user, token) = register_and_login(&server).await;

    let response = server
        .delete_auth(&format!("/api/users/{}", user.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The token stays valid (stateless), but the record is gone
    let response = server
        .get_auth(&format!("/api/users/{}", user.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Product CRUD Tests
// ============================================================================

#[tokio::test]
async fn test_product_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = register_and_login(&server).await;

    // Create
    let request = CreateProductRequest::unique();
    let response = server.post_auth("/api/products", &token, &request).await.unwrap();
    let product: ProductResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(product.name, request.name);

    // Read
    let response = server
        .get_auth(&format!("/api/products/{}", product.id), &token)
        .await
        .unwrap();
    let fetched: ProductResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, product.id);

    // Update
    let update = UpdateProductRequest {
        name: "Updated Product".to_string(),
        price: 149.99,
    };
    let response = server
        .put_auth(&format!("/api/products/{}", product.id), &token, &update)
        .await
        .unwrap();
    let updated: ProductResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, "Updated Product");
    assert!((updated.price - 149.99).abs() < f64::EPSILON);

    // List
    let response = server.get_auth("/api/products", &token).await.unwrap();
    let products: Vec<ProductResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(products.iter().any(|p| p.id == product.id));

    // Delete
    let response = server
        .delete_auth(&format!("/api/products/{}", product.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/products/{}", product.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_missing_product_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, _, token) = register_and_login(&server).await;

    let response = server
        .get_auth("/api/products/999999999", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_create_product_requires_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateProductRequest::unique();
    let response = server.post("/api/products", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
