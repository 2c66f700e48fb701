use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_single_byte() {
    assert_eq!(bytes_to_hex(&[0xff]), "ff");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xda, 0x7b, 0x12]), "da7b12");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
}

#[test]
fn generate_token_all_valid_hex() {
    let token = generate_token();
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// SessionUser
// =============================================================================

#[test]
fn session_user_serializes_expected_fields() {
    let user = SessionUser {
        id: Uuid::nil(),
        name: "alice".into(),
        email: Some("alice@example.com".into()),
        avatar_url: None,
    };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["name"], "alice");
    assert_eq!(json["email"], "alice@example.com");
    assert!(json["avatar_url"].is_null());
}

#[test]
fn session_user_clone_preserves_identity() {
    let user = SessionUser {
        id: Uuid::nil(),
        name: "bob".into(),
        email: None,
        avatar_url: Some("https://img.example/b.png".into()),
    };
    let copy = user.clone();
    assert_eq!(copy.id, user.id);
    assert_eq!(copy.avatar_url, user.avatar_url);
}

// =============================================================================
// Live-database rotation behavior
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::super::*;
    use crate::state::test_helpers::live_pool;

    #[tokio::test]
    async fn rotate_consumes_old_token() {
        let pool = live_pool().await;
        let user_id = seed_user(&pool).await;
        let token = create_session(&pool, user_id).await.unwrap();

        let rotated = rotate_session(&pool, &token).await.unwrap();
        let (new_token, user) = rotated.expect("fresh session should rotate");
        assert_ne!(new_token, token);
        assert_eq!(user.id, user_id);

        // Old token is gone for both validation and a second rotation.
        assert!(validate_session(&pool, &token).await.unwrap().is_none());
        assert!(rotate_session(&pool, &token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rotated_token_authenticates() {
        let pool = live_pool().await;
        let user_id = seed_user(&pool).await;
        let token = create_session(&pool, user_id).await.unwrap();

        let (new_token, _) = rotate_session(&pool, &token).await.unwrap().unwrap();
        let user = validate_session(&pool, &new_token).await.unwrap();
        assert_eq!(user.unwrap().id, user_id);
    }

    async fn seed_user(pool: &sqlx::PgPool) -> Uuid {
        let row = sqlx::query("INSERT INTO users (name) VALUES ('rotation test') RETURNING id")
            .fetch_one(pool)
            .await
            .unwrap();
        use sqlx::Row;
        row.get("id")
    }
}
