use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn forge_token(payload_json: &str) -> String {
    let encode = |s: &str| general_purpose::URL_SAFE_NO_PAD.encode(s.as_bytes());
    format!(
        "{}.{}.{}",
        encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        encode(payload_json),
        encode("signature")
    )
}

// =========================================================
// parse_token
// =========================================================

#[test]
fn parse_token_extracts_email_and_admin_flag() {
    let token = forge_token(r#"{"email":"a@b.com","isAdmin":true}"#);
    let claims = parse_token(&token).unwrap();
    assert_eq!(claims.email, "a@b.com");
    assert!(claims.is_admin);
}

#[test]
fn parse_token_defaults_missing_claims() {
    let token = forge_token("{}");
    let claims = parse_token(&token).unwrap();
    assert_eq!(claims.email, "");
    assert!(!claims.is_admin);
}

#[test]
fn parse_token_accepts_padded_payload() {
    // 有些签发方会保留 base64 填充
    let payload = general_purpose::URL_SAFE.encode(r#"{"email":"pad@b.com","isAdmin":false}"#);
    let token = format!("h.{}.s", payload);
    let claims = parse_token(&token).unwrap();
    assert_eq!(claims.email, "pad@b.com");
}

#[test]
fn parse_token_rejects_wrong_segment_count() {
    assert!(parse_token("").is_none());
    assert!(parse_token("only-one-segment").is_none());
    assert!(parse_token("two.segments").is_none());
    assert!(parse_token("a.b.c.d").is_none());
}

#[test]
fn parse_token_rejects_invalid_base64() {
    assert!(parse_token("header.$$not-base64$$.sig").is_none());
}

#[test]
fn parse_token_rejects_invalid_json_payload() {
    let payload = general_purpose::URL_SAFE_NO_PAD.encode("not json at all");
    assert!(parse_token(&format!("h.{}.s", payload)).is_none());
}

#[test]
fn parse_token_rejects_non_utf8_payload() {
    let payload = general_purpose::URL_SAFE_NO_PAD.encode([0xff_u8, 0xfe, 0x00, 0x01]);
    assert!(parse_token(&format!("h.{}.s", payload)).is_none());
}

// =========================================================
// 角色推导
// =========================================================

#[test]
fn anonymous_state_has_anonymous_role() {
    assert_eq!(AuthState::default().role(), SessionRole::Anonymous);
}

#[test]
fn identity_determines_role() {
    let admin = session_state(
        "t".to_string(),
        TokenClaims {
            email: "admin@b.com".to_string(),
            is_admin: true,
        },
    );
    assert_eq!(admin.role(), SessionRole::Admin);

    let user = session_state(
        "t".to_string(),
        TokenClaims {
            email: "user@b.com".to_string(),
            is_admin: false,
        },
    );
    assert_eq!(user.role(), SessionRole::User);
}

#[test]
fn session_state_upholds_invariant() {
    // api 与 identity 同时存在
    let state = session_state(
        "token".to_string(),
        TokenClaims {
            email: "a@b.com".to_string(),
            is_admin: false,
        },
    );
    assert_eq!(state.api.is_some(), state.identity.is_some());
    assert_eq!(state.identity.unwrap().email, "a@b.com");
}
