use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn valid_register() -> RegisterRequest {
    RegisterRequest {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        mobile_no: "09171234567".to_string(),
        password: "secret".to_string(),
    }
}

// =========================================================
// 领域模型序列化
// =========================================================

#[test]
fn movie_deserializes_mongo_id_field() {
    let json = r#"{
        "_id": "m1",
        "title": "Arrival",
        "director": "Denis Villeneuve",
        "year": 2016,
        "genre": "Sci-Fi",
        "description": "First contact."
    }"#;
    let movie: Movie = serde_json::from_str(json).unwrap();
    assert_eq!(movie.id, "m1");
    assert_eq!(movie.year, 2016);
    // 未携带 comments 字段时默认为空列表
    assert!(movie.comments.is_empty());
}

#[test]
fn movie_list_preserves_order_and_count() {
    let json = r#"{"movies": [
        {"_id": "a", "title": "A", "director": "d", "year": 2000, "genre": "g", "description": "x"},
        {"_id": "b", "title": "B", "director": "d", "year": 2001, "genre": "g", "description": "x"},
        {"_id": "c", "title": "C", "director": "d", "year": 2002, "genre": "g", "description": "x"}
    ]}"#;
    let list: MovieListResponse = serde_json::from_str(json).unwrap();
    assert_eq!(list.movies.len(), 3);
    let titles: Vec<&str> = list.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, ["A", "B", "C"]);
}

#[test]
fn empty_movie_list_payload_defaults() {
    let list: MovieListResponse = serde_json::from_str("{}").unwrap();
    assert!(list.movies.is_empty());
}

#[test]
fn token_claims_use_wire_field_names() {
    let claims: TokenClaims =
        serde_json::from_str(r#"{"email": "a@b.com", "isAdmin": true}"#).unwrap();
    assert_eq!(claims.email, "a@b.com");
    assert!(claims.is_admin);

    // 缺失字段退回默认值
    let claims: TokenClaims = serde_json::from_str("{}").unwrap();
    assert_eq!(claims.email, "");
    assert!(!claims.is_admin);
}

#[test]
fn register_request_serializes_camel_case() {
    let value = serde_json::to_value(valid_register()).unwrap();
    assert!(value.get("firstName").is_some());
    assert!(value.get("mobileNo").is_some());
    assert!(value.get("first_name").is_none());
}

// =========================================================
// 注册表单校验
// =========================================================

#[test]
fn validate_accepts_well_formed_registration() {
    assert_eq!(valid_register().validate(), Ok(()));
}

#[test]
fn validate_rejects_short_mobile_number() {
    let mut req = valid_register();
    req.mobile_no = "0917123456".to_string();
    assert_eq!(req.validate(), Err(ValidationError::MobileLength));
}

#[test]
fn validate_rejects_non_digit_mobile_number() {
    let mut req = valid_register();
    req.mobile_no = "0917x234567".to_string();
    assert_eq!(req.validate(), Err(ValidationError::MobileNotDigits));
}

#[test]
fn validate_rejects_blank_fields() {
    let mut req = valid_register();
    req.first_name = "   ".to_string();
    assert_eq!(req.validate(), Err(ValidationError::EmptyField("firstName")));

    let mut req = valid_register();
    req.password = String::new();
    assert_eq!(req.validate(), Err(ValidationError::EmptyField("password")));
}

// =========================================================
// 端点元数据
// =========================================================

#[test]
fn endpoint_paths_and_methods() {
    assert_eq!(ListMoviesRequest.path(), "movies/getMovies");
    assert_eq!(
        <ListMoviesRequest as ApiRequest>::METHOD,
        HttpMethod::Get
    );

    let update = UpdateMovieRequest {
        id: "abc123".to_string(),
        movie: sample_payload(),
    };
    assert_eq!(update.path(), "movies/updateMovie/abc123");
    assert_eq!(<UpdateMovieRequest as ApiRequest>::METHOD, HttpMethod::Patch);

    let delete = DeleteMovieRequest {
        id: "abc123".to_string(),
    };
    assert_eq!(delete.path(), "movies/deleteMovie/abc123");
    assert_eq!(<DeleteMovieRequest as ApiRequest>::METHOD, HttpMethod::Delete);

    let comments = ListCommentsRequest {
        id: "abc123".to_string(),
    };
    assert_eq!(comments.path(), "movies/getComments/abc123");
    assert_eq!(<LoginRequest as ApiRequest>::METHOD, HttpMethod::Post);
}

#[test]
fn body_presence_follows_method() {
    assert!(HttpMethod::Post.has_body());
    assert!(HttpMethod::Patch.has_body());
    assert!(!HttpMethod::Get.has_body());
    assert!(!HttpMethod::Delete.has_body());
}

#[test]
fn path_only_ids_are_not_serialized() {
    let req = AddCommentRequest {
        id: "m42".to_string(),
        comment: "great".to_string(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({"comment": "great"}));

    let update = UpdateMovieRequest {
        id: "m42".to_string(),
        movie: sample_payload(),
    };
    let value = serde_json::to_value(&update).unwrap();
    // flatten 之后只剩影片字段
    assert!(value.get("id").is_none());
    assert_eq!(value.get("title").unwrap(), "Heat");
}

fn sample_payload() -> MoviePayload {
    MoviePayload {
        title: "Heat".to_string(),
        director: "Michael Mann".to_string(),
        year: 1995,
        genre: "Crime".to_string(),
        description: "Cat and mouse in LA.".to_string(),
    }
}
