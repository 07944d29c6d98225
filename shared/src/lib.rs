use serde::{Deserialize, Serialize};

mod protocol;
pub use protocol::{
    AddCommentRequest, ApiRequest, DeleteMovieRequest, HttpMethod, ListCommentsRequest,
    ListMoviesRequest, UpdateMovieRequest,
};

#[cfg(test)]
mod tests;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 远程目录服务的基础 URL
pub const API_BASE_URL: &str = "https://api-two-myu4.onrender.com";

/// 注册成功时服务端返回的 message 字段值
pub const MSG_REGISTERED: &str = "Registered successfully";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 影片记录
///
/// 由远程服务持有，客户端只保留每次渲染的只读副本。
/// `_id` 是服务端生成的主键。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub description: String,
    // 列表接口会内嵌评论，但旧版本服务可能省略该字段
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// 影片评论，按提交顺序追加，不支持编辑或删除
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment: String,
}

/// 会话令牌的载荷段
///
/// 仅做客户端解码展示，不验证签名；缺失字段按默认值处理。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,
}

// =========================================================
// 请求 / 响应载荷 (Payloads)
// =========================================================

/// 新建或更新影片时提交的字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePayload {
    pub title: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录成功的响应，`access` 即 Bearer 令牌
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "mobileNo")]
    pub mobile_no: String,
    pub password: String,
}

impl RegisterRequest {
    /// 客户端预检：校验失败的表单不会发起任何请求
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::EmptyField(field));
            }
        }
        let mobile = self.mobile_no.trim();
        if mobile.len() != 11 {
            return Err(ValidationError::MobileLength);
        }
        if !mobile.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::MobileNotDigits);
        }
        Ok(())
    }
}

/// 注册表单的校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField(&'static str),
    MobileLength,
    MobileNotDigits,
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "字段 {} 不能为空", field),
            ValidationError::MobileLength => write!(f, "手机号必须为 11 位"),
            ValidationError::MobileNotDigits => write!(f, "手机号只能包含数字"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// 通用的 `{ "message": ... }` 响应体，失败响应也使用同一结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    #[serde(default)]
    pub movies: Vec<Movie>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentListResponse {
    #[serde(default)]
    pub comments: Vec<Comment>,
}
