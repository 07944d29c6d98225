//! API 客户端模块
//!
//! 面向远程目录服务的一次性请求客户端：附加 `Content-Type` 与
//! Bearer 令牌，按 [`ApiRequest`] 元数据分发，把所有失败折叠成
//! [`ApiError`]。无重试、无超时、无缓存。

use crate::web::{HttpClient, HttpError, HttpRequestBuilder};
use movieportal_shared::{
    AddCommentRequest, ApiRequest, Comment, DeleteMovieRequest, HttpMethod, ListCommentsRequest,
    ListMoviesRequest, LoginRequest, MessageResponse, Movie, MoviePayload, RegisterRequest,
    UpdateMovieRequest,
};

/// API 调用错误
///
/// 网络失败、非 2xx 应用错误、响应解析失败三类；
/// `Display` 输出直接用于用户可见的通知。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 请求未到达服务端或传输中断
    Network(String),
    /// 服务端以非 2xx 状态响应，message 取自响应体
    Api { status: u16, message: String },
    /// 2xx 响应但载荷无法解析
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Api { message, .. } => write!(f, "{}", message),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::RequestBuildFailed(msg) | HttpError::NetworkError(msg) => {
                ApiError::Network(msg)
            }
            HttpError::ResponseParseFailed(msg) => ApiError::Decode(msg),
        }
    }
}

/// 从失败响应体提取用户可读的错误信息
///
/// 优先使用载荷的 `message` 字段，否则退回到带状态码的通用文案。
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<MessageResponse>(body)
        .ok()
        .map(|m| m.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("请求失败 (HTTP {})", status))
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogApi {
    base_url: String,
    token: Option<String>,
}

impl CatalogApi {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送请求并返回原始响应体
    ///
    /// 非 2xx 响应在此折叠为 [`ApiError::Api`]，调用方拿到的
    /// 要么是成功响应体，要么是可直接展示的错误。
    async fn dispatch<R: ApiRequest>(&self, request: &R) -> Result<String, ApiError> {
        let url = self.url(&request.path());
        let mut builder: HttpRequestBuilder = match R::METHOD {
            HttpMethod::Get => HttpClient::get(&url),
            HttpMethod::Post => HttpClient::post(&url),
            HttpMethod::Patch => HttpClient::patch(&url),
            HttpMethod::Delete => HttpClient::delete(&url),
        };

        builder = builder.header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        if R::METHOD.has_body() {
            let body = serde_json::to_string(request)
                .map_err(|e| ApiError::Network(format!("请求序列化失败: {}", e)))?;
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let ok = response.ok();
        let text = response.text().await?;

        if !ok {
            return Err(ApiError::Api {
                status,
                message: error_message(status, &text),
            });
        }
        Ok(text)
    }

    /// 发送请求并解析为端点声明的响应类型
    async fn call<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let text = self.dispatch(request).await?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 登录，成功时返回 Bearer 令牌
    pub async fn login(&self, email: String, password: String) -> Result<String, ApiError> {
        let response = self.call(&LoginRequest { email, password }).await?;
        Ok(response.access)
    }

    /// 注册新用户，返回服务端的 message
    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.call(request).await
    }

    /// 获取影片列表
    pub async fn get_movies(&self) -> Result<Vec<Movie>, ApiError> {
        Ok(self.call(&ListMoviesRequest).await?.movies)
    }

    /// 添加影片
    pub async fn add_movie(&self, payload: &MoviePayload) -> Result<(), ApiError> {
        self.dispatch(payload).await.map(|_| ())
    }

    /// 更新影片
    pub async fn update_movie(&self, id: &str, movie: MoviePayload) -> Result<(), ApiError> {
        let request = UpdateMovieRequest {
            id: id.to_string(),
            movie,
        };
        self.dispatch(&request).await.map(|_| ())
    }

    /// 删除影片
    pub async fn delete_movie(&self, id: &str) -> Result<(), ApiError> {
        let request = DeleteMovieRequest { id: id.to_string() };
        self.dispatch(&request).await.map(|_| ())
    }

    /// 追加评论
    pub async fn add_comment(&self, id: &str, comment: String) -> Result<(), ApiError> {
        let request = AddCommentRequest {
            id: id.to_string(),
            comment,
        };
        self.dispatch(&request).await.map(|_| ())
    }

    /// 获取指定影片的评论
    pub async fn get_comments(&self, id: &str) -> Result<Vec<Comment>, ApiError> {
        let request = ListCommentsRequest { id: id.to_string() };
        Ok(self.call(&request).await?.comments)
    }
}

#[cfg(test)]
mod tests;
