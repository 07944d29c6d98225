//! 端点协议定义
//!
//! 每个远程端点由一个请求类型描述：请求体即类型本身的序列化结果，
//! 路径和方法通过 [`ApiRequest`] 关联。路径中的资源 id 不参与序列化，
//! 由 `path()` 拼接进 URL。

use crate::{
    CommentListResponse, LoginRequest, LoginResponse, MessageResponse, MovieListResponse,
    MoviePayload, RegisterRequest,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    /// 该方法是否携带 JSON 请求体
    pub const fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Patch)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// The URL path, with any resource id interpolated.
    fn path(&self) -> String;
}

// =========================================================
// Request Definitions
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "users/login".to_string()
    }
}

impl ApiRequest for RegisterRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "users/register".to_string()
    }
}

/// 拉取完整影片列表
#[derive(Debug, Serialize)]
pub struct ListMoviesRequest;

impl ApiRequest for ListMoviesRequest {
    type Response = MovieListResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "movies/getMovies".to_string()
    }
}

/// 新建影片直接以 [`MoviePayload`] 作为请求体
impl ApiRequest for MoviePayload {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "movies/addMovie".to_string()
    }
}

/// 更新指定影片，id 只出现在路径中
#[derive(Debug, Serialize)]
pub struct UpdateMovieRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(flatten)]
    pub movie: MoviePayload,
}

impl ApiRequest for UpdateMovieRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Patch;

    fn path(&self) -> String {
        format!("movies/updateMovie/{}", self.id)
    }
}

/// 删除指定影片；对已删除 id 的重复删除由服务端以错误响应报告
#[derive(Debug, Serialize)]
pub struct DeleteMovieRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for DeleteMovieRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("movies/deleteMovie/{}", self.id)
    }
}

/// 向指定影片追加一条评论
#[derive(Debug, Serialize)]
pub struct AddCommentRequest {
    #[serde(skip)]
    pub id: String,
    pub comment: String,
}

impl ApiRequest for AddCommentRequest {
    type Response = MessageResponse;
    const METHOD: HttpMethod = HttpMethod::Patch;

    fn path(&self) -> String {
        format!("movies/addComment/{}", self.id)
    }
}

/// 拉取指定影片的评论列表
#[derive(Debug, Serialize)]
pub struct ListCommentsRequest {
    #[serde(skip)]
    pub id: String,
}

impl ApiRequest for ListCommentsRequest {
    type Response = CommentListResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("movies/getComments/{}", self.id)
    }
}
