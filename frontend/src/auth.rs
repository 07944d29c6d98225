//! 会话模块
//!
//! 管理当前会话（令牌 + 解码出的身份），与路由系统解耦。
//! 路由服务通过注入的角色信号消费会话状态。
//!
//! 令牌只做客户端解码（不验证签名），解码失败一律降级为匿名会话。

use crate::api::CatalogApi;
use crate::web::LocalStorage;
use base64::{Engine as _, engine::general_purpose};
use leptos::prelude::*;
use movieportal_shared::{API_BASE_URL, TokenClaims};

const STORAGE_TOKEN_KEY: &str = "movieportal_token";

/// 解码后的会话身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub is_admin: bool,
}

/// 会话角色，路由守卫与视图选择的唯一依据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionRole {
    #[default]
    Anonymous,
    User,
    Admin,
}

/// 会话状态
///
/// 不变式：`api`（持有令牌）与 `identity` 要么同时存在，要么同时缺失。
#[derive(Clone, Default)]
pub struct AuthState {
    /// API 客户端实例（仅在认证成功后存在）
    pub api: Option<CatalogApi>,
    /// 解码出的身份
    pub identity: Option<Identity>,
}

impl AuthState {
    pub fn role(&self) -> SessionRole {
        match &self.identity {
            None => SessionRole::Anonymous,
            Some(identity) if identity.is_admin => SessionRole::Admin,
            Some(_) => SessionRole::User,
        }
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
/// 写入只发生在本模块的 login/logout/init_auth。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置会话状态（写入）
    set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的会话上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取角色信号（用于路由服务注入）
    pub fn role_signal(&self) -> Signal<SessionRole> {
        let state = self.state;
        Signal::derive(move || state.get().role())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化会话状态
///
/// 进程启动时从 LocalStorage 恢复令牌；解码失败时清除残留令牌并
/// 保持匿名状态。
pub fn init_auth(ctx: &AuthContext) {
    let Some(token) = LocalStorage::get(STORAGE_TOKEN_KEY) else {
        return;
    };
    match parse_token(&token) {
        Some(claims) => {
            ctx.set_state.set(session_state(token, claims));
            web_sys::console::log_1(&"[Auth] Session restored from storage.".into());
        }
        None => {
            LocalStorage::delete(STORAGE_TOKEN_KEY);
            web_sys::console::warn_1(&"[Auth] Stored token rejected, staying anonymous.".into());
        }
    }
}

/// 登录并持久化令牌
///
/// # Returns
/// 令牌是否被接受。格式错误的令牌不会建立会话。
pub fn login(ctx: &AuthContext, token: String) -> bool {
    match parse_token(&token) {
        Some(claims) => {
            LocalStorage::set(STORAGE_TOKEN_KEY, &token);
            ctx.set_state.set(session_state(token, claims));
            true
        }
        None => false,
    }
}

/// 注销并清除状态
///
/// 导航由路由服务的角色监听自动处理。
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_TOKEN_KEY);
    ctx.set_state.set(AuthState::default());
}

fn session_state(token: String, claims: TokenClaims) -> AuthState {
    AuthState {
        api: Some(CatalogApi::new(API_BASE_URL.to_string(), Some(token))),
        identity: Some(Identity {
            email: claims.email,
            is_admin: claims.is_admin,
        }),
    }
}

/// 解析三段式令牌的载荷段
///
/// 纯函数：按 `.` 切分，对中间段做 base64url 解码（带不带填充都接受），
/// 再按 JSON 解析。任何一步失败都返回 `None`，绝不 panic。
pub fn parse_token(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

#[cfg(test)]
mod tests;
