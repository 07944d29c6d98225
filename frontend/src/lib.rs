//! MoviePortal 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎，注入角色信号实现守卫）
//! - `auth`: 会话状态管理（令牌持久化与解码）
//! - `api`: 远程目录服务客户端
//! - `notify`: 统一的通知上报接口
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod admin_dashboard;
    pub mod home;
    pub mod login;
    mod movie_dialog;
    pub mod movies;
    pub mod navbar;
    pub mod register;
    pub mod user_dashboard;
}
mod notify;

use crate::auth::{AuthContext, init_auth};
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::movies::MoviesPage;
use crate::components::navbar::AppNavbar;
use crate::components::register::RegisterPage;
use crate::notify::{NotificationToast, NotifyContext};

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::{HttpClient, HttpError, HttpRequestBuilder};
    pub use storage::LocalStorage;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Movies => view! { <MoviesPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"页面未找到"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文并从 LocalStorage 恢复令牌
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 2. 通知上下文：所有调用点共用一个 toast
    let notify_ctx = NotifyContext::new();
    provide_context(notify_ctx);

    // 3. 获取角色信号，用于注入路由服务（解耦）
    let role = auth_ctx.role_signal();

    view! {
        // 4. 路由器组件：注入角色信号实现守卫
        <Router role=role>
            <AppNavbar />
            <NotificationToast />
            <main class="min-h-screen bg-base-200">
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
