use crate::auth::{SessionRole, use_auth};
use crate::components::admin_dashboard::AdminDashboard;
use crate::components::user_dashboard::UserDashboard;
use leptos::prelude::*;

/// 影片目录入口：按会话角色渲染对应面板
///
/// 匿名访问在路由守卫处已被重定向，这里只区分用户/管理员。
#[component]
pub fn MoviesPage() -> impl IntoView {
    let auth = use_auth();
    let role = auth.role_signal();

    move || match role.get() {
        SessionRole::Admin => view! { <AdminDashboard /> }.into_any(),
        _ => view! { <UserDashboard /> }.into_any(),
    }
}
