use crate::auth::{SessionRole, logout, use_auth};
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn AppNavbar() -> impl IntoView {
    let auth = use_auth();
    let role = auth.role_signal();

    let on_logout = move |_| {
        // 重定向由路由服务的角色监听处理
        logout(&auth);
    };

    view! {
        <div class="navbar bg-base-100 shadow-lg px-4 sticky top-0 z-40">
            <div class="flex-1 gap-2">
                <Link to="/" class="btn btn-ghost text-xl">"Movie Portal"</Link>
                <Link to="/" class="btn btn-ghost btn-sm">"首页"</Link>
                <Show when=move || role.get() != SessionRole::Anonymous>
                    <Link to="/movies" class="btn btn-ghost btn-sm">
                        {move || if role.get() == SessionRole::Admin { "管理面板" } else { "影片目录" }}
                    </Link>
                </Show>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=move || role.get() != SessionRole::Anonymous
                    fallback=|| view! {
                        <Link to="/login" class="btn btn-outline btn-sm me-2">"登录"</Link>
                        <Link to="/register" class="btn btn-primary btn-sm">"注册"</Link>
                    }
                >
                    <span class="badge badge-neutral hidden md:inline-flex">
                        {move || auth.state.get().identity.map(|i| i.email).unwrap_or_default()}
                    </span>
                    <button on:click=on_logout class="btn btn-outline btn-error btn-sm ms-2">
                        "退出登录"
                    </button>
                </Show>
            </div>
        </div>
    }
}
