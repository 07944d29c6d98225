use crate::auth::{SessionRole, use_auth};
use crate::web::router::Link;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let role = auth.role_signal();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">"Movie Portal"</h1>
                    <p class="py-6 text-base-content/70">
                        "在这里浏览影片目录、查看并发表评论。登录后可访问更多功能。"
                    </p>
                    {move || if role.get() == SessionRole::Anonymous {
                        view! {
                            <div class="flex justify-center gap-2">
                                <Link to="/login" class="btn btn-primary">"登录"</Link>
                                <Link to="/register" class="btn btn-outline">"注册"</Link>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <Link to="/movies" class="btn btn-primary">"进入影片目录"</Link>
                        }.into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
