use crate::api::CatalogApi;
use crate::auth::{login, use_auth};
use crate::notify::use_notify;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use movieportal_shared::API_BASE_URL;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notify();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.trim().is_empty() || password.is_empty() {
            set_error_msg.set(Some("请填写邮箱和密码".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            // 登录端点无需令牌
            let api = CatalogApi::new(API_BASE_URL.to_string(), None);
            match api.login(email, password).await {
                Ok(token) => {
                    set_is_submitting.set(false);
                    if login(&auth, token) {
                        // 路由服务监听角色变化后自动跳转到影片页
                        notify.success("登录成功");
                    } else {
                        set_error_msg.set(Some("服务器返回的凭证无效".to_string()));
                    }
                }
                Err(e) => {
                    set_is_submitting.set(false);
                    set_error_msg.set(Some(e.to_string()));
                }
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"登录 Movie Portal"</h1>
                    <p class="text-base-content/70">"输入账号信息以浏览影片目录"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"邮箱"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "登录中..." }.into_any()
                                } else {
                                    "登录".into_any()
                                }}
                            </button>
                        </div>
                        <div class="mt-3 text-center text-sm text-base-content/70">
                            "还没有账号？" <Link to="/register" class="link link-primary">"立即注册"</Link>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
