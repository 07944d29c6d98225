use crate::api::CatalogApi;
use crate::notify::use_notify;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use movieportal_shared::{API_BASE_URL, MSG_REGISTERED, RegisterRequest};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notify = use_notify();
    let router = use_router();

    // 表单字段
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (mobile_no, set_mobile_no) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    let build_request = move || RegisterRequest {
        first_name: first_name.get(),
        last_name: last_name.get(),
        email: email.get(),
        mobile_no: mobile_no.get(),
        password: password.get(),
    };

    // 校验不通过时提交按钮保持禁用，表单不会触达网络
    let is_valid = Memo::new(move |_| build_request().validate().is_ok());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = build_request();
        if let Err(e) = request.validate() {
            notify.error(e.to_string());
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let api = CatalogApi::new(API_BASE_URL.to_string(), None);
            match api.register(&request).await {
                Ok(response) if response.message == MSG_REGISTERED => {
                    notify.success("注册成功，请登录");
                    router.navigate("/login");
                }
                Ok(response) => {
                    // 2xx 但不是约定的成功文案，按失败处理
                    let message = if response.message.is_empty() {
                        "注册失败".to_string()
                    } else {
                        response.message
                    };
                    notify.error(message);
                }
                Err(e) => notify.error(e.to_string()),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"创建账号"</h1>
                    <p class="text-base-content/70">"填写以下信息完成注册"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="form-control">
                                <label class="label" for="first_name">
                                    <span class="label-text">"名"</span>
                                </label>
                                <input
                                    id="first_name"
                                    type="text"
                                    on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                    prop:value=first_name
                                    class="input input-bordered w-full"
                                    required
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="last_name">
                                    <span class="label-text">"姓"</span>
                                </label>
                                <input
                                    id="last_name"
                                    type="text"
                                    on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                    prop:value=last_name
                                    class="input input-bordered w-full"
                                    required
                                />
                            </div>
                        </div>

                        <div class="form-control">
                            <label class="label" for="reg_email">
                                <span class="label-text">"邮箱"</span>
                            </label>
                            <input
                                id="reg_email"
                                type="email"
                                placeholder="you@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="mobile_no">
                                <span class="label-text">"手机号"</span>
                            </label>
                            <input
                                id="mobile_no"
                                type="text"
                                maxlength="11"
                                placeholder="11 位数字"
                                on:input=move |ev| set_mobile_no.set(event_target_value(&ev))
                                prop:value=mobile_no
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="reg_password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="reg_password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <div class="form-control mt-6">
                            <button
                                class="btn btn-primary"
                                disabled=move || !is_valid.get() || is_submitting.get()
                            >
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "提交中..." }.into_any()
                                } else {
                                    "注册".into_any()
                                }}
                            </button>
                        </div>
                        <div class="mt-3 text-center text-sm text-base-content/70">
                            "已有账号？" <Link to="/login" class="link link-primary">"前往登录"</Link>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
