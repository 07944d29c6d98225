//! 通知模块
//!
//! 统一的消息上报接口：所有 API 调用失败（以及少数成功提示）都经由
//! 同一个 Context 进入同一个 toast，调用点不再各自弹框。

use leptos::prelude::*;
use std::time::Duration;

/// 一条待展示的通知
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

/// 通知上下文
#[derive(Clone, Copy)]
pub struct NotifyContext {
    notice: ReadSignal<Option<Notice>>,
    set_notice: WriteSignal<Option<Notice>>,
}

impl NotifyContext {
    pub fn new() -> Self {
        let (notice, set_notice) = signal(None);
        Self { notice, set_notice }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.set_notice.set(Some(Notice {
            text: text.into(),
            is_error: false,
        }));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.set_notice.set(Some(Notice {
            text: text.into(),
            is_error: true,
        }));
    }

    pub fn clear(&self) {
        self.set_notice.set(None);
    }

    fn notice(&self) -> ReadSignal<Option<Notice>> {
        self.notice
    }
}

impl Default for NotifyContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取通知上下文
pub fn use_notify() -> NotifyContext {
    use_context::<NotifyContext>().expect("NotifyContext should be provided")
}

/// 通知 toast 组件，App 根部挂载一次
#[component]
pub fn NotificationToast() -> impl IntoView {
    let ctx = use_notify();
    let notice = ctx.notice();

    // 3秒后自动清除
    Effect::new(move |_| {
        if notice.get().is_some() {
            set_timeout(move || ctx.clear(), Duration::from_secs(3));
        }
    });

    view! {
        <Show when=move || notice.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    if notice.get().map(|n| n.is_error).unwrap_or(false) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notice.get().map(|n| n.text).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
