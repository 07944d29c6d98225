use crate::notify::use_notify;
use leptos::prelude::*;
use movieportal_shared::{Movie, MoviePayload};

/// 影片表单模态框，新增与编辑共用
///
/// `editing` 为 `Some` 时以该影片预填表单，否则为空白新增表单。
/// 校验通过后通过 `on_save` 把载荷交还给父组件处理。
#[component]
pub fn MovieDialog(
    /// 是否打开
    open: ReadSignal<bool>,
    /// 正在编辑的影片
    #[prop(into)]
    editing: Signal<Option<Movie>>,
    /// 提交回调
    #[prop(into)]
    on_save: Callback<MoviePayload>,
    /// 关闭回调
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let notify = use_notify();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // 表单字段
    let (title, set_title) = signal(String::new());
    let (director, set_director) = signal(String::new());
    let (year, set_year) = signal(String::new());
    let (genre, set_genre) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // 同步 <dialog> 元素的原生开关状态
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    // 打开时按编辑目标重置表单
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        match editing.get() {
            Some(movie) => {
                set_title.set(movie.title);
                set_director.set(movie.director);
                set_year.set(movie.year.to_string());
                set_genre.set(movie.genre);
                set_description.set(movie.description);
            }
            None => {
                set_title.set(String::new());
                set_director.set(String::new());
                set_year.set(String::new());
                set_genre.set(String::new());
                set_description.set(String::new());
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let title = title.get_untracked().trim().to_string();
        let director = director.get_untracked().trim().to_string();
        let genre = genre.get_untracked().trim().to_string();
        let description = description.get_untracked().trim().to_string();
        if title.is_empty() || director.is_empty() || genre.is_empty() || description.is_empty() {
            notify.error("请完整填写所有字段");
            return;
        }
        let Ok(year) = year.get_untracked().trim().parse::<i32>() else {
            notify.error("年份必须是数字");
            return;
        };

        on_save.run(MoviePayload {
            title,
            director,
            year,
            genre,
            description,
        });
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box">
                <h3 class="font-bold text-lg">
                    {move || if editing.get().is_some() { "编辑影片" } else { "添加影片" }}
                </h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <div class="form-control">
                        <label for="movie_title" class="label">
                            <span class="label-text">"片名"</span>
                        </label>
                        <input id="movie_title" required
                            type="text"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=title
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="movie_director" class="label">
                                <span class="label-text">"导演"</span>
                            </label>
                            <input id="movie_director" required
                                type="text"
                                on:input=move |ev| set_director.set(event_target_value(&ev))
                                prop:value=director
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="movie_year" class="label">
                                <span class="label-text">"年份"</span>
                            </label>
                            <input id="movie_year" required
                                type="number"
                                on:input=move |ev| set_year.set(event_target_value(&ev))
                                prop:value=year
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="movie_genre" class="label">
                            <span class="label-text">"类型"</span>
                        </label>
                        <input id="movie_genre" required
                            type="text"
                            placeholder="Sci-Fi"
                            on:input=move |ev| set_genre.set(event_target_value(&ev))
                            prop:value=genre
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="movie_description" class="label">
                            <span class="label-text">"简介"</span>
                        </label>
                        <textarea id="movie_description" required rows="3"
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                            prop:value=description
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| on_close.run(())>
                            "取消"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if editing.get().is_some() { "保存修改" } else { "添加影片" }}
                        </button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
