use crate::auth::use_auth;
use crate::components::movie_dialog::MovieDialog;
use crate::notify::use_notify;
use leptos::prelude::*;
use leptos::task::spawn_local;
use movieportal_shared::{Movie, MoviePayload};

/// 管理员面板：影片的增删改
///
/// 所有变更成功后都重新拉取列表同步本地状态，失败时仅通知、
/// 不改动已有渲染。评论随列表内嵌展示，不单独拉取。
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notify();

    let (movies, set_movies) = signal(Vec::<Movie>::new());
    let (loading, set_loading) = signal(true);
    let (dialog_open, set_dialog_open) = signal(false);
    let (editing, set_editing) = signal(Option::<Movie>::None);

    let load_movies = move || {
        if let Some(api) = auth.state.get_untracked().api {
            set_loading.set(true);
            spawn_local(async move {
                match api.get_movies().await {
                    Ok(list) => set_movies.set(list),
                    Err(e) => notify.error(format!("加载影片失败: {}", e)),
                }
                set_loading.set(false);
            });
        }
    };

    // 初始加载
    Effect::new(move |_| {
        load_movies();
    });

    let open_add = move |_| {
        set_editing.set(None);
        set_dialog_open.set(true);
    };

    let open_edit = move |movie: Movie| {
        set_editing.set(Some(movie));
        set_dialog_open.set(true);
    };

    let close_dialog = move |_: ()| {
        set_dialog_open.set(false);
        set_editing.set(None);
    };

    let handle_save = move |payload: MoviePayload| {
        let editing_id = editing.get_untracked().map(|m| m.id);
        if let Some(api) = auth.state.get_untracked().api {
            spawn_local(async move {
                let result = match &editing_id {
                    Some(id) => api.update_movie(id, payload).await,
                    None => api.add_movie(&payload).await,
                };
                match result {
                    Ok(()) => {
                        notify.success(if editing_id.is_some() {
                            "影片已更新"
                        } else {
                            "影片已添加"
                        });
                        set_dialog_open.set(false);
                        set_editing.set(None);
                        load_movies();
                    }
                    Err(e) => notify.error(format!("保存影片失败: {}", e)),
                }
            });
        }
    };

    let handle_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("确定要删除这部影片吗？").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        if let Some(api) = auth.state.get_untracked().api {
            spawn_local(async move {
                match api.delete_movie(&id).await {
                    Ok(()) => {
                        notify.success("影片已删除");
                        load_movies();
                    }
                    Err(e) => notify.error(format!("删除影片失败: {}", e)),
                }
            });
        }
    };

    let total_movies = move || movies.with(|m| m.len());
    let total_comments = move || movies.with(|m| m.iter().map(|x| x.comments.len()).sum::<usize>());

    view! {
        <div class="max-w-7xl mx-auto space-y-8 p-4 md:p-8">
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"影片总数"</div>
                    <div class="stat-value text-primary">{total_movies}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"评论总数"</div>
                    <div class="stat-value text-secondary">{total_comments}</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="flex items-center justify-between p-6 pb-2">
                        <div>
                            <h3 class="card-title">"影片管理"</h3>
                            <p class="text-base-content/70 text-sm">"维护目录中的影片记录。"</p>
                        </div>
                        <div class="flex gap-2">
                            <button
                                on:click=move |_| load_movies()
                                disabled=move || loading.get()
                                class="btn btn-ghost btn-sm"
                            >
                                "刷新"
                            </button>
                            <button on:click=open_add class="btn btn-primary btn-sm">
                                "添加影片"
                            </button>
                        </div>
                    </div>

                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"片名"</th>
                                    <th>"导演"</th>
                                    <th>"年份"</th>
                                    <th class="hidden md:table-cell">"类型"</th>
                                    <th>"简介与评论"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || loading.get() && total_movies() == 0>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            <span class="loading loading-spinner loading-md"></span> " 加载中..."
                                        </td>
                                    </tr>
                                </Show>
                                <Show when=move || total_movies() == 0 && !loading.get()>
                                    <tr>
                                        <td colspan="6" class="text-center py-8 text-base-content/50">
                                            "目录为空。点击\"添加影片\"开始。"
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || movies.get()
                                    key=|m| m.id.clone()
                                    children=move |movie| {
                                        let edit_movie = movie.clone();
                                        let delete_id = movie.id.clone();
                                        view! {
                                            <tr>
                                                <td class="font-bold">{movie.title.clone()}</td>
                                                <td>{movie.director.clone()}</td>
                                                <td>{movie.year}</td>
                                                <td class="hidden md:table-cell">
                                                    <div class="badge badge-accent badge-outline">{movie.genre.clone()}</div>
                                                </td>
                                                <td class="text-start">
                                                    <div class="whitespace-pre-line">{movie.description.clone()}</div>
                                                    // 评论内嵌展示
                                                    {(!movie.comments.is_empty()).then(|| view! {
                                                        <ul class="mt-2 space-y-1 text-sm text-base-content/70 list-disc list-inside">
                                                            {movie.comments.iter()
                                                                .map(|c| view! { <li>{c.comment.clone()}</li> })
                                                                .collect_view()}
                                                        </ul>
                                                    })}
                                                </td>
                                                <td>
                                                    <div class="join">
                                                        <button
                                                            class="btn btn-warning btn-sm join-item"
                                                            on:click=move |_| open_edit(edit_movie.clone())
                                                        >
                                                            "编辑"
                                                        </button>
                                                        <button
                                                            class="btn btn-error btn-sm join-item"
                                                            on:click=move |_| handle_delete(delete_id.clone())
                                                        >
                                                            "删除"
                                                        </button>
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            <MovieDialog
                open=dialog_open
                editing=editing
                on_save=handle_save
                on_close=close_dialog
            />
        </div>
    }
}
