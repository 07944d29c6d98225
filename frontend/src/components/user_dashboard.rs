use crate::auth::use_auth;
use crate::notify::use_notify;
use leptos::prelude::*;
use leptos::task::spawn_local;
use movieportal_shared::{Comment, Movie};
use std::collections::HashMap;

/// 用户面板：浏览影片、按需拉取评论、提交新评论
///
/// 评论展开状态是本地开关：展开时若无缓存则拉取一次，
/// 收起会丢弃该影片的缓存，再次展开需要重新拉取。
#[component]
pub fn UserDashboard() -> impl IntoView {
    let auth = use_auth();
    let notify = use_notify();

    let (movies, set_movies) = signal(Vec::<Movie>::new());
    let (loading, set_loading) = signal(true);
    // 每部影片的评论草稿
    let (drafts, set_drafts) = signal(HashMap::<String, String>::new());
    // 已展开影片的评论缓存
    let (expanded, set_expanded) = signal(HashMap::<String, Vec<Comment>>::new());

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

    let toggle_comments = move |id: String| {
        let cached = expanded.with_untracked(|m| m.contains_key(&id));
        if cached {
            // 收起即丢弃缓存
            set_expanded.update(|m| {
                m.remove(&id);
            });
        } else if let Some(api) = auth.state.get_untracked().api {
            spawn_local(async move {
                match api.get_comments(&id).await {
                    Ok(list) => set_expanded.update(|m| {
                        m.insert(id, list);
                    }),
                    Err(e) => notify.error(format!("加载评论失败: {}", e)),
                }
            });
        }
    };

    let submit_comment = move |id: String| {
        let text = drafts.with_untracked(|d| d.get(&id).cloned().unwrap_or_default());
        let text = text.trim().to_string();
        if text.is_empty() {
            return;
        }
        if let Some(api) = auth.state.get_untracked().api {
            spawn_local(async move {
                match api.add_comment(&id, text).await {
                    Ok(()) => {
                        notify.success("评论已提交");
                        set_drafts.update(|d| {
                            d.remove(&id);
                        });
                        // 成功后重新拉取列表同步本地状态
                        load_movies();
                    }
                    Err(e) => notify.error(format!("提交评论失败: {}", e)),
                }
            });
        }
    };

    let total_movies = move || movies.with(|m| m.len());

    view! {
        <div class="max-w-7xl mx-auto space-y-8 p-4 md:p-8">
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body p-0">
                    <div class="flex items-center justify-between p-6 pb-2">
                        <div>
                            <h3 class="card-title">"影片目录"</h3>
                            <p class="text-base-content/70 text-sm">"浏览影片并参与评论。"</p>
                        </div>
                        <button
                            on:click=move |_| load_movies()
                            disabled=move || loading.get()
                            class="btn btn-ghost btn-sm"
                        >
                            "刷新"
                        </button>
                    </div>

                    <div class="overflow-x-auto w-full">
                        <table class="table table-zebra w-full">
                            <thead>
                                <tr>
                                    <th>"片名"</th>
                                    <th>"导演"</th>
                                    <th>"年份"</th>
                                    <th>"类型"</th>
                                    <th>"评论"</th>
                                    <th>"发表评论"</th>
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
                                            "目录为空。"
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || movies.get()
                                    key=|m| m.id.clone()
                                    children=move |movie| {
                                        let toggle_id = movie.id.clone();
                                        let label_id = movie.id.clone();
                                        let list_id = movie.id.clone();
                                        let draft_id = movie.id.clone();
                                        let input_id = movie.id.clone();
                                        let submit_id = movie.id.clone();
                                        view! {
                                            <tr>
                                                <td class="font-bold">{movie.title}</td>
                                                <td>{movie.director}</td>
                                                <td>{movie.year}</td>
                                                <td>
                                                    <div class="badge badge-accent badge-outline">{movie.genre}</div>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn-link btn-sm px-0"
                                                        on:click=move |_| toggle_comments(toggle_id.clone())
                                                    >
                                                        {move || if expanded.with(|m| m.contains_key(&label_id)) {
                                                            "收起评论"
                                                        } else {
                                                            "查看评论"
                                                        }}
                                                    </button>
                                                    {move || expanded.with(|m| m.get(&list_id).cloned()).map(|list| view! {
                                                        <ul class="mt-1 space-y-1 text-sm list-disc list-inside">
                                                            {if list.is_empty() {
                                                                view! { <li class="text-base-content/50">"暂无评论"</li> }.into_any()
                                                            } else {
                                                                list.into_iter()
                                                                    .map(|c| view! { <li>{c.comment}</li> })
                                                                    .collect_view()
                                                                    .into_any()
                                                            }}
                                                        </ul>
                                                    })}
                                                </td>
                                                <td>
                                                    <div class="flex gap-2">
                                                        <input
                                                            type="text"
                                                            placeholder="写下你的评论"
                                                            class="input input-bordered input-sm w-full max-w-xs"
                                                            prop:value=move || drafts.with(|d| d.get(&draft_id).cloned().unwrap_or_default())
                                                            on:input=move |ev| {
                                                                let value = event_target_value(&ev);
                                                                let id = input_id.clone();
                                                                set_drafts.update(|d| {
                                                                    d.insert(id, value);
                                                                });
                                                            }
                                                        />
                                                        <button
                                                            class="btn btn-primary btn-sm"
                                                            on:click=move |_| submit_comment(submit_id.clone())
                                                        >
                                                            "提交"
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
        </div>
    }
}
