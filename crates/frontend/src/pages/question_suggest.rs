use contracts::question::QuestionSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::question::api;
use crate::routes::router::use_router;

/// Daily recommendations for the logged-in user.
#[component]
pub fn QuestionSuggestPage() -> impl IntoView {
    let suggestions: RwSignal<Vec<QuestionSummary>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    let router = use_router();

    spawn_local(async move {
        match api::suggest_questions().await {
            Ok(list) => suggestions.set(list),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page page--suggest">
            <h1>"Daily Picks"</h1>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || loading.get()>
                <div class="placeholder">"Loading..."</div>
            </Show>
            <Show when=move || !loading.get() && suggestions.get().is_empty() && error.get().is_none()>
                <p class="placeholder">"Nothing to suggest today. Come back tomorrow."</p>
            </Show>

            <ul class="suggest-list">
                {move || {
                    suggestions
                        .get()
                        .into_iter()
                        .map(|q| {
                            let path = format!("/view/question/{}", q.id);
                            view! {
                                <li class="suggest-list__item" on:click=move |_| router.navigate(&path)>
                                    <span class="suggest-list__title">{q.title.clone()}</span>
                                    <span class="suggest-list__tags">{q.tags.join(", ")}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
