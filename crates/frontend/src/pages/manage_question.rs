use contracts::question::QuestionSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::question::api;
use crate::routes::router::use_router;

const PAGE_SIZE: u64 = 50;

/// Admin listing with edit and delete actions.
#[component]
pub fn ManageQuestionPage() -> impl IntoView {
    let questions: RwSignal<Vec<QuestionSummary>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    let router = use_router();

    spawn_local(async move {
        match api::list_questions(1, PAGE_SIZE).await {
            Ok(page) => questions.set(page.records),
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    let on_delete = move |id: i64| {
        spawn_local(async move {
            match api::delete_question(id).await {
                Ok(()) => questions.update(|list| list.retain(|q| q.id != id)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page page--manage">
            <div class="page__toolbar">
                <h1>"Manage Questions"</h1>
                <button class="button" on:click=move |_| router.navigate("/add/question")>
                    "Add question"
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || loading.get()>
                <div class="placeholder">"Loading..."</div>
            </Show>

            <table class="question-table">
                <thead>
                    <tr>
                        <th>"Id"</th>
                        <th>"Title"</th>
                        <th>"Tags"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        questions
                            .get()
                            .into_iter()
                            .map(|q| {
                                let edit_path = format!("/update/question?id={}", q.id);
                                let id = q.id;
                                view! {
                                    <tr>
                                        <td>{id}</td>
                                        <td>{q.title.clone()}</td>
                                        <td>{q.tags.join(", ")}</td>
                                        <td>
                                            <button
                                                class="button button--ghost"
                                                on:click=move |_| router.navigate(&edit_path)
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="button button--ghost"
                                                on:click=move |_| on_delete(id)
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
