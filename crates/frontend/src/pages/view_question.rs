use contracts::question::QuestionDetail;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::question::api;

/// Question detail view. The `id` prop comes from the route's path
/// parameter.
#[component]
pub fn ViewQuestionPage(id: String) -> impl IntoView {
    let question: RwSignal<Option<QuestionDetail>> = RwSignal::new(None);
    let (error, set_error) = signal(Option::<String>::None);

    {
        let id = id.clone();
        spawn_local(async move {
            match api::get_question(&id).await {
                Ok(q) => question.set(Some(q)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    }

    view! {
        <div class="page page--question">
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || match question.get() {
                Some(q) => view! {
                    <article class="question">
                        <h1>{q.title.clone()}</h1>
                        <p class="question__tags">{q.tags.join(", ")}</p>
                        <div class="question__content">
                            {q.content.clone().unwrap_or_default()}
                        </div>
                    </article>
                }
                .into_any(),
                None => view! { <div class="placeholder">"Loading..."</div> }.into_any(),
            }}
        </div>
    }
}
