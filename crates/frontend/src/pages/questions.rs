use contracts::question::QuestionSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::question::api;
use crate::routes::router::use_router;

const PAGE_SIZE: u64 = 20;

fn acceptance_rate(submit_num: Option<i64>, accepted_num: Option<i64>) -> String {
    let submit = submit_num.unwrap_or(0);
    let accepted = accepted_num.unwrap_or(0);
    if submit <= 0 {
        "-".to_string()
    } else {
        format!("{:.1}%", accepted as f64 * 100.0 / submit as f64)
    }
}

#[component]
pub fn QuestionsPage() -> impl IntoView {
    let questions: RwSignal<Vec<QuestionSummary>> = RwSignal::new(Vec::new());
    let total = RwSignal::new(0i64);
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(true);

    let router = use_router();

    spawn_local(async move {
        match api::list_questions(1, PAGE_SIZE).await {
            Ok(page) => {
                questions.set(page.records);
                total.set(page.total);
            }
            Err(e) => set_error.set(Some(e)),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page page--questions">
            <h1>"Questions"</h1>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || loading.get()>
                <div class="placeholder">"Loading..."</div>
            </Show>

            <table class="question-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Tags"</th>
                        <th>"Acceptance"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        questions
                            .get()
                            .into_iter()
                            .map(|q| {
                                let path = format!("/view/question/{}", q.id);
                                let rate = acceptance_rate(q.submit_num, q.accepted_num);
                                view! {
                                    <tr
                                        class="question-table__row"
                                        on:click=move |_| router.navigate(&path)
                                    >
                                        <td>{q.title.clone()}</td>
                                        <td>{q.tags.join(", ")}</td>
                                        <td>{rate}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <p class="question-table__total">
                {move || format!("{} questions", total.get())}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acceptance_rate_handles_missing_and_zero_counters() {
        assert_eq!(acceptance_rate(None, None), "-");
        assert_eq!(acceptance_rate(Some(0), Some(0)), "-");
        assert_eq!(acceptance_rate(Some(200), Some(50)), "25.0%");
        assert_eq!(acceptance_rate(Some(3), None), "0.0%");
    }
}
