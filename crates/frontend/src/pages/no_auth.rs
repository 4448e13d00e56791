use leptos::prelude::*;

use crate::routes::router::use_router;

#[component]
pub fn NoAuthPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="page page--no-auth">
            <h1>"No Access"</h1>
            <p>"You do not have permission to view this page."</p>
            <button class="button" on:click=move |_| router.navigate("/questions")>
                "Back to questions"
            </button>
        </div>
    }
}
