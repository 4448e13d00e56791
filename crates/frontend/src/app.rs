use leptos::prelude::*;

use crate::layout::Header;
use crate::pages;
use crate::routes::router::RouterContext;
use crate::routes::table::resolve;
use crate::system::session::Session;

#[component]
pub fn App() -> impl IntoView {
    // Session and router are shared app-wide via context.
    let session = Session::new();
    provide_context(session);

    let router = RouterContext::new(session);
    provide_context(router);

    // Guards the boot location and wires history integration. Runs once
    // when the component is created.
    router.init();

    view! {
        <div class="app">
            <Header />
            <main class="app__content">
                {move || match router.current.get() {
                    None => view! { <div class="placeholder">"Loading..."</div> }.into_any(),
                    Some(full_path) => match resolve(&full_path) {
                        Some(target) => pages::render_route(&target),
                        None => pages::render_not_found(&full_path),
                    },
                }}
            </main>
        </div>
    }
}
