//! History-API router: resolves paths against the route table and runs the
//! navigation guard before a location settles.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

use super::table::resolve;
use crate::system::access::guard::{before_each, NavigationDecision};
use crate::system::session::{api, Session};

/// App-wide router handle. Cheap to copy; all clones share the signal.
#[derive(Clone, Copy)]
pub struct RouterContext {
    /// Current settled location (path + query), `None` until the first
    /// guard pass completes.
    pub current: RwSignal<Option<String>>,
    session: Session,
}

impl RouterContext {
    pub fn new(session: Session) -> Self {
        Self {
            current: RwSignal::new(None),
            session,
        }
    }

    /// Wires history integration: guards the boot location and keeps the
    /// signal in sync with back/forward navigation. Runs once at app start.
    pub fn init(&self) {
        let this = *self;
        spawn_local(this.commit(current_location(), false));

        let this = *self;
        let on_popstate = Closure::<dyn FnMut()>::new(move || {
            spawn_local(this.commit(current_location(), false));
        });
        if let Some(w) = window() {
            let _ = w.add_event_listener_with_callback(
                "popstate",
                on_popstate.as_ref().unchecked_ref(),
            );
        }
        // Listener lives for the page lifetime.
        on_popstate.forget();
    }

    /// Navigates to `to`, pushing a history entry once the guard settles.
    pub fn navigate(&self, to: &str) {
        spawn_local(self.commit(to.to_string(), true));
    }

    async fn commit(self, requested: String, push: bool) {
        let settled = self.settle(requested.clone()).await;
        if push {
            push_history(&settled);
        } else if settled != requested {
            replace_history(&settled);
        }
        if let Some(target) = resolve(&settled) {
            set_title(target.route.name);
        }
        self.current.set(Some(settled));
    }

    /// Applies the guard, following redirects until a target proceeds.
    /// Redirect targets are unguarded table entries, so this terminates.
    async fn settle(self, mut full_path: String) -> String {
        loop {
            let Some(target) = resolve(&full_path) else {
                // Unmatched paths are not the guard's business; the shell
                // renders its not-found placeholder.
                return full_path;
            };
            match before_each(&target, &self.session, api::get_login_user).await {
                NavigationDecision::Proceed => return full_path,
                NavigationDecision::Redirect(to) => {
                    log::debug!("navigation to {} redirected to {}", full_path, to);
                    full_path = to;
                }
            }
        }
    }
}

/// Hook to access the router context.
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext not found in component tree")
}

fn current_location() -> String {
    let Some(w) = window() else {
        return "/".to_string();
    };
    let location = w.location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

fn push_history(full_path: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(full_path),
            );
        }
    }
}

fn replace_history(full_path: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(full_path),
            );
        }
    }
}

fn set_title(name: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(&format!("{} - Online Judge", name));
    }
}
