//! Session context: the login user cached for the lifetime of the page.
//!
//! Replaces a global store with an injectable handle provided at the app
//! root; the guard and the pages all reach it through `use_session()`.

pub mod api;

use std::future::{poll_fn, Future};
use std::task::{Poll, Waker};

use contracts::system::user::LoginUser;
use leptos::prelude::*;

use super::access::guard::SessionStore;
use super::access::AccessLevel;

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub login_user: Option<LoginUser>,
    pub fetch_in_flight: bool,
}

/// Injectable session handle. Cheap to copy; all clones share one signal.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    /// Guard runs parked on an in-flight fetch; woken when it lands.
    waiters: StoredValue<Vec<Waker>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            waiters: StoredValue::new(Vec::new()),
        }
    }

    pub fn login_user(&self) -> Option<LoginUser> {
        self.state.with(|s| s.login_user.clone())
    }

    /// Resolved role for reactive consumers; an unknown role reads as
    /// `NotLogin` (the menu must not advertise gated routes before the
    /// first fetch lands).
    pub fn role(&self) -> AccessLevel {
        self.state
            .with(|s| resolved_role(s))
            .unwrap_or(AccessLevel::NotLogin)
    }

    pub fn set_login_user(&self, user: LoginUser) {
        self.state.update(|s| {
            s.login_user = Some(user);
            s.fetch_in_flight = false;
        });
        self.wake_waiters();
    }

    /// Drops the cached identity; the next navigation refetches it.
    pub fn clear(&self) {
        self.state.set(SessionState::default());
        self.wake_waiters();
    }

    fn wake_waiters(&self) {
        self.waiters.update_value(|waiters| {
            for waker in waiters.drain(..) {
                waker.wake();
            }
        });
    }
}

fn resolved_role(state: &SessionState) -> Option<AccessLevel> {
    let role = state.login_user.as_ref()?.user_role.as_deref()?;
    Some(AccessLevel::from_role(role))
}

impl SessionStore for Session {
    fn role_if_known(&self) -> Option<AccessLevel> {
        self.state.with_untracked(|s| resolved_role(s))
    }

    fn fetch_in_flight(&self) -> bool {
        self.state.with_untracked(|s| s.fetch_in_flight)
    }

    fn begin_fetch(&self) {
        self.state.update(|s| s.fetch_in_flight = true);
    }

    fn finish_fetch(&self, user: LoginUser) {
        self.set_login_user(user);
    }

    fn wait_fetch(&self) -> impl Future<Output = ()> {
        let state = self.state;
        let waiters = self.waiters;
        poll_fn(move |cx| {
            if state.with_untracked(|s| s.fetch_in_flight) {
                waiters.update_value(|w| w.push(cx.waker().clone()));
                Poll::Pending
            } else {
                Poll::Ready(())
            }
        })
    }
}

/// Hook to access the session context.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session context not found in component tree")
}
