//! Navigation guard run before every route change settles.

use std::future::Future;

use contracts::system::user::LoginUser;

use super::AccessLevel;
use crate::routes::table::RouteMatch;

/// Outcome of a guard run. Every run settles in exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(String),
}

/// The session state the guard reads and populates. Implemented by the
/// reactive session context in the app and by plain stubs in tests.
pub trait SessionStore {
    /// Resolved role, or `None` while the login user has not been fetched.
    fn role_if_known(&self) -> Option<AccessLevel>;
    fn fetch_in_flight(&self) -> bool;
    fn begin_fetch(&self);
    fn finish_fetch(&self, user: LoginUser);
    /// Resolves once no fetch is in flight. A caller that lost the race
    /// awaits this instead of dispatching a duplicate request.
    fn wait_fetch(&self) -> impl Future<Output = ()>;
}

/// Pure access decision for a target route.
///
/// A `User` gate turns away only `NotLogin`, sending it to the login page
/// with the intended path in the `redirect` parameter. An `Admin` gate
/// turns away everything but exactly `Admin`. These are independent
/// exact-kind checks, not an ordered comparison.
pub fn decide(
    access: Option<AccessLevel>,
    role: AccessLevel,
    full_path: &str,
) -> NavigationDecision {
    match access {
        Some(AccessLevel::User) if role == AccessLevel::NotLogin => {
            NavigationDecision::Redirect(format!("/user/login?redirect={}", full_path))
        }
        Some(AccessLevel::Admin) if role != AccessLevel::Admin => {
            NavigationDecision::Redirect("/noAuth".to_string())
        }
        _ => NavigationDecision::Proceed,
    }
}

/// Runs before a navigation settles: loads the login user once if the role
/// is still unknown, then decides whether the navigation may proceed.
///
/// The fetch is single-shot; an invocation that finds one already in flight
/// waits for its outcome instead of dispatching a duplicate request, so every
/// decision is made on the post-fetch role. A failed fetch stores a
/// not-logged-in identity, so gated routes redirect instead of leaving the
/// navigation unsettled.
pub async fn before_each<S, F, Fut>(
    target: &RouteMatch<'_>,
    session: &S,
    fetch: F,
) -> NavigationDecision
where
    S: SessionStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<LoginUser, String>>,
{
    if session.role_if_known().is_none() {
        if session.fetch_in_flight() {
            session.wait_fetch().await;
        } else {
            session.begin_fetch();
            match fetch().await {
                Ok(user) => session.finish_fetch(user),
                Err(err) => {
                    log::warn!("login user fetch failed: {}", err);
                    session.finish_fetch(LoginUser::not_login());
                }
            }
        }
    }

    let role = session.role_if_known().unwrap_or(AccessLevel::NotLogin);
    decide(target.route.access, role, &target.full_path)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::future::poll_fn;
    use std::task::{Poll, Waker};

    use futures::executor::block_on;
    use futures::future;

    use super::*;
    use crate::routes::table::resolve;

    #[derive(Default)]
    struct StubSession {
        user: RefCell<Option<LoginUser>>,
        in_flight: Cell<bool>,
        waiters: RefCell<Vec<Waker>>,
    }

    impl StubSession {
        fn with_role(role: &str) -> Self {
            let stub = Self::default();
            stub.finish_fetch(user_with_role(role));
            stub
        }
    }

    impl SessionStore for StubSession {
        fn role_if_known(&self) -> Option<AccessLevel> {
            let user = self.user.borrow();
            let role = user.as_ref()?.user_role.clone()?;
            Some(AccessLevel::from_role(&role))
        }

        fn fetch_in_flight(&self) -> bool {
            self.in_flight.get()
        }

        fn begin_fetch(&self) {
            self.in_flight.set(true);
        }

        fn finish_fetch(&self, user: LoginUser) {
            *self.user.borrow_mut() = Some(user);
            self.in_flight.set(false);
            for waker in self.waiters.borrow_mut().drain(..) {
                waker.wake();
            }
        }

        fn wait_fetch(&self) -> impl Future<Output = ()> {
            poll_fn(|cx| {
                if self.in_flight.get() {
                    self.waiters.borrow_mut().push(cx.waker().clone());
                    Poll::Pending
                } else {
                    Poll::Ready(())
                }
            })
        }
    }

    fn user_with_role(role: &str) -> LoginUser {
        LoginUser {
            user_role: Some(role.to_string()),
            ..LoginUser::default()
        }
    }

    async fn no_fetch() -> Result<LoginUser, String> {
        panic!("guard fetched although the role was already known");
    }

    #[test]
    fn unrestricted_route_proceeds_for_every_role() {
        for role in [AccessLevel::NotLogin, AccessLevel::User, AccessLevel::Admin] {
            assert_eq!(
                decide(None, role, "/questions"),
                NavigationDecision::Proceed
            );
        }
    }

    #[test]
    fn user_gate_redirects_not_login_with_return_path() {
        assert_eq!(
            decide(Some(AccessLevel::User), AccessLevel::NotLogin, "/"),
            NavigationDecision::Redirect("/user/login?redirect=/".to_string())
        );
        assert_eq!(
            decide(Some(AccessLevel::User), AccessLevel::User, "/"),
            NavigationDecision::Proceed
        );
        assert_eq!(
            decide(Some(AccessLevel::User), AccessLevel::Admin, "/"),
            NavigationDecision::Proceed
        );
    }

    #[test]
    fn admin_gate_redirects_everything_but_admin() {
        for role in [AccessLevel::NotLogin, AccessLevel::User] {
            assert_eq!(
                decide(Some(AccessLevel::Admin), role, "/add/question"),
                NavigationDecision::Redirect("/noAuth".to_string())
            );
        }
        assert_eq!(
            decide(Some(AccessLevel::Admin), AccessLevel::Admin, "/add/question"),
            NavigationDecision::Proceed
        );
    }

    #[test]
    fn add_question_as_user_redirects_to_no_auth() {
        let target = resolve("/add/question").unwrap();
        let session = StubSession::with_role("user");
        let decision = block_on(before_each(&target, &session, no_fetch));
        assert_eq!(decision, NavigationDecision::Redirect("/noAuth".to_string()));
    }

    #[test]
    fn home_as_not_login_redirects_to_login() {
        let target = resolve("/").unwrap();
        let session = StubSession::with_role("notLogin");
        let decision = block_on(before_each(&target, &session, no_fetch));
        assert_eq!(
            decision,
            NavigationDecision::Redirect("/user/login?redirect=/".to_string())
        );
    }

    #[test]
    fn questions_as_not_login_proceeds() {
        let target = resolve("/questions").unwrap();
        let session = StubSession::with_role("notLogin");
        let decision = block_on(before_each(&target, &session, no_fetch));
        assert_eq!(decision, NavigationDecision::Proceed);
    }

    #[test]
    fn view_question_as_admin_proceeds() {
        let target = resolve("/view/question/42").unwrap();
        let session = StubSession::with_role("admin");
        let decision = block_on(before_each(&target, &session, no_fetch));
        assert_eq!(decision, NavigationDecision::Proceed);
    }

    #[test]
    fn unknown_role_fetches_once_and_uses_the_result() {
        let target = resolve("/add/question").unwrap();
        let session = StubSession::default();
        let fetches = Cell::new(0u32);

        let decision = block_on(before_each(&target, &session, || {
            fetches.set(fetches.get() + 1);
            async { Ok(user_with_role("admin")) }
        }));
        assert_eq!(decision, NavigationDecision::Proceed);
        assert_eq!(fetches.get(), 1);

        // The role is cached now; a second run must not fetch again.
        let decision = block_on(before_each(&target, &session, no_fetch));
        assert_eq!(decision, NavigationDecision::Proceed);
    }

    #[test]
    fn fetch_failure_fails_closed() {
        let target = resolve("/").unwrap();
        let session = StubSession::default();

        let decision = block_on(before_each(&target, &session, || async {
            Err("boom".to_string())
        }));
        assert_eq!(
            decision,
            NavigationDecision::Redirect("/user/login?redirect=/".to_string())
        );
        // The failure leaves a known logged-out role behind.
        assert_eq!(session.role_if_known(), Some(AccessLevel::NotLogin));
        assert!(!session.fetch_in_flight());
    }

    #[test]
    fn in_flight_fetch_is_awaited_not_duplicated() {
        // A guard run that loses the fetch race must wait for the
        // outstanding result and decide on it, never on the unknown role.
        let target = resolve("/add/question").unwrap();
        let session = StubSession::default();
        session.begin_fetch();

        let (decision, ()) = block_on(future::join(
            before_each(&target, &session, no_fetch),
            async {
                session.finish_fetch(user_with_role("admin"));
            },
        ));
        assert_eq!(decision, NavigationDecision::Proceed);
    }

    #[test]
    fn decision_is_idempotent_for_a_fixed_target_and_role() {
        let target = resolve("/add/question").unwrap();
        let session = StubSession::with_role("user");
        let first = block_on(before_each(&target, &session, no_fetch));
        let second = block_on(before_each(&target, &session, no_fetch));
        assert_eq!(first, second);
    }
}
