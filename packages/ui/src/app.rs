//! Application context: session, auth flag, notifications and the API client.
//!
//! [`AppProvider`] owns every app-wide signal and hands them out as one
//! [`AppContext`]. Views never create their own client; they take it from
//! here so the bearer token and the unauthorized flag stay consistent.

use api::{ApiError, TokenStore};
use dioxus::prelude::*;
use store::{AuthStatus, CurrentUser, Notifications};

use crate::client::{make_client, Client};

#[derive(Clone, Copy, PartialEq)]
pub struct AppContext {
    pub session: Signal<CurrentUser>,
    pub auth: Signal<AuthStatus>,
    pub notifications: Signal<Notifications>,
    client: Signal<Client>,
}

impl AppContext {
    pub fn client(&self) -> Client {
        self.client.peek().clone()
    }

    pub fn has_token(&self) -> bool {
        self.client.peek().tokens().has_token()
    }

    /// Route a failed request to the auth flag or a toast.
    pub fn report(&self, err: &ApiError) {
        let mut auth = self.auth;
        let mut notifications = self.notifications;
        store::report(&mut auth.write(), &mut notifications.write(), err);
    }

    pub fn success(&self, message: impl Into<String>) {
        let mut notifications = self.notifications;
        notifications.write().success(message);
    }

    /// Drop the local session after a 401 and clear the flag.
    pub fn expire_session(&self) {
        self.client.peek().tokens().clear();
        let mut session = self.session;
        let mut auth = self.auth;
        session.set(CurrentUser::signed_out());
        auth.write().reset();
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

pub fn use_session() -> Signal<CurrentUser> {
    use_app().session
}

pub fn use_auth_status() -> Signal<AuthStatus> {
    use_app().auth
}

pub fn use_notifications() -> Signal<Notifications> {
    use_app().notifications
}

/// Provider component that owns the app-wide state.
/// Wrap your router with this component.
#[component]
pub fn AppProvider(children: Element) -> Element {
    let client = use_signal(make_client);
    let has_token = client.peek().tokens().has_token();
    let session = use_signal(move || {
        if has_token {
            CurrentUser::bootstrapping()
        } else {
            CurrentUser::signed_out()
        }
    });
    let auth = use_signal(AuthStatus::default);
    let notifications = use_signal(Notifications::new);

    let app = use_context_provider(|| AppContext {
        session,
        auth,
        notifications,
        client,
    });

    // Restore the user behind a stored token
    let _ = use_resource(move || async move {
        if !app.has_token() {
            return;
        }
        let mut session = app.session;
        match app.client().current_user().await {
            Ok(user) => {
                tracing::info!("Restored session for {}", user.credentials.username);
                session.set(CurrentUser::signed_in(user));
            }
            Err(e) => {
                session.set(CurrentUser::signed_out());
                app.report(&e);
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logged_out: EventHandler<()>,
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();

    let onclick = move |_| async move {
        app.client().logout().await;
        let mut session = app.session;
        session.set(CurrentUser::signed_out());
        on_logged_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
