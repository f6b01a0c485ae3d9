//! Login page with email + password sign-in and account registration.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::store::Store;
#[cfg(feature = "hydrate")]
use crate::util::guard::HOME_PATH;

/// Trim and require both fields; the backend does the real validation.
pub(crate) fn validate_credentials(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(feature = "hydrate")]
fn dispatch_auth(
    store: Store,
    navigate: impl Fn(&str, NavigateOptions) + 'static,
    email: String,
    password: String,
    register: bool,
    info: RwSignal<String>,
    busy: RwSignal<bool>,
) {
    leptos::task::spawn_local(async move {
        let result = if register {
            store.register(&email, &password).await.map_err(|e| e.to_string())
        } else {
            store.login(&email, &password).await.map_err(|e| e.to_string())
        };
        match result {
            Ok(()) => navigate(HOME_PATH, NavigateOptions::default()),
            Err(e) => {
                info.set(format!("Sign-in failed: {e}"));
                busy.set(false);
            }
        }
    });
}

/// Login page — the application root route.
#[component]
pub fn LoginPage(store: Store) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let login_store = store.clone();
    let login_navigate = navigate.clone();
    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());
        #[cfg(feature = "hydrate")]
        dispatch_auth(
            login_store.clone(),
            login_navigate.clone(),
            email_value,
            password_value,
            false,
            info,
            busy,
        );
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&login_store, &login_navigate, email_value, password_value);
            busy.set(false);
        }
    };

    let register_store = store;
    let register_navigate = navigate;
    let on_register = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_credentials(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());
        #[cfg(feature = "hydrate")]
        dispatch_auth(
            register_store.clone(),
            register_navigate.clone(),
            email_value,
            password_value,
            true,
            info,
            busy,
        );
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&register_store, &register_navigate, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Talkboard"</h1>
                <p class="login-card__subtitle">"Sign in to start chatting"</p>
                <form class="login-form" on:submit=on_login>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <button
                    class="login-button login-button--secondary"
                    on:click=on_register
                    disabled=move || busy.get()
                >
                    "Create account"
                </button>
                <p class="login-info">{move || info.get()}</p>
            </div>
        </div>
    }
}
