//! Root application component with routing, guard wiring, and the
//! dependency-injection composition root.
//!
//! DESIGN
//! ======
//! The backend client, session cache, and store are constructed once here
//! and handed down as props — no ambient global state. The route guard is a
//! sibling of `Routes` so it observes every navigation, mirroring a
//! before-each navigation hook.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::net::api::{BackendConfig, HttpBackend};
use crate::net::backend::Backend;
use crate::pages::{chat_room::ChatRoomPage, home::HomePage, login::LoginPage};
use crate::state::store::Store;
use crate::util::guard::{GuardDecision, HOME_PATH, LOGIN_PATH, decide, resolve_identity};
use crate::util::session_cache::{BrowserSessionCache, SessionCache};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Navigation interceptor: checks every path change against the route table
/// and the current session identity.
#[component]
fn RouteGuard(backend: Arc<dyn Backend>, cache: Arc<dyn SessionCache>) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    Effect::new(move || {
        let path = location.pathname.get();
        match decide(&path, resolve_identity(backend.as_ref(), cache.as_ref())) {
            GuardDecision::RedirectToLogin => navigate(LOGIN_PATH, NavigateOptions::default()),
            GuardDecision::RedirectToHome => navigate(HOME_PATH, NavigateOptions::default()),
            GuardDecision::Proceed => {}
        }
    });
    // Renders nothing; the component exists only for its navigation effect.
    ""
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cache: Arc<dyn SessionCache> = Arc::new(BrowserSessionCache);
    let backend = Arc::new(HttpBackend::new(BackendConfig::default()));
    let store = Store::new(backend.clone(), cache.clone());

    // Sync the cached identity with the live server session once at startup.
    #[cfg(feature = "hydrate")]
    {
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            backend.refresh_identity().await;
        });
    }

    let guard_backend: Arc<dyn Backend> = backend;
    let login_store = store.clone();
    let home_store = store.clone();
    let chat_store = store;

    view! {
        <Stylesheet id="leptos" href="/pkg/talkboard.css"/>
        <Title text="Talkboard"/>

        <Router>
            <RouteGuard backend=guard_backend cache=cache/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || view! { <LoginPage store=login_store.clone()/> }
                />
                <Route
                    path=StaticSegment("home")
                    view=move || view! { <HomePage store=home_store.clone()/> }
                />
                <Route
                    path=(StaticSegment("chat"), ParamSegment("id"))
                    view=move || view! { <ChatRoomPage store=chat_store.clone()/> }
                />
            </Routes>
        </Router>
    }
}
