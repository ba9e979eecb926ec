use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

mod api;
mod components;
mod format;
mod session;
mod state;
mod types;

use components::dashboard::ProductDashboard;
use components::login::Login;
use session::{BrowserStore, Session};

/// Shared session handle. `None` until restoration from local storage has
/// resolved; access decisions wait for `Some`.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub session: RwSignal<Option<Session>>,
}

impl SessionContext {
    pub fn login(&self, email: &str) {
        self.session.set(Some(Session::login(&BrowserStore, email)));
    }

    pub fn logout(&self) {
        Session::logout(&BrowserStore);
        self.session.set(Some(Session::default()));
    }
}

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(None::<Session>);
    provide_context(SessionContext { session });

    // Restore once per load, before any access decision renders.
    Effect::new(move || {
        if session.with_untracked(|s| s.is_none()) {
            session.set(Some(Session::restore(&BrowserStore)));
        }
    });

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=path!("/login") view=Login/>
                <Route path=path!("/") view=ProtectedDashboard/>
            </Routes>
        </Router>
    }
}

/// Renders the dashboard only for an authenticated session; bounces to the
/// login route otherwise. While restoration is pending neither fires.
#[component]
fn ProtectedDashboard() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();

    view! {
        {move || match ctx.session.get() {
            None => view! {
                <div class="min-h-screen flex items-center justify-center text-gray-500">
                    "Loading..."
                </div>
            }
            .into_any(),
            Some(s) if s.authenticated => view! { <ProductDashboard/> }.into_any(),
            Some(_) => view! { <Redirect path="/login"/> }.into_any(),
        }}
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
