//! Login screen gating the dashboard.
//!
//! Validation is entirely client-side: a staff email plus a minimum password
//! length. Accepted submissions wait out a short simulated round trip and
//! then flip the shared session. This is a placeholder policy, not credential
//! verification; a real identity check has to replace it before any
//! security-sensitive use.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::is_staff_email;
use crate::SessionContext;

const MIN_PASSWORD_LEN: usize = 6;
const LOGIN_DELAY_MS: u32 = 1000;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked();
        if !is_staff_email(&email_value) {
            set_error.set(Some("Please use a valid @tendrils.io email address".to_string()));
            return;
        }
        if password.get_untracked().chars().count() < MIN_PASSWORD_LEN {
            set_error.set(Some("Password must be at least 6 characters".to_string()));
            return;
        }

        set_submitting.set(true);
        let handle = Timeout::new(LOGIN_DELAY_MS, move || {
            set_submitting.set(false);
            ctx.login(&email_value);
        });
        handle.forget();
    };

    view! {
        {move || {
            let authenticated = ctx
                .session
                .get()
                .map(|s| s.authenticated)
                .unwrap_or(false);
            if authenticated {
                view! { <Redirect path="/"/> }.into_any()
            } else {
                view! {
                    <div class="min-h-screen bg-gray-100 flex items-center justify-center p-4">
                        <div class="w-full max-w-md bg-white rounded-lg shadow p-8">
                            <div class="text-center mb-6">
                                <h1 class="text-2xl font-bold text-gray-900">"Product Dashboard"</h1>
                                <p class="text-sm text-gray-500 mt-1">"Sign in to continue"</p>
                            </div>

                            <form class="space-y-4" on:submit=submit>
                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1" for="email">
                                        "Email Address"
                                    </label>
                                    <input
                                        id="email"
                                        type="email"
                                        class="block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                                        placeholder="you@tendrils.io"
                                        autocomplete="email"
                                        prop:value=move || email.get()
                                        disabled=move || submitting.get()
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                    />
                                </div>

                                <div>
                                    <label class="block text-sm font-medium text-gray-700 mb-1" for="password">
                                        "Password"
                                    </label>
                                    <input
                                        id="password"
                                        type="password"
                                        class="block w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                                        placeholder="Enter your password"
                                        autocomplete="current-password"
                                        prop:value=move || password.get()
                                        disabled=move || submitting.get()
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                    />
                                </div>

                                {move || error.get().map(|e| view! {
                                    <div class="p-3 bg-red-50 border border-red-200 rounded text-red-800 text-sm">
                                        {e}
                                    </div>
                                })}

                                <button
                                    type="submit"
                                    class="w-full px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed text-sm font-medium"
                                    disabled=move || submitting.get()
                                >
                                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                                </button>
                            </form>
                        </div>
                    </div>
                }
                .into_any()
            }
        }}
    }
}
