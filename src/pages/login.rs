//! Login page with a validated email/password form.
//!
//! Validation runs entirely client-side before the auth service is called;
//! server-side failures surface through the auth store's `error` field.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

const EMAIL_REQUIRED: &str = "Email is required";
const PASSWORD_REQUIRED: &str = "Password is required";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";

const MIN_PASSWORD_LEN: usize = 6;

/// Per-field validation outcome for the login form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct FieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

impl FieldErrors {
    fn is_ok(self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate the form before anything is sent to the backend. The service
/// layer assumes non-empty credentials; this is the layer that guarantees
/// it.
fn validate(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if email.trim().is_empty() {
        errors.email = Some(EMAIL_REQUIRED);
    }
    if password.is_empty() {
        errors.password = Some(PASSWORD_REQUIRED);
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some(PASSWORD_TOO_SHORT);
    }
    errors
}

/// Login page — controlled form, client-side validation, store-driven
/// error display. Redirects home once authenticated.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());

    // Already signed in (or login just completed elsewhere) — go home.
    Effect::new(move || {
        if auth.get().is_authenticated {
            navigate("/", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    let navigate_home = use_navigate();

    let submit = Callback::new(move |()| {
        let errors = validate(&email.get(), &password.get());
        field_errors.set(errors);
        if !errors.is_ok() {
            return;
        }
        auth.update(AuthState::clear_error);

        #[cfg(feature = "hydrate")]
        {
            let credentials = crate::net::types::LoginCredentials {
                email: email.get().trim().to_owned(),
                password: password.get(),
            };
            let navigate = navigate_home.clone();
            leptos::task::spawn_local(async move {
                match crate::services::auth::login(auth, &credentials).await {
                    Ok(_) => navigate("/", NavigateOptions::default()),
                    Err(err) => {
                        // The gateway already recorded 401/5xx/network
                        // failures; anything else (bad credentials) gets
                        // the server's message, or a generic fallback.
                        auth.update(|state| {
                            if state.error.is_none() {
                                let message = err
                                    .server_message()
                                    .unwrap_or("Login failed, please try again")
                                    .to_owned();
                                state.set_error(message);
                            }
                        });
                    }
                }
            });
        }
    });

    view! {
        <div class="login-page">
            <div class="login-page__card">
                <h1>"Sign In"</h1>
                <p class="login-page__subtitle">"Welcome back to ShopEasy"</p>

                {move || {
                    auth.get()
                        .error
                        .map(|msg| view! { <div class="login-page__error">{msg}</div> })
                }}

                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    field_errors
                        .get()
                        .email
                        .map(|msg| view! { <span class="login-page__field-error">{msg}</span> })
                }}

                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                {move || {
                    field_errors
                        .get()
                        .password
                        .map(|msg| view! { <span class="login-page__field-error">{msg}</span> })
                }}

                <button
                    class="btn btn--primary login-page__submit"
                    prop:disabled=move || auth.get().is_loading
                    on:click=move |_| submit.run(())
                >
                    {move || if auth.get().is_loading { "Signing in..." } else { "Sign In" }}
                </button>
            </div>
        </div>
    }
}
