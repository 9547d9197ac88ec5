//! Sign-in page: credentials form, "remember me", inline errors.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::state::session::Session;

/// Shown when either field is empty; no request is sent.
pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";
/// Fallback when the server rejects the login without a message.
pub const LOGIN_FAILED: &str = "Invalid credentials";

/// Sign-in page.
///
/// Navigates straight to `/profile` whenever the session is authenticated,
/// which covers both direct navigation while logged in and the post-login
/// transition. The submit button is disabled while a request is in flight.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().auth.is_authenticated() {
            navigate("/profile", NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            error.set(Some(CREDENTIALS_REQUIRED.to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let remember_value = remember.get_untracked();
            submitting.set(true);
            error.set(None);

            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(token) => {
                        crate::util::token_store::persist_token(&token, remember_value);
                        session.update(|s| s.login_succeeded(token));
                        log::info!("signed in");
                    }
                    Err(err) => {
                        error.set(Some(err.user_message(LOGIN_FAILED)));
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <Header/>

        <main class="main bg-dark">
            <section class="sign-in-content">
                <i class="fa fa-user-circle sign-in-icon"></i>
                <h1>"Sign In"</h1>

                <form on:submit=on_submit>
                    <div class="input-wrapper">
                        <label for="email">"Email"</label>
                        <input
                            type="text"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="input-wrapper">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="input-remember">
                        <input
                            type="checkbox"
                            id="remember-me"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        <label for="remember-me">"Remember me"</label>
                    </div>

                    {move || {
                        error.get().map(|message| view! { <p class="sign-in-error">{message}</p> })
                    }}

                    <button
                        type="submit"
                        class="sign-in-button"
                        prop:disabled=move || submitting.get()
                    >
                        {move || if submitting.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </section>
        </main>

        <Footer/>
    }
}
