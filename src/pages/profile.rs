//! Profile page: fetch-on-mount, name editor, static account balances.
//!
//! ERROR HANDLING
//! ==============
//! A 401/403 on the profile fetch means the stored token is no longer
//! valid: the page runs the full logout cascade (both persisted stores,
//! session and profile state) and navigates to `/login`. Network and
//! server failures are shown inline and leave the session alone so the
//! user can retry. Update failures keep the editor open with the inputs
//! intact.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::state::editor::NameEditor;
use crate::state::session::Session;

/// Fallback when the profile fetch fails without a server message.
pub const PROFILE_LOAD_FAILED: &str = "Unable to load profile";
/// Fallback when the profile update fails without a server message.
pub const PROFILE_UPDATE_FAILED: &str = "Unable to update profile";

/// Static demo accounts shown below the profile header.
const ACCOUNTS: [(&str, &str, &str); 3] = [
    ("Argent Bank Checking (x8349)", "$2,082.79", "Available Balance"),
    ("Argent Bank Savings (x6712)", "$10,928.42", "Available Balance"),
    ("Argent Bank Credit Card (x8349)", "$184.30", "Current Balance"),
];

/// Profile page.
///
/// Requires a token: without one it navigates to `/login` immediately and
/// never issues a request. Otherwise it fetches the profile on mount and
/// renders the name editor plus the account list.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    // Track only the token so profile updates do not re-trigger the fetch.
    let token = Memo::new(move |_| session.with(|s| s.auth.token.clone()));
    let load_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let token_value = token.get();
        if token_value.is_empty() {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_profile(&token_value).await {
                    Ok(body) => {
                        load_error.set(None);
                        session.update(|s| s.profile_loaded(body));
                    }
                    Err(err) if err.is_auth() => {
                        log::warn!("session rejected, signing out");
                        crate::util::token_store::clear_tokens();
                        session.update(Session::logout);
                        navigate(
                            "/login",
                            NavigateOptions {
                                replace: true,
                                ..NavigateOptions::default()
                            },
                        );
                    }
                    Err(err) => {
                        load_error.set(Some(err.user_message(PROFILE_LOAD_FAILED)));
                    }
                }
            });
        }
    });

    let editor = RwSignal::new(NameEditor::default());

    let on_edit = move |_| {
        let current = session.get_untracked().profile;
        editor.update(|e| e.start(&current));
    };

    let on_cancel = move |_| editor.update(NameEditor::cancel);

    let on_save = move |_| {
        // Local trim-validation; a blank name sets the error and sends
        // nothing.
        let Some((first, last)) = editor.try_update(NameEditor::submit).flatten() else {
            return;
        };

        let token_value = session.get_untracked().auth.token;
        if token_value.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_profile(&token_value, &first, &last).await {
                    Ok(body) => {
                        session.update(|s| s.profile_loaded(body));
                        editor.update(NameEditor::save_succeeded);
                    }
                    Err(err) => {
                        let message = err.user_message(PROFILE_UPDATE_FAILED);
                        editor.update(|e| e.save_failed(message));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (first, last);
        }
    };

    let welcome_name = move || {
        let profile = session.get().profile;
        format!("{} {}!", profile.first_name, profile.last_name)
    };

    view! {
        <Header/>

        <main class="main bg-dark">
            <div class="header">
                <Show
                    when=move || editor.get().editing
                    fallback=move || {
                        view! {
                            <h1>"Welcome back" <br/> {welcome_name}</h1>
                            <button class="edit-button" type="button" on:click=on_edit>
                                "Edit Name"
                            </button>
                        }
                    }
                >
                    <h1>"Welcome back"</h1>
                    <div class="input-wrapper">
                        <input
                            type="text"
                            aria-label="First name"
                            prop:value=move || editor.get().first_name
                            on:input=move |ev| {
                                editor.update(|e| e.first_name = event_target_value(&ev));
                            }
                        />
                        <input
                            type="text"
                            aria-label="Last name"
                            prop:value=move || editor.get().last_name
                            on:input=move |ev| {
                                editor.update(|e| e.last_name = event_target_value(&ev));
                            }
                        />
                    </div>
                    {move || {
                        editor.get().error.map(|message| view! { <p class="edit-error">{message}</p> })
                    }}
                    <div class="input-wrapper">
                        <button
                            class="edit-button"
                            type="button"
                            prop:disabled=move || editor.get().saving
                            on:click=on_save
                        >
                            "Save"
                        </button>
                        <button class="edit-button" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                    </div>
                </Show>

                {move || {
                    load_error.get().map(|message| view! { <p class="load-error">{message}</p> })
                }}
            </div>

            <h2 class="sr-only">"Accounts"</h2>
            {ACCOUNTS
                .into_iter()
                .map(|(title, amount, description)| {
                    view! {
                        <AccountSection title=title amount=amount description=description/>
                    }
                })
                .collect::<Vec<_>>()}
        </main>

        <Footer/>
    }
}

/// One account row with its call-to-action button.
#[component]
fn AccountSection(
    title: &'static str,
    amount: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <section class="account">
            <div class="account-content-wrapper">
                <h3 class="account-title">{title}</h3>
                <p class="account-amount">{amount}</p>
                <p class="account-amount-description">{description}</p>
            </div>
            <div class="account-content-wrapper cta">
                <button class="transaction-button" type="button">
                    "View transactions"
                </button>
            </div>
        </section>
    }
}
