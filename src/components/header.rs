//! Top navigation bar, auth-aware.

use leptos::prelude::*;

use crate::state::session::Session;
use crate::util::token_store;

/// Nav bar — shows "Sign In" when unauthenticated, otherwise the user's
/// first name and a "Sign Out" link that runs the full logout cascade
/// (both persisted stores plus session and profile state).
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    let authenticated = move || session.get().auth.is_authenticated();
    let first_name = move || {
        let name = session.get().profile.first_name;
        if name.is_empty() { "User".to_owned() } else { name }
    };

    let on_logout = move |_| {
        token_store::clear_tokens();
        session.update(Session::logout);
        #[cfg(feature = "hydrate")]
        log::info!("signed out");
    };

    view! {
        <nav class="main-nav">
            <a class="main-nav-logo" href="/">
                <img
                    class="main-nav-logo-image"
                    src="/assets/img/argentBankLogo.png"
                    alt="Argent Bank Logo"
                />
                <h1 class="sr-only">"Argent Bank"</h1>
            </a>
            <div>
                <Show
                    when=authenticated
                    fallback=|| {
                        view! {
                            <a class="main-nav-item" href="/login">
                                <i class="fa fa-user-circle"></i>
                                " Sign In"
                            </a>
                        }
                    }
                >
                    <a class="main-nav-item" href="/profile">
                        <i class="fa fa-user-circle"></i>
                        " "
                        {first_name}
                    </a>
                    <a class="main-nav-item" href="/" on:click=on_logout>
                        <i class="fa fa-sign-out"></i>
                        " Sign Out"
                    </a>
                </Show>
            </div>
        </nav>
    }
}
