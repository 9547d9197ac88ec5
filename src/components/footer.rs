//! Static page footer.

use leptos::prelude::*;

/// Copyright footer shown on every page.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer-text">"Copyright 2020 Argent Bank"</p>
        </footer>
    }
}
