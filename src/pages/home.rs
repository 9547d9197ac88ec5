//! Static landing page with the marketing hero and feature blurbs.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;

/// Landing page — static content only, no state beyond the shared header.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>

        <main class="main">
            <div class="hero">
                <section class="hero-content">
                    <h2 class="sr-only">"Promoted Content"</h2>
                    <p class="subtitle">"No fees."</p>
                    <p class="subtitle">"No minimum deposit."</p>
                    <p class="subtitle">"High interest rates."</p>
                    <p class="text">"Open a savings account with Argent Bank today!"</p>
                </section>
            </div>

            <section class="features">
                <h2 class="sr-only">"Features"</h2>
                <FeatureItem
                    icon="/assets/img/icon-chat.png"
                    title="You are our #1 priority"
                    text="Need to talk to a representative? You can get in touch through our 24/7 chat or through a phone call in less than 5 minutes."
                />
                <FeatureItem
                    icon="/assets/img/icon-money.png"
                    title="More savings means higher rates"
                    text="The more you save with us, the higher your interest rate will be!"
                />
                <FeatureItem
                    icon="/assets/img/icon-security.png"
                    title="Security you can trust"
                    text="We use top of the line encryption to make sure your data and money is always safe."
                />
            </section>
        </main>

        <Footer/>
    }
}

/// One feature blurb in the landing page grid.
#[component]
fn FeatureItem(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-item">
            <img src=icon alt="" class="feature-icon"/>
            <h3 class="feature-item-title">{title}</h3>
            <p>{text}</p>
        </div>
    }
}
