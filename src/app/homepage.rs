use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::resources::{HOME, PERSON};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <Meta name="description" content=HOME.description />
        <Meta property="og:title" content=HOME.title />
        <div class="max-w-3xl mx-auto page-content">
            <section class="flex flex-col items-center gap-4 mt-16 section-content">
                <img src=PERSON.avatar alt=PERSON.name class="w-32 h-32 rounded-full" />
                <p class="text-sm font-medium text-purple">{PERSON.role}</p>
                <h1 class="text-3xl lg:text-4xl font-bold text-center">{HOME.headline}</h1>
                <p class="text-lg text-center text-muted">{HOME.subline}</p>
            </section>
        </div>
    }
}
