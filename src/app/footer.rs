use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::resources::{PERSON, SOCIAL};

#[component]
pub fn Footer() -> impl IntoView {
    let current_year = Utc::now().year();

    view! {
        <footer class="flex flex-col items-center w-full p-2">
            <div class="flex flex-col sm:flex-row items-center justify-between gap-4 w-full max-w-3xl px-4 py-2">
                <p class="text-sm">
                    <span class="text-muted">{format!("© {current_year} /")}</span>
                    <span class="px-1">{PERSON.name}</span>
                </p>
                <div class="flex gap-4">
                    {SOCIAL
                        .iter()
                        .filter(|s| s.essential && !s.link.is_empty())
                        .map(|s| {
                            view! {
                                <a
                                    href=s.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-xl hover:text-purple transition-colors duration-200"
                                    title=s.name
                                    aria-label=s.name
                                >
                                    <i class=format!("devicon-{}-plain", s.icon)></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
