use std::sync::Arc;

use leptos::{ev::KeyboardEvent, html, prelude::*};

use crate::clock::DEFAULT_LOCALE;
#[cfg(feature = "hydrate")]
use crate::clock::{BrowserScheduler, LiveClock};
use crate::resources::{DISPLAY, PERSON};
#[cfg(feature = "hydrate")]
use crate::timezone::LocalStoragePreferences;
#[cfg(not(feature = "hydrate"))]
use crate::timezone::MemoryPreferences;
use crate::timezone::{
    Key, PreferenceStore, SearchState, Selection, TimezoneId, TimezoneSelector,
    GLOBAL_TIMEZONE_CATALOG,
};

#[component]
pub fn Header() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let store: Arc<dyn PreferenceStore> = Arc::new(LocalStoragePreferences::new());
    // nothing persistent to read while rendering on the server
    #[cfg(not(feature = "hydrate"))]
    let store: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferences::default());

    let selection = StoredValue::new(Selection::restore(
        store,
        TimezoneId::from(PERSON.location),
    ));
    let (selected, set_selected) = signal(selection.with_value(|s| s.current().clone()));

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            let restored = selection.try_update_value(|s| s.reload().clone());
            if let Some(tz) = restored {
                if tz != selected.get_untracked() {
                    set_selected.set(tz);
                }
            }
        },
        true,
    );

    let on_change = Callback::new(move |tz: TimezoneId| {
        selection.update_value(|s| s.commit(tz.clone()));
        set_selected.set(tz);
    });

    let show_time_or_location = DISPLAY.time || DISPLAY.location;

    view! {
        <header class="sticky top-0 z-10 w-full p-2">
            <div class="flex items-center w-full pl-3 text-sm">
                {show_time_or_location
                    .then(|| {
                        view! {
                            <div class="hidden sm:flex flex-col gap-0.5">
                                <TimezoneAutocomplete value=selected on_change />
                                {DISPLAY
                                    .time
                                    .then(|| {
                                        view! {
                                            <div class="text-muted">
                                                <TimeDisplay time_zone=selected />
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    })}
            </div>
        </header>
    }
}

#[component]
fn TimezoneAutocomplete(
    value: ReadSignal<TimezoneId>,
    on_change: Callback<TimezoneId>,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let selector = StoredValue::new(TimezoneSelector::new(
        GLOBAL_TIMEZONE_CATALOG.clone(),
        value.get_untracked(),
    ));
    let (text, set_text) = signal(selector.with_value(|s| s.text().to_string()));
    let (search, set_search) = signal(SearchState::Closed);

    // push selector state out to the view after every transition
    let sync = move || {
        selector.with_value(|s| {
            set_text.set(s.text().to_string());
            set_search.set(s.state().clone());
        });
    };

    let finish = move |committed: Option<TimezoneId>| {
        sync();
        if let Some(tz) = committed {
            on_change.run(tz);
            if let Some(el) = input_ref.get_untracked() {
                let _ = el.blur();
            }
        }
    };

    Effect::watch(
        move || value.get(),
        move |tz, _, _| {
            selector.update_value(|s| s.set_committed(tz.clone()));
            sync();
        },
        false,
    );

    let keydown_handler = move |ev: KeyboardEvent| {
        let key = Key::from(ev.key().as_str());
        let navigating = matches!(key, Key::ArrowDown | Key::ArrowUp | Key::Enter);
        if navigating && selector.with_value(|s| s.is_open() && !s.matches().is_empty()) {
            ev.prevent_default();
        }
        let committed = selector.try_update_value(|s| s.on_key(key)).flatten();
        finish(committed);
    };

    view! {
        <div class="relative w-64">
            <input
                node_ref=input_ref
                type="text"
                placeholder="Search timezone..."
                spellcheck="false"
                autocomplete="off"
                class="w-full px-2 py-1 rounded-md bg-transparent border border-transparent focus:border-muted focus:outline-none"
                prop:value=move || text.get()
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    selector.update_value(|s| {
                        s.on_query_change(&query);
                    });
                    sync();
                }
                on:focus=move |_| {
                    selector.update_value(|s| {
                        s.on_focus();
                    });
                    sync();
                }
                on:blur=move |_| {
                    selector.update_value(|s| {
                        s.on_blur_outside();
                    });
                    sync();
                }
                on:keydown=keydown_handler
            />
            {move || {
                let state = search.get();
                let highlighted = state.highlighted();
                let matches = state.matches().to_vec();
                if matches.is_empty() {
                    return None;
                }
                Some(
                    view! {
                        <ul class="absolute left-0 mt-1 w-full max-h-64 overflow-y-auto rounded-md border border-muted/30 bg-background shadow-lg z-20">
                            {matches
                                .into_iter()
                                .enumerate()
                                .map(|(i, tz)| {
                                    let label = tz.label();
                                    view! {
                                        <li
                                            class=if Some(i) == highlighted {
                                                "px-2 py-1 cursor-pointer bg-brightBlack/30"
                                            } else {
                                                "px-2 py-1 cursor-pointer"
                                            }
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                let committed = selector
                                                    .try_update_value(|s| s.select_direct(&tz))
                                                    .flatten();
                                                finish(committed);
                                            }
                                            on:mouseenter=move |_| {
                                                selector.update_value(|s| s.on_hover(i));
                                                sync();
                                            }
                                        >
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    },
                )
            }}
        </div>
    }
}

/// Local time in `time_zone`, refreshed every second once hydrated.
#[component]
fn TimeDisplay(
    #[prop(into)] time_zone: Signal<TimezoneId>,
    #[prop(optional, into)] locale: Option<String>,
) -> impl IntoView {
    let locale = locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let (current_time, set_current_time) = signal(String::new());

    #[cfg(feature = "hydrate")]
    {
        let clock = StoredValue::new(LiveClock::new(BrowserScheduler, move |s| {
            set_current_time.set(s)
        }));
        Effect::watch(
            move || time_zone.get(),
            move |tz, _, _| {
                clock.update_value(|c| c.start(tz.as_str(), &locale));
            },
            true,
        );
        on_cleanup(move || {
            clock.try_update_value(|c| c.stop());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (time_zone, locale, set_current_time);

    view! { <span class="tabular-nums">{current_time}</span> }
}
