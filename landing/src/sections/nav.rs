use crate::browser::section_bounds;
use leptos::prelude::*;
use sympa::{Section, SiteConfig, compute_active_section};
use wasm_bindgen::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let offset = expect_context::<SiteConfig>().scroll_spy.offset_px;
    let active = RwSignal::new(None::<Section>);
    let menu_open = RwSignal::new(false);

    // Sample once on mount, then on every scroll
    Effect::new(move || {
        refresh_active(active, offset);
        setup_scroll_listener(active, offset);
    });

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#hero" class="nav-brand">
                    <span class="nav-title">"DO/USYS"</span>
                    <span class="nav-tagline">"Robots d'accompagnement"</span>
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Menu"
                    on:click=move |_| menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {Section::ALL
                        .into_iter()
                        .map(move |section| {
                            view! {
                                <a
                                    href=format!("#{}", section.id())
                                    class=move || {
                                        if active.get() == Some(section) { "nav-link active" } else { "nav-link" }
                                    }
                                    on:click=move |_| menu_open.set(false)
                                >
                                    {section.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

/// Recompute the highlighted section; only notifies when it changes.
fn refresh_active(active: RwSignal<Option<Section>>, offset: f64) {
    let next = compute_active_section(&section_bounds(), offset);
    active.maybe_update(|current| {
        let changed = *current != next;
        *current = next;
        changed
    });
}

fn setup_scroll_listener(active: RwSignal<Option<Section>>, offset: f64) {
    use wasm_bindgen::closure::Closure;

    if let Some(window) = web_sys::window() {
        let closure = Closure::wrap(Box::new(move || {
            refresh_active(active, offset);
        }) as Box<dyn FnMut()>);

        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());

        closure.forget(); // Lives as long as the page
    }
}
