use leptos::prelude::*;
use std::time::Duration;
use sympa::promo::{PromoState, countdown};
use sympa::{Clock, SiteConfig, SystemClock};

#[component]
pub fn PromoCounter() -> impl IntoView {
    let promo = expect_context::<SiteConfig>().promo;
    let Some(ends_at) = promo.ends_at else {
        return view! { <section id="promo" class="promo promo-hidden"></section> }.into_any();
    };

    let now = RwSignal::new(SystemClock.now());
    set_interval(move || now.set(SystemClock.now()), Duration::from_secs(1));

    let state = move || countdown(now.get(), ends_at);

    view! {
        <section id="promo" class="promo">
            <div class="container">
                <div class="promo-box">
                    <p class="promo-headline">{promo.headline}</p>
                    {move || match state() {
                        PromoState::Running(left) => {
                            view! {
                                <div class="promo-counter" aria-label=left.label()>
                                    <CounterCell value=left.days unit="jours" />
                                    <CounterCell value=left.hours unit="heures" />
                                    <CounterCell value=left.minutes unit="min" />
                                    <CounterCell value=left.seconds unit="s" />
                                </div>
                            }
                                .into_any()
                        }
                        PromoState::Expired => {
                            view! { <p class="promo-expired">"Cette offre est terminée."</p> }.into_any()
                        }
                    }}
                </div>
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn CounterCell(value: i64, unit: &'static str) -> impl IntoView {
    view! {
        <div class="counter-cell">
            <span class="counter-value">{format!("{value:02}")}</span>
            <span class="counter-unit">{unit}</span>
        </div>
    }
}
