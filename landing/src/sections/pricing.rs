use leptos::prelude::*;
use sympa::catalog::{ROBOTS, Robot, format_price};

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Tarifs"</p>
                    <h2 class="section-title">"Nos robots"</h2>
                    <p class="section-description">
                        "Un prix unique, installation à domicile et formation de la famille comprises."
                    </p>
                </div>
                <div class="pricing-grid">
                    {ROBOTS.iter().map(|robot| view! { <PricingCard robot=*robot /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(robot: Robot) -> impl IntoView {
    view! {
        <article class="pricing-card">
            <div class="pricing-card-header">
                <div>
                    <h3 class="pricing-card-title">{robot.name}</h3>
                    <p class="pricing-card-pitch">{robot.pitch}</p>
                </div>
                <div class="pricing-card-price">
                    <span class="price">{format_price(robot.price_eur)}</span>
                    <span class="price-note">"prix public conseillé"</span>
                </div>
            </div>
            <ul class="pricing-card-features">
                {robot
                    .features
                    .iter()
                    .map(|feature| view! { <li><span class="check">"✓"</span>{*feature}</li> })
                    .collect_view()}
            </ul>
            <div class="pricing-card-actions">
                <a href="mailto:contact@dousys.fr?subject=Demande%20de%20d%C3%A9mo" class="btn btn-primary">
                    "Demander une démo"
                </a>
                <a href="#faq" class="btn btn-secondary">"Voir la fiche"</a>
            </div>
        </article>
    }
}
