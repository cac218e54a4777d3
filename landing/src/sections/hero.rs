use crate::DemoModal;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let DemoModal(demo_open) = expect_context::<DemoModal>();

    view! {
        <section id="hero" class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            "Nouveau : SYMPA, le compagnon du maintien à domicile"
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Rester chez soi,"</span>
                            <br />
                            "en sécurité et bien entouré."
                        </h1>
                        <p class="hero-description">
                            "Solutions pour le maintien à domicile — sécurité, interaction et autonomie. "
                            "SYMPA veille, rappelle, rassure et prévient vos proches quand il le faut."
                        </p>
                        <div class="hero-actions">
                            <a href="#pricing" class="btn btn-primary">"Voir les offres"</a>
                            <button class="btn btn-secondary" on:click=move |_| demo_open.set(true)>
                                "Regarder la démo ▶"
                            </button>
                        </div>
                    </div>
                    <div class="hero-visual" role="img" aria-label="Le robot SYMPA">
                        <span class="media-placeholder">"🤖"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
