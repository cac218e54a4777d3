use crate::DemoModal;
use leptos::prelude::*;
use sympa::SiteConfig;

#[component]
pub fn DemoSection() -> impl IntoView {
    let DemoModal(demo_open) = expect_context::<DemoModal>();

    view! {
        <section id="demo" class="demo">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Démo"</p>
                    <h2 class="section-title">"SYMPA en situation"</h2>
                    <p class="section-description">
                        "Deux minutes chez Marie : réveil, rappel de médicaments, appel à sa fille."
                    </p>
                </div>
                <button class="demo-preview" aria-label="Lancer la vidéo de démonstration" on:click=move |_| demo_open.set(true)>
                    <span class="media-placeholder">"🎬"</span>
                    <span class="demo-play">"▶"</span>
                </button>
            </div>
        </section>
    }
}

/// Full-screen player. Closes on the close button or a click on the backdrop.
#[component]
pub fn VideoModal() -> impl IntoView {
    let DemoModal(demo_open) = expect_context::<DemoModal>();
    let video_url = expect_context::<SiteConfig>().demo.embed_url().map(str::to_owned);

    view! {
        <Show when=move || demo_open.get()>
            <div class="modal-backdrop" on:click=move |_| demo_open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <button
                        class="modal-close"
                        aria-label="Fermer"
                        on:click=move |_| demo_open.set(false)
                    >
                        "✕"
                    </button>
                    {match video_url.clone() {
                        Some(src) => {
                            view! {
                                <iframe
                                    class="modal-video"
                                    src=src
                                    title="Démonstration SYMPA"
                                    allow="autoplay; fullscreen; picture-in-picture"
                                    allowfullscreen=true
                                ></iframe>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="modal-video modal-video-pending">
                                    <span class="media-placeholder">"🎬"</span>
                                    <p>"La vidéo de démonstration arrive bientôt."</p>
                                    <a href="mailto:contact@dousys.fr?subject=Demande%20de%20d%C3%A9mo" class="btn btn-primary">
                                        "Demander une démo à domicile"
                                    </a>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}
