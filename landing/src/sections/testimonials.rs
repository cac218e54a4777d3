//! Visitor testimonials: form + list, persisted to localStorage.

use crate::browser::{BrowserConfirm, LocalStorageSlot};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use sympa::{JsonSnapshot, RemoveOutcome, Review, ReviewForm, ReviewStore, SiteConfig};

type BrowserReviewStore = ReviewStore<JsonSnapshot<LocalStorageSlot>>;

#[component]
pub fn Testimonials() -> impl IntoView {
    let config = expect_context::<SiteConfig>().reviews;
    let store: RwSignal<BrowserReviewStore> = RwSignal::new(
        ReviewStore::open(JsonSnapshot::new(LocalStorageSlot::new(config.storage_key)))
            .with_confirm_prompt(config.confirm_prompt),
    );
    let form = RwSignal::new(ReviewForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut draft = form.get_untracked();
        if store.try_update(|store| draft.submit(store)).unwrap_or(false) {
            form.set(draft);
        }
    };

    let remove = move |id: String| {
        store.maybe_update(|store| store.remove(&id, &BrowserConfirm) == RemoveOutcome::Removed);
    };

    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Commentaires — Témoignages"</p>
                    <h2 class="section-title">"Ils vivent avec SYMPA"</h2>
                    <p class="section-description">"Retours véridiques & touchants"</p>
                </div>

                <form class="review-form" on:submit=on_submit>
                    <label class="review-label">
                        "Votre nom"
                        <input
                            class="review-input"
                            placeholder="Ex: Lucie, 68 ans"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="review-label">
                        "Votre retour"
                        <textarea
                            class="review-input"
                            rows="3"
                            placeholder="Racontez brièvement ce que le robot a changé pour vous ou un proche..."
                            prop:value=move || form.with(|f| f.text.clone())
                            on:input=move |ev| form.update(|f| f.text = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="review-actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || !form.with(ReviewForm::is_submittable)
                        >
                            "Ajouter mon commentaire"
                        </button>
                        <button type="button" class="btn btn-ghost" on:click=move |_| form.update(ReviewForm::clear)>
                            "Effacer"
                        </button>
                        <span class="review-hint">"Les commentaires sont publics"</span>
                    </div>
                </form>

                <Show
                    when=move || store.with(|s| !s.is_empty())
                    fallback=|| {
                        view! {
                            <p class="reviews-empty">"Aucun commentaire pour l'instant — soyez le premier."</p>
                        }
                    }
                >
                    <div class="reviews">
                        <For
                            each=move || store.with(|s| s.reviews().to_vec())
                            key=|review| review.id.clone()
                            children=move |review| view! { <ReviewCard review=review on_remove=remove /> }
                        />
                    </div>
                </Show>

                <p class="reviews-note">
                    <strong>"Note : "</strong>
                    "Les témoignages proviennent de particuliers et familles utilisant nos solutions."
                </p>
            </div>
        </section>
    }
}

#[component]
fn ReviewCard(review: Review, on_remove: impl Fn(String) + Copy + Send + 'static) -> impl IntoView {
    let initials = review.initials();
    let date = review.display_date();
    let Review { id, name, text, .. } = review;

    view! {
        <article class="review-card">
            <div class="review-avatar">{initials}</div>
            <div class="review-body">
                <div class="review-meta">
                    <div>
                        <div class="review-name">{name}</div>
                        <div class="review-date">{date}</div>
                    </div>
                    <span class="review-approved">"Approuvé ✓"</span>
                </div>
                <p class="review-text">{text}</p>
            </div>
            <button class="review-remove" title="Supprimer" on:click=move |_| on_remove(id.clone())>
                "✕"
            </button>
        </article>
    }
}
