use leptos::prelude::*;

const QUESTIONS: &[(&str, &str)] = &[
    (
        "Faut-il une connexion Internet ?",
        "Le Wi-Fi est recommandé pour les appels vidéo et les notifications aux proches. Sans connexion, la détection de chutes et les rappels continuent de fonctionner.",
    ),
    (
        "Que se passe-t-il en cas de chute ?",
        "SYMPA demande d'abord si tout va bien. Sans réponse, il appelle automatiquement les contacts d'urgence puis, si besoin, les secours.",
    ),
    (
        "Le robot filme-t-il en permanence ?",
        "Non. La caméra ne s'active que pendant un appel vidéo ou une alerte, et un voyant l'indique toujours.",
    ),
    (
        "Qui installe le robot ?",
        "Un technicien DO/USYS l'installe à domicile, le configure et forme la personne accompagnée ainsi que sa famille.",
    ),
    (
        "Existe-t-il des aides au financement ?",
        "Selon votre situation, l'APA ou certaines caisses de retraite peuvent prendre en charge une partie du coût. Nous vous aidons à monter le dossier.",
    ),
];

#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="faq">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"FAQ"</p>
                    <h2 class="section-title">"Questions fréquentes"</h2>
                </div>
                <div class="faq-list">
                    {QUESTIONS
                        .iter()
                        .map(|&(question, answer)| view! { <FaqItem question=question answer=answer /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class=move || if open.get() { "faq-item open" } else { "faq-item" }>
            <button
                class="faq-question"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span>{question}</span>
                <span class="faq-toggle">{move || if open.get() { "−" } else { "+" }}</span>
            </button>
            <Show when=move || open.get()>
                <p class="faq-answer">{answer}</p>
            </Show>
        </div>
    }
}
