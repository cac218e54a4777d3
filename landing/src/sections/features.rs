use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Fonctionnalités"</p>
                    <h2 class="section-title">"Une présence attentive, jour et nuit"</h2>
                    <p class="section-description">
                        "Conçu avec des ergothérapeutes et des familles, SYMPA se fait discret "
                        "quand tout va bien et réagit vite quand quelque chose ne va pas."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="🛡"
                        title="Sécurité"
                        description="Détection de chutes et appel d'urgence automatique, même la nuit."
                    />
                    <FeatureCard
                        icon="💬"
                        title="Conversation"
                        description="Interaction vocale chaleureuse, rappels de rendez-vous et de médicaments."
                    />
                    <FeatureCard
                        icon="🤝"
                        title="Lien familial"
                        description="Notifications aux proches et appels vidéo en un mot."
                    />
                    <FeatureCard
                        icon="🚶"
                        title="Mobilité"
                        description="Aide à la mobilité légère et accompagnement dans la maison."
                    />
                    <FeatureCard
                        icon="🩺"
                        title="Suivi santé"
                        description="Surveillance santé basique et journal partagé avec le médecin traitant."
                    />
                    <FeatureCard
                        icon="🏠"
                        title="Animaux & maison"
                        description="Veille sur le chien ou le chat, signale une porte restée ouverte."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
