use chrono::Datelike;
use leptos::prelude::*;
use sympa::{Clock, SystemClock};

#[component]
pub fn Footer() -> impl IntoView {
    let year = SystemClock.now().year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-links">
                    <a href="#hero" class="footer-link">"↑ Haut de page"</a>
                    <a href="mentions-legales.html" class="footer-link">"Mentions légales"</a>
                    <a href="mailto:contact@dousys.fr" class="footer-link">"Contact"</a>
                    <a href="tel:+33100000000" class="footer-link">"01 00 00 00 00"</a>
                </div>
                <p class="footer-copyright">{format!("© {year} DO/USYS — Tous droits réservés")}</p>
            </div>
        </footer>
    }
}
