// SYMPA landing page — Leptos 0.8 Edition

mod browser;
mod sections;
mod telemetry;

use leptos::prelude::*;
use sections::*;
use sympa::SiteConfig;
use wasm_bindgen::JsCast;

/// Element the app renders into (see index.html).
const MOUNT_POINT_ID: &str = "root";

fn main() {
    console_error_panic_hook::set_once();
    telemetry::init();

    let config = SiteConfig::from_toml_str(include_str!("../site.toml"));

    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_POINT_ID))
    else {
        wasm_bindgen::throw_str(&format!(
            "mount point #{MOUNT_POINT_ID} not found in index.html"
        ));
    };

    tracing::info!(mount = MOUNT_POINT_ID, "mounting landing page");
    leptos::mount::mount_to(root.unchecked_into(), move || view! { <App config=config /> }).forget();
}

/// Open/closed state of the demo video overlay, shared by the sections that open it.
#[derive(Clone, Copy)]
pub struct DemoModal(pub RwSignal<bool>);

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);
    provide_context(DemoModal(RwSignal::new(false)));

    view! {
        <Nav />
        <main>
            <Hero />
            <Features />
            <Pricing />
            <DemoSection />
            <PromoCounter />
            <Testimonials />
            <Faq />
        </main>
        <Footer />
        <VideoModal />
    }
}
