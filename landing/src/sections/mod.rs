// Landing page sections

mod demo;
mod faq;
mod features;
mod footer;
mod hero;
mod nav;
mod pricing;
mod promo;
mod testimonials;

pub use demo::{DemoSection, VideoModal};
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use pricing::Pricing;
pub use promo::PromoCounter;
pub use testimonials::Testimonials;
