//! Built-in testimonials shown until a visitor's own list has been saved.

use chrono::NaiveDate;

use crate::review::Review;

const SEED: [(&str, &str, &str, (i32, u32, u32)); 3] = [
    (
        "c1",
        "Marie, 72 ans",
        "Depuis que j'ai SYMPA à la maison, je me sens moins seule. Il me tient compagnie et rappelle mes rendez-vous — ça me rassure énormément.",
        (2025, 8, 12),
    ),
    (
        "c2",
        "Antoine (fils de Gérard)",
        "Mon père a retrouvé le sourire. Le robot n'a pas remplacé les visites, mais il a donné un vrai plus pour sa sécurité et sa liberté.",
        (2025, 6, 30),
    ),
    (
        "c3",
        "Nadia, 65 ans",
        "Je me promène plus sereinement maintenant. Quand j'oublie quelque chose, le robot m'aide et me rassure. C'est devenu presque un ami.",
        (2025, 9, 5),
    ),
];

/// The three default reviews, in display order.
pub fn default_reviews() -> Vec<Review> {
    SEED.iter()
        .filter_map(|&(id, name, text, (y, m, d))| {
            NaiveDate::from_ymd_opt(y, m, d).map(|date| Review::new(id, name, text, date))
        })
        .collect()
}
