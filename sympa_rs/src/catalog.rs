//! Robots shown on the pricing cards.

/// A product offered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub id: &'static str,
    pub name: &'static str,
    pub pitch: &'static str,
    /// Public recommended price, whole euros.
    pub price_eur: u32,
    pub features: &'static [&'static str],
}

pub const ROBOTS: [Robot; 2] = [
    Robot {
        id: "r1",
        name: "Compagnon SYMPA",
        pitch: "Robot d'accompagnement pour seniors — sécurité, assistance et présence quotidienne.",
        price_eur: 4000,
        features: &[
            "Aide à la mobilité légère",
            "Surveillance santé basique",
            "Appels d'urgence automatiques",
            "Interaction vocale chaleureuse",
        ],
    },
    Robot {
        id: "r2",
        name: "Gardien JOIE",
        pitch: "Robot de surveillance domestique et assistance sociale.",
        price_eur: 4000,
        features: &["Détection de chutes", "Notif. famille", "Agenda vocal"],
    },
];

/// French-style price: thousands grouped with a no-break space, `€` suffix.
///
/// `4000` gives `"4 000 €"` (both spaces are U+00A0).
pub fn format_price(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    grouped.push_str("\u{a0}€");
    grouped
}
