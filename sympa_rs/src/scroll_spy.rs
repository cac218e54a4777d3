//! Which page section the nav should highlight.
//!
//! The browser side samples `getBoundingClientRect()` for each tracked section
//! on scroll and feeds the result to [`compute_active_section`].

/// Distance from the top of the viewport of the line a section must straddle.
pub const DEFAULT_SCROLL_OFFSET: f64 = 120.0;

/// Tracked page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Features,
    Pricing,
    Demo,
    Promo,
    Testimonials,
    Faq,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::Features,
        Section::Pricing,
        Section::Demo,
        Section::Promo,
        Section::Testimonials,
        Section::Faq,
    ];

    /// DOM id of the section element (also the `#fragment` in nav links).
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::Pricing => "pricing",
            Section::Demo => "demo",
            Section::Promo => "promo",
            Section::Testimonials => "testimonials",
            Section::Faq => "faq",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Section::Hero => "Accueil",
            Section::Features => "Fonctionnalités",
            Section::Pricing => "Tarifs",
            Section::Demo => "Démo",
            Section::Promo => "Offre",
            Section::Testimonials => "Témoignages",
            Section::Faq => "FAQ",
        }
    }
}

/// Viewport-relative vertical bounds of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds<T> {
    pub id: T,
    pub top: f64,
    pub bottom: f64,
}

impl<T> SectionBounds<T> {
    pub fn new(id: T, top: f64, bottom: f64) -> Self {
        Self { id, top, bottom }
    }

    fn straddles(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Last section (in the given order) whose bounds straddle `threshold_y`.
///
/// Later sections win ties. Returns `None` when no section straddles the line.
pub fn compute_active_section<T: Clone>(bounds: &[SectionBounds<T>], threshold_y: f64) -> Option<T> {
    bounds
        .iter()
        .rev()
        .find(|b| b.straddles(threshold_y))
        .map(|b| b.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_is_active_when_line_is_inside_it() {
        let bounds = [
            SectionBounds::new("hero", -1400.0, -700.0),
            SectionBounds::new("features", -700.0, 40.0),
            SectionBounds::new("pricing", 40.0, 800.0),
            SectionBounds::new("faq", 800.0, 1300.0),
        ];
        assert_eq!(compute_active_section(&bounds, 120.0), Some("pricing"));
    }

    #[test]
    fn later_section_wins_shared_edge() {
        let bounds = [
            SectionBounds::new(Section::Features, -500.0, 120.0),
            SectionBounds::new(Section::Pricing, 120.0, 900.0),
        ];
        assert_eq!(
            compute_active_section(&bounds, DEFAULT_SCROLL_OFFSET),
            Some(Section::Pricing)
        );
    }

    #[test]
    fn overlapping_sections_resolve_to_last() {
        let bounds = [
            SectionBounds::new("hero", 0.0, 1000.0),
            SectionBounds::new("promo", 100.0, 200.0),
        ];
        assert_eq!(compute_active_section(&bounds, 150.0), Some("promo"));
    }

    #[test]
    fn none_when_line_falls_between_sections() {
        let bounds = [
            SectionBounds::new("hero", -600.0, 60.0),
            SectionBounds::new("features", 200.0, 900.0),
        ];
        assert_eq!(compute_active_section(&bounds, 120.0), None);
        assert_eq!(compute_active_section::<&str>(&[], 120.0), None);
    }

    #[test]
    fn section_ids_are_distinct() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
