//! Scroll-triggered fade-in
//!
//! Elements register their vertical bounds. Whenever the viewport moves, any
//! element with enough of itself inside the viewport gets the fade-in class,
//! once. Scrolling away never takes it back.

use crate::surface::{Effect, ElementId};

pub const FADE_IN_CLASS: &str = "fade-in";

/// Vertical extent of an element or of the viewport, in document units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub top: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// Watcher tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeInOptions {
    /// Fraction of the element that must be inside the viewport
    pub threshold: f64,
    /// Amount the viewport bottom is pulled up before testing
    pub bottom_margin: u32,
}

impl Default for FadeInOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50,
        }
    }
}

/// Fraction of `element` inside `viewport` after shrinking its bottom by `bottom_margin`
pub fn intersection_ratio(element: Bounds, viewport: Bounds, bottom_margin: u32) -> f64 {
    let root_top = viewport.top;
    let root_bottom = viewport.bottom().saturating_sub(bottom_margin).max(root_top);
    let overlap_top = element.top.max(root_top);
    let overlap_bottom = element.bottom().min(root_bottom);
    if overlap_bottom <= overlap_top {
        return 0.0;
    }
    if element.height == 0 {
        return 1.0;
    }
    f64::from(overlap_bottom - overlap_top) / f64::from(element.height)
}

#[derive(Debug, Clone)]
struct Observed {
    element: ElementId,
    /// `None` while the element is not laid out (hidden or off-page)
    bounds: Option<Bounds>,
    revealed: bool,
}

/// One-shot visibility watcher
#[derive(Debug, Clone, Default)]
pub struct FadeInWatcher {
    options: FadeInOptions,
    observed: Vec<Observed>,
}

impl FadeInWatcher {
    pub fn new(options: FadeInOptions) -> Self {
        Self {
            options,
            observed: Vec::new(),
        }
    }

    pub fn options(&self) -> FadeInOptions {
        self.options
    }

    /// Start watching `element`, or update its bounds after a relayout.
    ///
    /// `None` means the element currently takes no space and cannot intersect.
    pub fn observe(&mut self, element: ElementId, bounds: Option<Bounds>) {
        match self.observed.iter_mut().find(|o| o.element == element) {
            Some(observed) => observed.bounds = bounds,
            None => self.observed.push(Observed {
                element,
                bounds,
                revealed: false,
            }),
        }
    }

    /// Check every unrevealed element against the viewport
    pub fn check(&mut self, viewport: Bounds) -> Vec<Effect> {
        let FadeInOptions {
            threshold,
            bottom_margin,
        } = self.options;
        let mut effects = Vec::new();
        for observed in self.observed.iter_mut().filter(|o| !o.revealed) {
            let Some(bounds) = observed.bounds else {
                continue;
            };
            let ratio = intersection_ratio(bounds, viewport, bottom_margin);
            if ratio > 0.0 && ratio >= threshold {
                observed.revealed = true;
                effects.push(Effect::AddClass {
                    element: observed.element.clone(),
                    class: FADE_IN_CLASS,
                });
            }
        }
        effects
    }

    pub fn is_revealed(&self, element: &ElementId) -> bool {
        self.observed
            .iter()
            .any(|o| o.revealed && &o.element == element)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::surface::{apply, MemorySurface};

    fn card(id: &str) -> ElementId {
        ElementId::PortfolioCard(id.to_string())
    }

    #[test]
    fn test_ratio_respects_bottom_margin() {
        let viewport = Bounds::new(0, 600);
        // 550..650: inside the raw viewport by 50, but the margin eats it
        assert!(intersection_ratio(Bounds::new(550, 100), viewport, 50).abs() < f64::EPSILON);
        // 500..600: 50 of 100 above the shrunk bottom
        let ratio = intersection_ratio(Bounds::new(500, 100), viewport, 50);
        assert!((ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_reveal_once_threshold_met() {
        let mut watcher = FadeInWatcher::default();
        watcher.observe(card("p1"), Some(Bounds::new(100, 100)));
        watcher.observe(card("p2"), Some(Bounds::new(900, 100)));

        let effects = watcher.check(Bounds::new(0, 600));

        assert_eq!(
            effects,
            vec![Effect::AddClass {
                element: card("p1"),
                class: FADE_IN_CLASS
            }]
        );
        assert!(watcher.is_revealed(&card("p1")));
        assert!(!watcher.is_revealed(&card("p2")));
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut watcher = FadeInWatcher::default();
        // 545..645 leaves 5 of 100 inside 0..550
        watcher.observe(card("p1"), Some(Bounds::new(545, 100)));
        assert!(watcher.check(Bounds::new(0, 600)).is_empty());

        // scrolling 10 further brings 15 in
        assert_eq!(watcher.check(Bounds::new(10, 600)).len(), 1);
    }

    #[test]
    fn test_reveal_is_irreversible() {
        let mut watcher = FadeInWatcher::default();
        let mut surface = MemorySurface::new().with_element(card("p1"));
        watcher.observe(card("p1"), Some(Bounds::new(0, 100)));

        apply(&mut surface, watcher.check(Bounds::new(0, 600)));
        assert!(surface.has_class(&card("p1"), FADE_IN_CLASS));

        // scrolled far past, then back
        assert!(watcher.check(Bounds::new(5_000, 600)).is_empty());
        assert!(watcher.check(Bounds::new(0, 600)).is_empty());
        assert!(surface.has_class(&card("p1"), FADE_IN_CLASS));
    }

    #[test]
    fn test_unplaced_element_never_reveals() {
        let mut watcher = FadeInWatcher::default();
        watcher.observe(card("p1"), None);
        assert!(watcher.check(Bounds::new(0, 600)).is_empty());

        watcher.observe(card("p1"), Some(Bounds::new(0, 100)));
        assert_eq!(watcher.check(Bounds::new(0, 600)).len(), 1);
    }

    #[test]
    fn test_observe_updates_bounds() {
        let mut watcher = FadeInWatcher::new(FadeInOptions {
            threshold: 0.1,
            bottom_margin: 2,
        });
        watcher.observe(card("p1"), Some(Bounds::new(100, 3)));
        assert!(watcher.check(Bounds::new(0, 20)).is_empty());

        watcher.observe(card("p1"), Some(Bounds::new(4, 3)));
        assert_eq!(watcher.check(Bounds::new(0, 20)).len(), 1);
    }
}
