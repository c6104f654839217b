//! Project detail view

use crate::catalog::Catalog;
use crate::surface::{Effect, SurfaceId};
use crate::types::Project;

use super::{DetailViewer, SurfacePair, Visibility};

/// Inputs of the project detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// A portfolio card was activated
    Open(String),
    /// Back to the portfolio
    Close,
    /// The "next project" control
    Advance,
}

/// Project gallery: open, close and cycle through projects
#[derive(Debug, Clone)]
pub struct CatalogBrowser {
    viewer: DetailViewer<Project>,
}

impl CatalogBrowser {
    pub const SURFACES: SurfacePair = SurfacePair {
        listing: SurfaceId::MainContent,
        detail: SurfaceId::ProjectDetail,
    };

    pub fn new(catalog: Catalog<Project>) -> Self {
        Self {
            viewer: DetailViewer::new(catalog, Self::SURFACES),
        }
    }

    pub fn handle(&mut self, event: BrowserEvent) -> Vec<Effect> {
        match event {
            BrowserEvent::Open(id) => self.open(&id),
            BrowserEvent::Close => self.close(),
            BrowserEvent::Advance => self.advance(),
        }
    }

    pub fn open(&mut self, id: &str) -> Vec<Effect> {
        self.viewer.open(id)
    }

    pub fn close(&mut self) -> Vec<Effect> {
        self.viewer.close()
    }

    /// Open the project after the current one, wrapping to the first.
    ///
    /// With nothing opened yet the current index counts as -1, which lands on
    /// the first project.
    pub fn advance(&mut self) -> Vec<Effect> {
        let count = self.viewer.catalog().len();
        if count == 0 {
            return Vec::new();
        }
        let next = self
            .viewer
            .current_position()
            .map_or(0, |position| (position + 1) % count);
        self.viewer.open_at(next)
    }

    pub fn catalog(&self) -> &Catalog<Project> {
        self.viewer.catalog()
    }

    pub fn current(&self) -> Option<&Project> {
        self.viewer.current()
    }

    pub fn current_id(&self) -> Option<&str> {
        self.viewer.current_id()
    }

    pub fn visibility(&self) -> Visibility {
        self.viewer.visibility()
    }

    pub fn is_detail_visible(&self) -> bool {
        self.viewer.is_detail_visible()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::catalog::Catalogs;
    use crate::surface::{apply, MemorySurface, SlotId};
    use crate::test_utils::{sample_catalogs, sample_projects};

    fn setup() -> (CatalogBrowser, MemorySurface) {
        let catalogs = sample_catalogs();
        let surface = MemorySurface::for_site(&catalogs);
        (CatalogBrowser::new(catalogs.projects), surface)
    }

    fn title(surface: &MemorySurface) -> &str {
        surface.text(SlotId::ProjectTitle).unwrap()
    }

    #[test]
    fn test_open_renders_every_field() {
        let (mut browser, mut surface) = setup();
        for project in sample_projects().iter() {
            apply(&mut surface, browser.open(&project.id));
            assert_eq!(surface.text(SlotId::ProjectTitle), Some(project.title.as_str()));
            assert_eq!(surface.text(SlotId::ProjectCategory), Some(project.category.as_str()));
            assert_eq!(surface.text(SlotId::ProjectHero), Some(project.emoji.as_str()));
            assert_eq!(surface.text(SlotId::ProjectConcept), Some(project.concept.as_str()));
            assert_eq!(
                surface.text(SlotId::ProjectReflection),
                Some(project.reflection.as_str())
            );
        }
    }

    #[test]
    fn test_open_toggles_surfaces_and_scrolls() {
        let (mut browser, mut surface) = setup();
        surface.scroll_to(30);

        apply(&mut surface, browser.open("p2"));

        assert_eq!(browser.visibility(), Visibility::Detail);
        assert!(!surface.is_shown(SurfaceId::MainContent));
        assert!(surface.is_shown(SurfaceId::ProjectDetail));
        assert_eq!(surface.scroll().offset, 0);
        assert!(surface.scroll().smooth);
    }

    #[test]
    fn test_open_unknown_is_noop() {
        let (mut browser, mut surface) = setup();
        apply(&mut surface, browser.open("p1"));
        apply(&mut surface, browser.close());

        let effects = browser.open("nope");

        assert!(effects.is_empty());
        assert_eq!(browser.current_id(), Some("p1"));
        assert_eq!(browser.visibility(), Visibility::Listing);
        assert!(surface.is_shown(SurfaceId::MainContent));
    }

    #[test]
    fn test_advance_wraps_around() {
        let (mut browser, mut surface) = setup();

        apply(&mut surface, browser.open("p2"));
        assert_eq!(title(&surface), "Villa");

        apply(&mut surface, browser.advance());
        assert_eq!(title(&surface), "Studio");

        apply(&mut surface, browser.advance());
        assert_eq!(title(&surface), "Loft");
        assert_eq!(browser.current_id(), Some("p1"));
    }

    #[test]
    fn test_advance_n_times_returns_to_start() {
        let (mut browser, _) = setup();
        let count = browser.catalog().len();
        for start in ["p1", "p2", "p3"] {
            browser.open(start);
            for _ in 0..count {
                browser.advance();
            }
            assert_eq!(browser.current_id(), Some(start));
        }
    }

    #[test]
    fn test_advance_without_selection_opens_first() {
        let (mut browser, mut surface) = setup();

        apply(&mut surface, browser.handle(BrowserEvent::Advance));

        assert_eq!(browser.current_id(), Some("p1"));
        assert!(surface.is_shown(SurfaceId::ProjectDetail));
    }

    #[test]
    fn test_advance_on_empty_catalog_is_noop() {
        let mut browser = CatalogBrowser::new(Catalogs::default().projects);
        assert!(browser.advance().is_empty());
        assert_eq!(browser.current_id(), None);
    }

    #[test]
    fn test_close_keeps_selection() {
        let (mut browser, mut surface) = setup();
        apply(&mut surface, browser.handle(BrowserEvent::Open("p3".into())));
        apply(&mut surface, browser.handle(BrowserEvent::Close));

        assert!(surface.is_shown(SurfaceId::MainContent));
        assert!(!surface.is_shown(SurfaceId::ProjectDetail));
        assert_eq!(browser.current_id(), Some("p3"));

        apply(&mut surface, browser.advance());
        assert_eq!(title(&surface), "Loft");
    }

    #[test]
    fn test_surfaces_never_both_visible() {
        let (mut browser, mut surface) = setup();
        let events = [
            BrowserEvent::Open("p1".into()),
            BrowserEvent::Advance,
            BrowserEvent::Close,
            BrowserEvent::Close,
            BrowserEvent::Open("missing".into()),
            BrowserEvent::Advance,
        ];
        for event in events {
            apply(&mut surface, browser.handle(event));
            assert_ne!(
                surface.is_shown(SurfaceId::MainContent),
                surface.is_shown(SurfaceId::ProjectDetail)
            );
        }
    }
}
