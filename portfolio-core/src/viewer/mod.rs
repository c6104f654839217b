//! Detail-view state machines
//!
//! A viewer pairs a catalog with two mutually exclusive surfaces: the listing
//! that shows every record as a card, and the detail that shows one record in
//! full. Both front-ends drive it the same way:
//!
//! ```text
//!   input ──▶ event ──▶ viewer.handle() ──▶ Vec<Effect> ──▶ surface::apply()
//! ```
//!
//! - [`CatalogBrowser`]: projects, with cyclic `advance`
//! - [`ArticleReader`]: journal articles, with escape and backdrop dismissal

mod browser;
mod reader;

pub use browser::{BrowserEvent, CatalogBrowser};
pub use reader::{ArticleReader, PointerTarget, ReaderEvent};

use crate::catalog::{Catalog, CatalogRecord};
use crate::surface::{ContainerId, Effect, SlotId, SurfaceId};
use crate::types::{Article, Project};

/// A record that knows how to fill the detail slots
pub trait DetailRecord: CatalogRecord {
    fn render(&self) -> Vec<Effect>;
}

impl DetailRecord for Project {
    fn render(&self) -> Vec<Effect> {
        vec![
            Effect::set_text(SlotId::ProjectTitle, &self.title),
            Effect::set_text(SlotId::ProjectCategory, &self.category),
            Effect::set_text(SlotId::ProjectHero, &self.emoji),
            Effect::set_text(SlotId::ProjectConcept, &self.concept),
            Effect::set_text(SlotId::ProjectReflection, &self.reflection),
        ]
    }
}

impl DetailRecord for Article {
    fn render(&self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::set_text(SlotId::ArticleIcon, &self.icon),
            Effect::set_text(SlotId::ArticleTitle, &self.title),
            Effect::set_text(SlotId::ArticleDate, &self.date),
            // Prior paragraphs never survive a new open
            Effect::Clear(ContainerId::ArticleBody),
        ];
        effects.extend(self.body.iter().map(|paragraph| Effect::AppendParagraph {
            container: ContainerId::ArticleBody,
            text: paragraph.clone(),
        }));
        effects.push(Effect::set_text(SlotId::ArticleClosing, &self.closing));
        effects
    }
}

/// Which of the two surfaces a viewer currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Listing,
    Detail,
}

/// The listing and detail surfaces of one viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfacePair {
    pub listing: SurfaceId,
    pub detail: SurfaceId,
}

impl SurfacePair {
    /// Hide one surface and show the other, in that order.
    ///
    /// This is the only place viewers toggle their surfaces.
    pub fn reveal(self, visibility: Visibility) -> [Effect; 2] {
        match visibility {
            Visibility::Listing => [Effect::Hide(self.detail), Effect::Show(self.listing)],
            Visibility::Detail => [Effect::Hide(self.listing), Effect::Show(self.detail)],
        }
    }
}

/// Keys the viewers react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Enter,
    Space,
    Escape,
    Other,
}

impl KeyInput {
    /// Enter and Space activate a focused card like a click does
    pub fn activates_card(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Effects of one input, plus whether the input's default action is suppressed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub effects: Vec<Effect>,
    pub prevent_default: bool,
}

impl Transition {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            prevent_default: false,
        }
    }

    pub fn prevented(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            prevent_default: true,
        }
    }
}

/// Shared open/close state machine over one catalog
#[derive(Debug, Clone)]
pub struct DetailViewer<R> {
    catalog: Catalog<R>,
    surfaces: SurfacePair,
    current: Option<usize>,
    visibility: Visibility,
}

impl<R: DetailRecord> DetailViewer<R> {
    pub fn new(catalog: Catalog<R>, surfaces: SurfacePair) -> Self {
        Self {
            catalog,
            surfaces,
            current: None,
            visibility: Visibility::Listing,
        }
    }

    pub fn catalog(&self) -> &Catalog<R> {
        &self.catalog
    }

    pub fn surfaces(&self) -> SurfacePair {
        self.surfaces
    }

    /// Id of the last opened record; kept after `close`
    pub fn current_id(&self) -> Option<&str> {
        self.current().map(CatalogRecord::id)
    }

    pub fn current(&self) -> Option<&R> {
        self.current.and_then(|position| self.catalog.at(position))
    }

    pub(crate) fn current_position(&self) -> Option<usize> {
        self.current
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_detail_visible(&self) -> bool {
        self.visibility == Visibility::Detail
    }

    /// Show the record `id`; an unknown id changes nothing.
    pub fn open(&mut self, id: &str) -> Vec<Effect> {
        match self.catalog.position(id) {
            Some(position) => self.open_at(position),
            None => {
                log::debug!("No record with id {id}");
                Vec::new()
            }
        }
    }

    pub(crate) fn open_at(&mut self, position: usize) -> Vec<Effect> {
        let Some(record) = self.catalog.at(position) else {
            return Vec::new();
        };
        let mut effects = record.render();
        self.current = Some(position);
        self.visibility = Visibility::Detail;
        effects.extend(self.surfaces.reveal(Visibility::Detail));
        effects.push(Effect::ScrollToTop { smooth: true });
        effects
    }

    /// Return to the listing. The selection is kept.
    pub fn close(&mut self) -> Vec<Effect> {
        self.visibility = Visibility::Listing;
        let mut effects = self.surfaces.reveal(Visibility::Listing).to_vec();
        effects.push(Effect::ScrollToTop { smooth: true });
        effects
    }
}
