//! Journal article overlay

use crate::catalog::Catalog;
use crate::surface::{Effect, SurfaceId};
use crate::types::Article;

use super::{DetailViewer, KeyInput, SurfacePair, Transition, Visibility};

/// Where a pointer press landed while the overlay is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The overlay itself, outside its content
    Backdrop,
    /// Anything inside the article content
    Content,
}

/// Inputs of the article overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderEvent {
    /// Pointer activation of a journal card
    CardClick(String),
    /// Key pressed while a journal card has focus
    CardKey { id: String, key: KeyInput },
    /// The explicit close control
    CloseButton,
    /// Key pressed anywhere on the page
    Key(KeyInput),
    /// Pointer press on the overlay
    Pointer(PointerTarget),
}

/// Journal reader: open an article, dismiss it three ways
#[derive(Debug, Clone)]
pub struct ArticleReader {
    viewer: DetailViewer<Article>,
}

impl ArticleReader {
    pub const SURFACES: SurfacePair = SurfacePair {
        listing: SurfaceId::JournalSection,
        detail: SurfaceId::ArticleDetail,
    };

    pub fn new(catalog: Catalog<Article>) -> Self {
        Self {
            viewer: DetailViewer::new(catalog, Self::SURFACES),
        }
    }

    pub fn handle(&mut self, event: ReaderEvent) -> Transition {
        match event {
            ReaderEvent::CardClick(id) => Transition::prevented(self.open(&id)),
            ReaderEvent::CardKey { id, key } if key.activates_card() => {
                Transition::prevented(self.open(&id))
            }
            ReaderEvent::CardKey { .. } => Transition::none(),
            ReaderEvent::CloseButton => Transition::prevented(self.close()),
            ReaderEvent::Key(KeyInput::Escape) if self.is_detail_visible() => {
                Transition::effects(self.close())
            }
            ReaderEvent::Key(_) => Transition::none(),
            ReaderEvent::Pointer(PointerTarget::Backdrop) if self.is_detail_visible() => {
                Transition::effects(self.close())
            }
            ReaderEvent::Pointer(_) => Transition::none(),
        }
    }

    pub fn open(&mut self, id: &str) -> Vec<Effect> {
        self.viewer.open(id)
    }

    pub fn close(&mut self) -> Vec<Effect> {
        self.viewer.close()
    }

    pub fn catalog(&self) -> &Catalog<Article> {
        self.viewer.catalog()
    }

    pub fn current(&self) -> Option<&Article> {
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
