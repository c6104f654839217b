//! Rendering surface abstraction
//!
//! The core never touches a screen. Every operation describes what should
//! change as a list of [`Effect`]s, and a [`RenderSurface`] implementation
//! performs them.
//!
//! Platform implementation:
//! - TUI: [`MemorySurface`], read back by the terminal view layer
//! - Tests: [`MemorySurface`] built with only the targets under test

mod effect;
mod memory;

pub use effect::{apply, Effect};
pub use memory::{ElementState, FormFields, FormState, MemorySurface, ScrollPosition};

use serde::{Deserialize, Serialize};

use crate::error::SurfaceResult;
use crate::filter::FilterTag;
use crate::section::SectionId;

/// Text slots filled by the detail views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotId {
    ProjectTitle,
    ProjectCategory,
    ProjectHero,
    ProjectConcept,
    ProjectReflection,
    ArticleIcon,
    ArticleTitle,
    ArticleDate,
    ArticleClosing,
}

impl SlotId {
    pub const ALL: [Self; 9] = [
        Self::ProjectTitle,
        Self::ProjectCategory,
        Self::ProjectHero,
        Self::ProjectConcept,
        Self::ProjectReflection,
        Self::ArticleIcon,
        Self::ArticleTitle,
        Self::ArticleDate,
        Self::ArticleClosing,
    ];
}

/// Containers holding a sequence of paragraphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerId {
    ArticleBody,
}

/// Mutually exclusive regions toggled by the viewers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceId {
    /// Everything except the project detail (listing for projects)
    MainContent,
    ProjectDetail,
    /// Journal card grid (listing for articles)
    JournalSection,
    /// Article overlay, including its backdrop
    ArticleDetail,
}

/// Individually addressable elements
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementId {
    /// Portfolio grid card, by project id
    PortfolioCard(String),
    /// Filter button, by the tag it applies
    FilterControl(FilterTag),
    AboutContent,
    ContactForm,
}

/// Transient message inside a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub u64);

/// Operations the core needs from a screen.
///
/// Every method checks that its target exists and returns
/// [`SurfaceError::MissingTarget`](crate::error::SurfaceError::MissingTarget)
/// instead of failing when it does not.
pub trait RenderSurface {
    /// Replace the text of a slot
    fn set_text(&mut self, slot: SlotId, value: &str) -> SurfaceResult;

    /// Discard every paragraph of a container
    fn clear(&mut self, container: ContainerId) -> SurfaceResult;

    /// Append one paragraph to the end of a container
    fn append_paragraph(&mut self, container: ContainerId, text: &str) -> SurfaceResult;

    fn show(&mut self, surface: SurfaceId) -> SurfaceResult;

    fn hide(&mut self, surface: SurfaceId) -> SurfaceResult;

    fn scroll_to_top(&mut self, smooth: bool) -> SurfaceResult;

    fn scroll_into_view(&mut self, section: SectionId, smooth: bool) -> SurfaceResult;

    fn set_visible(&mut self, element: &ElementId, visible: bool) -> SurfaceResult;

    /// Mark or unmark an element as the active one of its group
    fn set_active(&mut self, element: &ElementId, active: bool) -> SurfaceResult;

    fn add_class(&mut self, element: &ElementId, class: &'static str) -> SurfaceResult;

    /// Insert a transient message at the end of a form
    fn append_message(&mut self, form: &ElementId, id: MessageId, text: &str) -> SurfaceResult;

    fn remove_message(&mut self, id: MessageId) -> SurfaceResult;

    /// Clear every field of a form
    fn reset_form(&mut self, form: &ElementId) -> SurfaceResult;
}
