//! In-memory rendering surface
//!
//! Holds the page the way a document would: slot texts, paragraph containers,
//! region visibility, element states and the scroll position. Front-ends read
//! it back to draw; tests read it back to assert.

use std::collections::{BTreeSet, HashMap};

use crate::catalog::Catalogs;
use crate::error::{SurfaceError, SurfaceResult};
use crate::filter::{controls_for, FilterTag};
use crate::section::SectionId;

use super::{ContainerId, ElementId, MessageId, RenderSurface, SlotId, SurfaceId};

/// Presentation state of one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementState {
    pub visible: bool,
    pub active: bool,
    pub classes: BTreeSet<&'static str>,
}

impl Default for ElementState {
    fn default() -> Self {
        Self {
            visible: true,
            active: false,
            classes: BTreeSet::new(),
        }
    }
}

/// Contact form field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// A form and the transient messages inserted into it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub messages: Vec<(MessageId, String)>,
}

/// Where the viewport currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollPosition {
    pub section: SectionId,
    pub offset: u32,
    /// Whether the last programmatic scroll asked for animation
    pub smooth: bool,
}

/// [`RenderSurface`] backed by plain collections
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    slots: HashMap<SlotId, String>,
    containers: HashMap<ContainerId, Vec<String>>,
    surfaces: HashMap<SurfaceId, bool>,
    elements: HashMap<ElementId, ElementState>,
    forms: HashMap<ElementId, FormState>,
    sections: Vec<SectionId>,
    scroll: ScrollPosition,
}

impl MemorySurface {
    /// Empty surface: every operation reports a missing target until registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface with every target the portfolio page has, in its initial state.
    pub fn for_site(catalogs: &Catalogs) -> Self {
        let mut surface = Self::new()
            .with_container(ContainerId::ArticleBody)
            .with_surface(SurfaceId::MainContent, true)
            .with_surface(SurfaceId::ProjectDetail, false)
            .with_surface(SurfaceId::JournalSection, true)
            .with_surface(SurfaceId::ArticleDetail, false)
            .with_element(ElementId::AboutContent)
            .with_form(ElementId::ContactForm);

        for slot in SlotId::ALL {
            surface = surface.with_slot(slot);
        }
        for section in SectionId::ALL {
            surface = surface.with_section(section);
        }
        for project in &catalogs.projects {
            surface = surface.with_element(ElementId::PortfolioCard(project.id.clone()));
        }
        for control in controls_for(&catalogs.projects) {
            let active = control == FilterTag::All;
            surface.elements.insert(
                ElementId::FilterControl(control),
                ElementState {
                    active,
                    ..ElementState::default()
                },
            );
        }
        surface
    }

    #[must_use]
    pub fn with_slot(mut self, slot: SlotId) -> Self {
        self.slots.entry(slot).or_default();
        self
    }

    #[must_use]
    pub fn with_container(mut self, container: ContainerId) -> Self {
        self.containers.entry(container).or_default();
        self
    }

    #[must_use]
    pub fn with_surface(mut self, surface: SurfaceId, shown: bool) -> Self {
        self.surfaces.insert(surface, shown);
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: ElementId) -> Self {
        self.elements.entry(element).or_default();
        self
    }

    #[must_use]
    pub fn with_form(mut self, form: ElementId) -> Self {
        self.forms.entry(form).or_default();
        self
    }

    #[must_use]
    pub fn with_section(mut self, section: SectionId) -> Self {
        if !self.sections.contains(&section) {
            self.sections.push(section);
        }
        self
    }

    /// Drop a form and everything inside it
    pub fn remove_form(&mut self, form: &ElementId) -> Option<FormState> {
        self.forms.remove(form)
    }

    pub fn text(&self, slot: SlotId) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// Paragraphs of a container; empty when the container does not exist
    pub fn paragraphs(&self, container: ContainerId) -> &[String] {
        self.containers
            .get(&container)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_shown(&self, surface: SurfaceId) -> bool {
        self.surfaces.get(&surface).copied().unwrap_or(false)
    }

    pub fn element(&self, element: &ElementId) -> Option<&ElementState> {
        self.elements.get(element)
    }

    pub fn is_visible(&self, element: &ElementId) -> bool {
        self.elements.get(element).is_some_and(|state| state.visible)
    }

    pub fn is_active(&self, element: &ElementId) -> bool {
        self.elements.get(element).is_some_and(|state| state.active)
    }

    pub fn has_class(&self, element: &ElementId, class: &str) -> bool {
        self.elements
            .get(element)
            .is_some_and(|state| state.classes.contains(class))
    }

    pub fn form(&self, form: &ElementId) -> Option<&FormState> {
        self.forms.get(form)
    }

    /// Direct field access for user typing
    pub fn form_fields_mut(&mut self, form: &ElementId) -> Option<&mut FormFields> {
        self.forms.get_mut(form).map(|state| &mut state.fields)
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn scroll(&self) -> ScrollPosition {
        self.scroll
    }

    /// User-driven scrolling within the current section
    pub fn scroll_to(&mut self, offset: u32) {
        self.scroll.offset = offset;
        self.scroll.smooth = false;
    }

    fn element_mut(&mut self, element: &ElementId) -> Result<&mut ElementState, SurfaceError> {
        self.elements
            .get_mut(element)
            .ok_or_else(|| SurfaceError::missing(element))
    }

    fn set_shown(&mut self, surface: SurfaceId, shown: bool) -> SurfaceResult {
        let state = self
            .surfaces
            .get_mut(&surface)
            .ok_or_else(|| SurfaceError::missing(surface))?;
        *state = shown;
        Ok(())
    }
}

impl RenderSurface for MemorySurface {
    fn set_text(&mut self, slot: SlotId, value: &str) -> SurfaceResult {
        let text = self
            .slots
            .get_mut(&slot)
            .ok_or_else(|| SurfaceError::missing(slot))?;
        value.clone_into(text);
        Ok(())
    }

    fn clear(&mut self, container: ContainerId) -> SurfaceResult {
        self.containers
            .get_mut(&container)
            .ok_or_else(|| SurfaceError::missing(container))?
            .clear();
        Ok(())
    }

    fn append_paragraph(&mut self, container: ContainerId, text: &str) -> SurfaceResult {
        self.containers
            .get_mut(&container)
            .ok_or_else(|| SurfaceError::missing(container))?
            .push(text.to_string());
        Ok(())
    }

    fn show(&mut self, surface: SurfaceId) -> SurfaceResult {
        self.set_shown(surface, true)
    }

    fn hide(&mut self, surface: SurfaceId) -> SurfaceResult {
        self.set_shown(surface, false)
    }

    fn scroll_to_top(&mut self, smooth: bool) -> SurfaceResult {
        // Top of the current section; sections are separate pages here
        self.scroll.offset = 0;
        self.scroll.smooth = smooth;
        Ok(())
    }

    fn scroll_into_view(&mut self, section: SectionId, smooth: bool) -> SurfaceResult {
        if !self.sections.contains(&section) {
            return Err(SurfaceError::missing(section));
        }
        self.scroll = ScrollPosition {
            section,
            offset: 0,
            smooth,
        };
        Ok(())
    }

    fn set_visible(&mut self, element: &ElementId, visible: bool) -> SurfaceResult {
        self.element_mut(element)?.visible = visible;
        Ok(())
    }

    fn set_active(&mut self, element: &ElementId, active: bool) -> SurfaceResult {
        self.element_mut(element)?.active = active;
        Ok(())
    }

    fn add_class(&mut self, element: &ElementId, class: &'static str) -> SurfaceResult {
        self.element_mut(element)?.classes.insert(class);
        Ok(())
    }

    fn append_message(&mut self, form: &ElementId, id: MessageId, text: &str) -> SurfaceResult {
        self.forms
            .get_mut(form)
            .ok_or_else(|| SurfaceError::missing(form))?
            .messages
            .push((id, text.to_string()));
        Ok(())
    }

    fn remove_message(&mut self, id: MessageId) -> SurfaceResult {
        for state in self.forms.values_mut() {
            if let Some(position) = state.messages.iter().position(|(m, _)| *m == id) {
                state.messages.remove(position);
                return Ok(());
            }
        }
        Err(SurfaceError::missing(id))
    }

    fn reset_form(&mut self, form: &ElementId) -> SurfaceResult {
        self.forms
            .get_mut(form)
            .ok_or_else(|| SurfaceError::missing(form))?
            .fields = FormFields::default();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::test_utils::sample_catalogs;

    #[test]
    fn test_empty_surface_reports_missing_targets() {
        let mut surface = MemorySurface::new();
        assert!(surface.set_text(SlotId::ProjectTitle, "x").is_err());
        assert!(surface.show(SurfaceId::ProjectDetail).is_err());
        assert!(surface.clear(ContainerId::ArticleBody).is_err());
        assert!(surface
            .scroll_into_view(SectionId::Journal, true)
            .unwrap_err()
            .is_expected());
        assert!(surface.remove_message(MessageId(1)).is_err());
    }

    #[test]
    fn test_for_site_initial_state() {
        let catalogs = sample_catalogs();
        let surface = MemorySurface::for_site(&catalogs);

        assert!(surface.is_shown(SurfaceId::MainContent));
        assert!(!surface.is_shown(SurfaceId::ProjectDetail));
        assert!(surface.is_shown(SurfaceId::JournalSection));
        assert!(!surface.is_shown(SurfaceId::ArticleDetail));
        assert!(surface.is_active(&ElementId::FilterControl(FilterTag::All)));
        assert!(!surface.is_active(&ElementId::FilterControl(FilterTag::parse("commercial"))));
        assert!(surface.is_visible(&ElementId::PortfolioCard("p2".into())));
        assert_eq!(surface.sections(), SectionId::ALL);
        assert!(surface.form(&ElementId::ContactForm).unwrap().fields.is_empty());
    }

    #[test]
    fn test_remove_message_after_form_removed() {
        let mut surface = MemorySurface::new().with_form(ElementId::ContactForm);
        surface
            .append_message(&ElementId::ContactForm, MessageId(7), "thanks")
            .unwrap();
        surface.remove_form(&ElementId::ContactForm);

        assert!(surface.remove_message(MessageId(7)).unwrap_err().is_expected());
    }

    #[test]
    fn test_scroll_to_top_keeps_section() {
        let mut surface = MemorySurface::for_site(&sample_catalogs());
        surface.scroll_into_view(SectionId::Portfolio, true).unwrap();
        surface.scroll_to(12);

        surface.scroll_to_top(true).unwrap();

        let scroll = surface.scroll();
        assert_eq!(scroll.section, SectionId::Portfolio);
        assert_eq!(scroll.offset, 0);
        assert!(scroll.smooth);
    }
}
