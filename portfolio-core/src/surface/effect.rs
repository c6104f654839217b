//! Render effects and the adapter that performs them

use crate::error::SurfaceResult;
use crate::section::SectionId;

use super::{ContainerId, ElementId, MessageId, RenderSurface, SlotId, SurfaceId};

/// One change to perform on a [`RenderSurface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SetText { slot: SlotId, value: String },
    Clear(ContainerId),
    AppendParagraph { container: ContainerId, text: String },
    Show(SurfaceId),
    Hide(SurfaceId),
    ScrollToTop { smooth: bool },
    ScrollIntoView { section: SectionId, smooth: bool },
    SetVisible { element: ElementId, visible: bool },
    SetActive { element: ElementId, active: bool },
    AddClass { element: ElementId, class: &'static str },
    AppendMessage { form: ElementId, id: MessageId, text: String },
    RemoveMessage(MessageId),
    ResetForm(ElementId),
}

impl Effect {
    pub fn set_text(slot: SlotId, value: impl Into<String>) -> Self {
        Self::SetText {
            slot,
            value: value.into(),
        }
    }

    /// Perform this effect against a surface
    pub fn apply_to<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> SurfaceResult {
        match self {
            Self::SetText { slot, value } => surface.set_text(*slot, value),
            Self::Clear(container) => surface.clear(*container),
            Self::AppendParagraph { container, text } => surface.append_paragraph(*container, text),
            Self::Show(id) => surface.show(*id),
            Self::Hide(id) => surface.hide(*id),
            Self::ScrollToTop { smooth } => surface.scroll_to_top(*smooth),
            Self::ScrollIntoView { section, smooth } => surface.scroll_into_view(*section, *smooth),
            Self::SetVisible { element, visible } => surface.set_visible(element, *visible),
            Self::SetActive { element, active } => surface.set_active(element, *active),
            Self::AddClass { element, class } => surface.add_class(element, *class),
            Self::AppendMessage { form, id, text } => surface.append_message(form, *id, text),
            Self::RemoveMessage(id) => surface.remove_message(*id),
            Self::ResetForm(form) => surface.reset_form(form),
        }
    }
}

/// Perform effects in order, skipping any whose target is missing.
///
/// Returns how many effects were applied.
pub fn apply<S, I>(surface: &mut S, effects: I) -> usize
where
    S: RenderSurface + ?Sized,
    I: IntoIterator<Item = Effect>,
{
    let mut applied = 0;
    for effect in effects {
        match effect.apply_to(surface) {
            Ok(()) => applied += 1,
            Err(e) if e.is_expected() => log::debug!("Skipped {effect:?}: {e}"),
            Err(e) => log::warn!("Failed to apply {effect:?}: {e}"),
        }
    }
    applied
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_apply_skips_missing_targets() {
        let mut surface = MemorySurface::new()
            .with_slot(SlotId::ProjectTitle)
            .with_surface(SurfaceId::MainContent, true);

        let applied = apply(
            &mut surface,
            vec![
                Effect::set_text(SlotId::ProjectTitle, "Loft"),
                Effect::set_text(SlotId::ProjectConcept, "absent slot"),
                Effect::Hide(SurfaceId::ProjectDetail),
                Effect::Hide(SurfaceId::MainContent),
            ],
        );

        assert_eq!(applied, 2);
        assert_eq!(surface.text(SlotId::ProjectTitle), Some("Loft"));
        assert_eq!(surface.text(SlotId::ProjectConcept), None);
        assert!(!surface.is_shown(SurfaceId::MainContent));
    }

    #[test]
    fn test_apply_keeps_order() {
        let mut surface = MemorySurface::new().with_container(ContainerId::ArticleBody);
        apply(
            &mut surface,
            vec![
                Effect::AppendParagraph {
                    container: ContainerId::ArticleBody,
                    text: "stale".into(),
                },
                Effect::Clear(ContainerId::ArticleBody),
                Effect::AppendParagraph {
                    container: ContainerId::ArticleBody,
                    text: "fresh".into(),
                },
            ],
        );
        assert_eq!(surface.paragraphs(ContainerId::ArticleBody), ["fresh"]);
    }
}
