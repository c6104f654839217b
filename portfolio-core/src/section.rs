//! Page sections and anchor navigation

use serde::{Deserialize, Serialize};

use crate::surface::Effect;

/// Top-level page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Portfolio,
    Journal,
    Contact,
}

impl SectionId {
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Portfolio,
        Self::Journal,
        Self::Contact,
    ];

    /// Anchor fragment without the leading `#`
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Portfolio => "portfolio",
            Self::Journal => "journal",
            Self::Contact => "contact",
        }
    }

    /// The `href` a navigation link uses for this section
    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Resolves navigation link targets against the sections a page actually has
#[derive(Debug, Clone)]
pub struct SectionNav {
    sections: Vec<SectionId>,
}

impl SectionNav {
    pub fn new(sections: Vec<SectionId>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// Resolve an `href` such as `#journal`.
    ///
    /// Only in-page anchors naming an existing section resolve.
    pub fn resolve(&self, href: &str) -> Option<SectionId> {
        let anchor = href.strip_prefix('#')?;
        self.sections
            .iter()
            .copied()
            .find(|section| section.anchor() == anchor)
    }

    /// Effects for activating a link; an unknown target is a no-op.
    pub fn follow(&self, href: &str) -> Vec<Effect> {
        match self.resolve(href) {
            Some(section) => vec![Effect::ScrollIntoView {
                section,
                smooth: true,
            }],
            None => {
                log::debug!("Navigation target {href} not found");
                Vec::new()
            }
        }
    }
}

impl Default for SectionNav {
    fn default() -> Self {
        Self::new(SectionId::ALL.to_vec())
    }
}
