//! Portfolio grid filtering

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::surface::{Effect, ElementId};
use crate::types::Project;

/// Value carried by a filter control
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterTag {
    /// Shows every card
    #[default]
    All,
    Category(String),
}

impl FilterTag {
    /// Parse the attribute form, where `all` is the distinguished value.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// Visibility predicate for a card of the given category
    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => tag == category,
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(tag) => f.write_str(tag),
        }
    }
}

/// A card on the listing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub id: String,
    pub category: String,
}

impl ListingCard {
    pub fn element(&self) -> ElementId {
        ElementId::PortfolioCard(self.id.clone())
    }
}

/// Filter controls for a project catalog: `All`, then each distinct tag in definition order.
pub fn controls_for(projects: &Catalog<Project>) -> Vec<FilterTag> {
    let mut controls = vec![FilterTag::All];
    for project in projects {
        // `all` is reserved for the show-everything control
        let tag = FilterTag::parse(&project.tag);
        if tag == FilterTag::All {
            log::warn!("Project {} uses the reserved tag \"all\", no control added", project.id);
            continue;
        }
        if !controls.contains(&tag) {
            controls.push(tag);
        }
    }
    controls
}

/// Tracks the single active filter and applies it to every card
#[derive(Debug, Clone)]
pub struct FilterController {
    controls: Vec<FilterTag>,
    cards: Vec<ListingCard>,
    active: FilterTag,
}

impl FilterController {
    pub fn new(controls: Vec<FilterTag>, cards: Vec<ListingCard>) -> Self {
        Self {
            controls,
            cards,
            active: FilterTag::All,
        }
    }

    pub fn for_catalog(projects: &Catalog<Project>) -> Self {
        let cards = projects
            .iter()
            .map(|project| ListingCard {
                id: project.id.clone(),
                category: project.tag.clone(),
            })
            .collect();
        Self::new(controls_for(projects), cards)
    }

    pub fn active(&self) -> &FilterTag {
        &self.active
    }

    pub fn controls(&self) -> &[FilterTag] {
        &self.controls
    }

    pub fn cards(&self) -> &[ListingCard] {
        &self.cards
    }

    /// Cards admitted by the active filter, in listing order
    pub fn visible_cards(&self) -> impl Iterator<Item = &ListingCard> {
        self.cards
            .iter()
            .filter(|card| self.active.admits(&card.category))
    }

    /// Activate `tag` and re-evaluate every card.
    ///
    /// A tag with no control is ignored, so exactly one control stays active.
    pub fn set_filter(&mut self, tag: FilterTag) -> Vec<Effect> {
        if !self.controls.contains(&tag) {
            log::debug!("Ignoring filter without a control: {tag}");
            return Vec::new();
        }
        self.active = tag;
        self.sync()
    }

    /// Effects that bring every control and card in line with the active tag
    pub fn sync(&self) -> Vec<Effect> {
        let controls = self.controls.iter().map(|control| Effect::SetActive {
            element: ElementId::FilterControl(control.clone()),
            active: *control == self.active,
        });
        let cards = self.cards.iter().map(|card| Effect::SetVisible {
            element: card.element(),
            visible: self.active.admits(&card.category),
        });
        controls.chain(cards).collect()
    }
}
