//! Built-in site content
//!
//! Used whenever no content file is configured.

use crate::catalog::{Catalog, Catalogs};
use crate::error::CoreResult;
use crate::types::{Article, Project};

fn project(
    id: &str,
    title: &str,
    (category, tag): (&str, &str),
    emoji: &str,
    concept: &str,
    reflection: &str,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        category: category.to_string(),
        tag: tag.to_string(),
        emoji: emoji.to_string(),
        concept: concept.to_string(),
        reflection: reflection.to_string(),
    }
}

fn article(
    id: &str,
    (icon, title, date): (&str, &str, &str),
    excerpt: &str,
    body: &[&str],
    closing: &str,
) -> Article {
    Article {
        id: id.to_string(),
        icon: icon.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        excerpt: excerpt.to_string(),
        body: body.iter().map(|p| (*p).to_string()).collect(),
        closing: closing.to_string(),
    }
}

const RESIDENTIAL: (&str, &str) = ("Residential Interior", "residential");
const COMMERCIAL: (&str, &str) = ("Commercial Space", "commercial");
const STYLING: (&str, &str) = ("Styling", "styling");

pub fn default_projects() -> CoreResult<Catalog<Project>> {
    Catalog::new(vec![
        project(
            "courtyard-home",
            "The Courtyard Home",
            RESIDENTIAL,
            "🏡",
            "A family home organised around an open courtyard, where every room borrows light \
             and air from the centre. Lime plaster, kota stone and reclaimed teak keep the \
             palette close to the ground.",
            "The courtyard became the family's calendar: morning tea in the east corner, \
             homework in the afternoon shade, dinners under the sky.",
        ),
        project(
            "monsoon-cafe",
            "Monsoon Café",
            COMMERCIAL,
            "☕",
            "A neighbourhood café designed for long, rain-soaked afternoons: deep window seats, \
             terracotta jaali screens and a bar counter clad in hand-made tiles.",
            "Regulars now ask for 'their' window. A room that invites people to stay is worth \
             more than one that photographs well.",
        ),
        project(
            "studio-apartment",
            "Quiet Studio",
            RESIDENTIAL,
            "🛋",
            "Thirty-two square metres made to feel generous through a single continuous \
             storage wall, a fold-down desk and a muted, warm palette.",
            "Small spaces reward restraint. Every object had to earn its place, and the ones \
             that stayed are the ones the owner loves.",
        ),
        project(
            "boutique-store",
            "Handloom Boutique",
            COMMERCIAL,
            "🧵",
            "A retail space for a weaving collective, with modular display frames that let the \
             textiles, not the furniture, carry the room.",
            "The weavers now rearrange the store themselves every season, which was the point.",
        ),
        project(
            "festive-table",
            "A Festive Table",
            STYLING,
            "🕯",
            "Styling for a Diwali gathering: brass, marigold and layered handblock linens, \
             arranged so the table could move from dinner to dessert without a reset.",
            "Styling is hospitality made visible; the best compliment was that nobody noticed \
             the effort.",
        ),
    ])
}

pub fn default_articles() -> CoreResult<Catalog<Article>> {
    Catalog::new(vec![
        article(
            "designing-with-light",
            ("☀", "Designing with Light", "March 2024"),
            "How daylight shapes the way a room is lived in.",
            &[
                "Before choosing a single finish, I spend a day in the space watching the \
                 light move. It tells me where people will want to sit, read and gather.",
                "North light is steady and forgiving; west light is warm but restless. A \
                 plan that respects both feels calm without anyone knowing why.",
                "Artificial light then fills the gaps rather than fighting the sun: layered, \
                 low and dimmable.",
            ],
            "Design the shadows as carefully as the light.",
        ),
        article(
            "material-stories",
            ("🪵", "Material Stories", "January 2024"),
            "Why I reach for materials with a past.",
            &[
                "Reclaimed teak, hand-pressed tiles and lime plaster all carry the marks of \
                 the hands that made them.",
                "Those marks soften a space. They give people permission to live in it \
                 instead of preserving it.",
            ],
            "A room should age like a good friendship.",
        ),
        article(
            "small-spaces",
            ("📐", "Living Large in Small Spaces", "November 2023"),
            "Notes from a year of compact homes.",
            &[
                "The instinct in a small flat is to fill every corner with clever storage. \
                 The better move is usually to take things away.",
                "One generous gesture, a long window seat or a full-height shelf, does more \
                 than ten small ones.",
                "Colour helps too: a single warm tone carried across walls and ceiling makes \
                 edges disappear.",
            ],
            "Restraint is a form of generosity.",
        ),
    ])
}

/// Every built-in catalog
pub fn default_catalogs() -> CoreResult<Catalogs> {
    Ok(Catalogs {
        projects: default_projects()?,
        articles: default_articles()?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::filter::{controls_for, FilterTag};

    #[test]
    fn test_default_catalogs_build() {
        let catalogs = default_catalogs().unwrap();
        assert_eq!(catalogs.projects.len(), 5);
        assert_eq!(catalogs.articles.len(), 3);
        assert!(catalogs.articles.iter().all(|a| !a.body.is_empty()));
    }

    #[test]
    fn test_default_filter_controls() {
        let projects = default_projects().unwrap();
        assert_eq!(
            controls_for(&projects),
            vec![
                FilterTag::All,
                FilterTag::parse("residential"),
                FilterTag::parse("commercial"),
                FilterTag::parse("styling"),
            ]
        );
    }
}
