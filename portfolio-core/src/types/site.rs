//! Site-wide copy and palette

use serde::{Deserialize, Serialize};

/// Copy shown outside the catalogs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub hero_tagline: String,
    pub about_bio: String,
    pub contact_cta: String,
    pub contact_email: String,
    pub palette: Palette,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_tagline: "Designing spaces that breathe harmony and meaning.".to_string(),
            about_bio: "Sharvari Joshi is an Interior Designer and Stylist based in India, with a \
                        practice rooted in mindful design and contextual storytelling. Her work \
                        explores the intersection of materiality, human experience, and cultural \
                        context, creating spaces that feel both timeless and deeply personal."
                .to_string(),
            contact_cta: "Let's design something meaningful.".to_string(),
            contact_email: "noctiscreates@gmail.com".to_string(),
            palette: Palette::default(),
        }
    }
}

/// Color palette as `#RRGGBB` strings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub surface: String,
    pub text: String,
    pub primary_action: String,
    pub secondary_action: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#F7F5F2".to_string(),
            surface: "#EAE3DA".to_string(),
            text: "#2B2B2B".to_string(),
            primary_action: "#B28A5A".to_string(),
            secondary_action: "#9A7449".to_string(),
        }
    }
}

/// Parse a `#RRGGBB` color into its components.
///
/// Returns `None` for anything else, including the short `#RGB` form.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
