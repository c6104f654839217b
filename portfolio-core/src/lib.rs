//! Portfolio Core Library
//!
//! Provides the interaction logic of the portfolio site, independent of any screen:
//! - Project detail view with cyclic "next" (`viewer::CatalogBrowser`)
//! - Journal article overlay (`viewer::ArticleReader`)
//! - Portfolio grid filtering (`filter::FilterController`)
//! - Contact acknowledgment, fade-in and section navigation
//!
//! Every operation returns [`surface::Effect`]s instead of drawing, so the same
//! state machines drive the terminal front-end and the tests.

pub mod catalog;
pub mod contact;
pub mod content;
pub mod error;
pub mod fade_in;
pub mod filter;
pub mod section;
pub mod surface;
pub mod types;
pub mod viewer;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use catalog::{Catalog, CatalogRecord, Catalogs};
pub use error::{CoreError, CoreResult, SurfaceError};
pub use surface::{apply, Effect, MemorySurface, RenderSurface};
pub use viewer::{ArticleReader, CatalogBrowser, KeyInput, Transition, Visibility};
