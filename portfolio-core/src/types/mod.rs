//! 类型定义模块

mod article;
mod project;
mod site;

pub use article::Article;
pub use project::Project;
pub use site::{parse_hex_color, Palette, SiteConfig};
