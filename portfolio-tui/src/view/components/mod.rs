//! 界面组件

pub mod article;
pub mod modal;
pub mod navigation;
pub mod statusbar;
