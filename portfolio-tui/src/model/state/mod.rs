//! 页面数据状态
//!
//! 作品、文章的显示状态全部在 portfolio-core 的状态机和渲染表面里，
//! 这里只保留纯界面层面的东西：列表光标、表单焦点、弹窗。

mod contact;
mod modal;
mod selection;

pub use contact::{ContactField, ContactState};
pub use modal::{Modal, ModalState};
pub use selection::Selection;
