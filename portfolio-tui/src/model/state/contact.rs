//! 联系页状态

/// 联系表单中获得焦点的控件
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
    Submit,
}

impl ContactField {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message | Self::Submit => Self::Submit,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Name | Self::Email => Self::Name,
            Self::Message => Self::Email,
            Self::Submit => Self::Message,
        }
    }

    /// 是否是可输入的文本框
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Submit)
    }
}

/// 联系页状态
///
/// 字段内容保存在渲染表面的表单里，这里只记录焦点。
#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub focus: ContactField,
}
