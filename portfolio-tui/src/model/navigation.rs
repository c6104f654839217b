//! 导航状态定义
//!
//! 导航栏的每一项都是一个页内锚点链接（`#about` 等），
//! 确认时交给 `SectionNav::follow` 解析。

use portfolio_core::section::SectionId;

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub section: SectionId,
    pub icon: &'static str,
}

impl NavItem {
    /// 链接目标
    pub fn href(&self) -> String {
        self.section.href()
    }
}

/// 导航状态
pub struct NavigationState {
    pub items: Vec<NavItem>,
    pub selected: usize,
}

impl NavigationState {
    /// 按页面顺序为每个章节建立导航项
    pub fn new(sections: &[SectionId]) -> Self {
        let items = sections
            .iter()
            .map(|&section| NavItem {
                section,
                icon: icon_for(section),
            })
            .collect();
        Self { items, selected: 0 }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    pub fn current_item(&self) -> Option<&NavItem> {
        self.items.get(self.selected)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(&SectionId::ALL)
    }
}

fn icon_for(section: SectionId) -> &'static str {
    match section {
        SectionId::Home => "⌂",
        SectionId::About => "◉",
        SectionId::Portfolio => "▦",
        SectionId::Journal => "✎",
        SectionId::Contact => "✉",
    }
}
