//! 导航更新逻辑

use portfolio_core::viewer::BrowserEvent;

use crate::message::NavigationMessage;
use crate::model::App;

use super::{apply_effects, refresh_fade_in};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),

        NavigationMessage::Confirm => {
            let Some(href) = app.navigation.current_item().map(|item| item.href()) else {
                return;
            };
            // 作品详情盖住所有章节，先回到列表
            if app.is_project_detail_open() {
                let effects = app.projects.handle(BrowserEvent::Close);
                apply_effects(app, effects);
            }
            let effects = app.sections.follow(&href);
            apply_effects(app, effects);
            app.clear_status();
            refresh_fade_in(app);
        }
    }
}
