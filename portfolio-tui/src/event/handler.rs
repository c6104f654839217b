//! 事件处理器

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use portfolio_core::section::SectionId;
use portfolio_core::KeyInput;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, ContactField};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 只关心左键按下
fn handle_mouse_event(mouse: MouseEvent) -> AppMessage {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => AppMessage::Pointer {
            column: mouse.column,
            row: mouse.row,
        },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 文章浮层覆盖整个页面，打开时独占键盘
    if app.is_article_open() {
        return handle_article_keys(key);
    }

    // 联系表单在输入时，字符键不能被当成快捷键
    if app.focus.is_content()
        && !app.is_project_detail_open()
        && app.current_section() == SectionId::Contact
    {
        return handle_contact_keys(key, app);
    }

    if DefaultKeymap::HELP.matches(&key) || (key.modifiers.is_empty() && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => NavigationMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => NavigationMessage::SelectNext,
        KeyCode::Enter => NavigationMessage::Confirm,
        KeyCode::Home => NavigationMessage::SelectFirst,
        KeyCode::End => NavigationMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::Navigation(msg)
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if app.is_project_detail_open() {
        return handle_project_detail_keys(key);
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Enter => ContentMessage::Activate(KeyInput::Enter),
        KeyCode::Char(' ') => ContentMessage::Activate(KeyInput::Space),
        KeyCode::Left | KeyCode::Char('h') if app.current_section() == SectionId::Portfolio => {
            ContentMessage::PrevFilter
        }
        KeyCode::Right | KeyCode::Char('l') if app.current_section() == SectionId::Portfolio => {
            ContentMessage::NextFilter
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 作品详情页：下一个 / 返回
fn handle_project_detail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEXT_PROJECT.matches(&key) || key.code == KeyCode::Right {
        return AppMessage::Content(ContentMessage::NextProject);
    }
    match key.code {
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
            AppMessage::Content(ContentMessage::CloseProject)
        }
        _ => AppMessage::Noop,
    }
}

/// 文章浮层：关闭按钮与其余按键
fn handle_article_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLOSE_ARTICLE.matches(&key) {
        return AppMessage::Content(ContentMessage::CloseArticle);
    }
    let input = match key.code {
        KeyCode::Esc => KeyInput::Escape,
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Char(' ') => KeyInput::Space,
        _ => KeyInput::Other,
    };
    AppMessage::Content(ContentMessage::ArticleKey(input))
}

/// 联系表单：输入优先于全局快捷键
fn handle_contact_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Submit(Instant::now()));
    }

    let focus = app.contact_form.focus;
    let msg = match key.code {
        KeyCode::Esc => return AppMessage::GoBack,
        KeyCode::Tab if key.modifiers.is_empty() => return AppMessage::ToggleFocus,
        KeyCode::Up | KeyCode::BackTab => ContentMessage::PrevField,
        KeyCode::Down => ContentMessage::NextField,
        KeyCode::Enter if focus == ContactField::Submit => {
            ContentMessage::Submit(Instant::now())
        }
        KeyCode::Enter if focus == ContactField::Message => ContentMessage::Input('\n'),
        KeyCode::Enter => ContentMessage::NextField,
        KeyCode::Backspace => ContentMessage::Backspace,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            ContentMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 弹窗打开时：Esc、Enter 或 ? 关闭
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => {
            AppMessage::Modal(ModalMessage::Close)
        }
        KeyCode::Char('c') if key.modifiers == KeyModifiers::CONTROL => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}
