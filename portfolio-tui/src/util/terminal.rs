//! 终端初始化和清理

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端
///
/// 启用鼠标捕获，文章浮层需要区分背景点击与内容点击。
pub fn init_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// 在已初始化的终端上运行 `session`，之后无论成败都执行 `restore`
///
/// 会话的错误优先于恢复时的错误返回。
pub fn with_restore<T>(
    terminal: &mut T,
    session: impl FnOnce(&mut T) -> Result<()>,
    restore: impl FnOnce(&mut T) -> Result<()>,
) -> Result<()> {
    let result = session(terminal);
    let restored = restore(terminal);
    if let Err(ref e) = restored {
        log::error!("Failed to restore terminal: {e:#}");
    }
    result.and(restored)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[derive(Default)]
    struct FakeTerminal {
        raw: bool,
    }

    fn restore(terminal: &mut FakeTerminal) -> Result<()> {
        terminal.raw = false;
        Ok(())
    }

    #[test]
    fn test_restores_after_failed_session() {
        let mut terminal = FakeTerminal { raw: true };

        let result = with_restore(
            &mut terminal,
            |_| Err(anyhow!("Failed to read terminal size")),
            restore,
        );

        assert_eq!(result.unwrap_err().to_string(), "Failed to read terminal size");
        assert!(!terminal.raw);
    }

    #[test]
    fn test_restore_error_reported_after_clean_session() {
        let mut terminal = FakeTerminal { raw: true };

        let result = with_restore(&mut terminal, |_| Ok(()), |_| Err(anyhow!("restore failed")));

        assert!(result.is_err());
        assert!(terminal.raw);
    }

    #[test]
    fn test_session_error_wins_over_restore_error() {
        let mut terminal = FakeTerminal::default();

        let result = with_restore(
            &mut terminal,
            |_| Err(anyhow!("session failed")),
            |_| Err(anyhow!("restore failed")),
        );

        assert_eq!(result.unwrap_err().to_string(), "session failed");
    }
}
