use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::panic::PanicHookInfo;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type CalcTerminal = Terminal<CrosstermBackend<Stdout>>;

type PanicHook = Arc<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Puts the terminal back the way we found it: on drop, or from the
/// panic hook if the UI panics first. Restoration happens once, and the
/// panic hook that was active before setup is reinstated on drop.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
    previous_hook: PanicHook,
}

impl TerminalGuard {
    fn install() -> Self {
        let restored = Arc::new(AtomicBool::new(false));
        let previous_hook: PanicHook = Arc::from(std::panic::take_hook());

        let hook_restored = Arc::clone(&restored);
        let chained = Arc::clone(&previous_hook);
        std::panic::set_hook(Box::new(move |info| {
            if !hook_restored.swap(true, Ordering::SeqCst) {
                restore_terminal();
            }
            chained(info);
        }));

        Self {
            restored,
            previous_hook,
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored.swap(true, Ordering::SeqCst) {
            restore_terminal();
        }
        // set_hook panics when called from a panicking thread.
        if !std::thread::panicking() {
            let previous = Arc::clone(&self.previous_hook);
            std::panic::set_hook(Box::new(move |info| previous(info)));
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(DisableMouseCapture);
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(CalcTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    // From here on any early return must still undo raw mode.
    let guard = TerminalGuard::install();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
