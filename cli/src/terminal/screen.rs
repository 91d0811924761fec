//! Full-screen terminal session for the interactive form.

use std::io::{self, Stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use tracing::debug;

/// Keyboard enhancement flags currently pushed; read by the panic hook.
static ENHANCED_KEYS: AtomicBool = AtomicBool::new(false);

/// Raw mode plus alternate screen. Restored on drop, and on panic.
pub struct Screen {
    out: Stdout,
    enhanced_keys: bool,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        terminal::enable_raw_mode()?;
        // Drop undoes raw mode from here on.
        let mut screen = Self {
            out: io::stdout(),
            enhanced_keys: false,
        };
        execute!(screen.out, EnterAlternateScreen, Hide)?;

        if matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
            execute!(
                screen.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
            screen.enhanced_keys = true;
            ENHANCED_KEYS.store(true, Ordering::SeqCst);
        }
        debug!("Entered full-screen mode (enhanced keys: {})", screen.enhanced_keys);

        Ok(screen)
    }

    /// Terminal width in columns, or `fallback` when it cannot be read.
    pub fn width(&self, fallback: usize) -> usize {
        terminal::size()
            .map(|(cols, _)| usize::from(cols))
            .unwrap_or(fallback)
    }

    pub fn draw<S: AsRef<str>>(&mut self, lines: &[S]) -> io::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        for line in lines {
            queue!(self.out, Print(line.as_ref()), Print("\r\n"))?;
        }
        self.out.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        restore(&mut self.out, self.enhanced_keys);
        ENHANCED_KEYS.store(false, Ordering::SeqCst);
    }
}

fn restore<W: Write>(out: &mut W, enhanced_keys: bool) {
    if enhanced_keys {
        let _ = execute!(out, PopKeyboardEnhancementFlags);
    }
    let _ = execute!(out, LeaveAlternateScreen, Show);
    let _ = terminal::disable_raw_mode();
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore(&mut io::stdout(), ENHANCED_KEYS.swap(false, Ordering::SeqCst));
        original_hook(info);
    }));
}
