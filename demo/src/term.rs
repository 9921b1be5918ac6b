//! Crossterm terminal session.
//!
//! [`Terminal`] switches the terminal to raw mode on the alternate screen
//! and restores it when dropped.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::render::{Role, Tile};

pub fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Empty => Color::Reset,
        Tile::Obstacle => Color::Rgb {
            r: 110,
            g: 110,
            b: 140,
        },
        Tile::Food => Color::Rgb { r: 230, g: 60, b: 60 },
        Tile::Head => Color::Rgb {
            r: 255,
            g: 220,
            b: 80,
        },
        Tile::Body => Color::Rgb {
            r: 80,
            g: 200,
            b: 80,
        },
        Tile::Trail => Color::Rgb {
            r: 50,
            g: 180,
            b: 255,
        },
    }
}

pub fn role_color(role: Role) -> Color {
    match role {
        Role::Idle => Color::Rgb {
            r: 140,
            g: 140,
            b: 160,
        },
        Role::Sorted => Color::Rgb {
            r: 80,
            g: 200,
            b: 80,
        },
        Role::Comparing => Color::Rgb {
            r: 255,
            g: 220,
            b: 80,
        },
        Role::Swapped => Color::Rgb {
            r: 230,
            g: 60,
            b: 60,
        },
        Role::Pivot => Color::Rgb {
            r: 200,
            g: 90,
            b: 230,
        },
        Role::Current => Color::Rgb {
            r: 50,
            g: 180,
            b: 255,
        },
        Role::Found => Color::Rgb {
            r: 255,
            g: 255,
            b: 255,
        },
    }
}

/// A raw-mode terminal on the alternate screen.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    /// Columns and rows.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Redraw the screen: coloured `rows` followed by plain `footer` lines.
    pub fn draw(&mut self, rows: &[Vec<(char, Color)>], footer: &[String]) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        let mut y = 0u16;
        for row in rows {
            queue!(
                self.out,
                cursor::MoveTo(0, y),
                terminal::Clear(ClearType::CurrentLine)
            )?;
            let mut run = String::new();
            let mut run_color = None;
            for &(ch, color) in row {
                if run_color != Some(color) {
                    self.flush_run(&mut run, run_color)?;
                    run_color = Some(color);
                }
                run.push(ch);
            }
            self.flush_run(&mut run, run_color)?;
            y += 1;
        }
        queue!(self.out, ResetColor)?;
        for line in footer {
            queue!(
                self.out,
                cursor::MoveTo(0, y),
                terminal::Clear(ClearType::CurrentLine),
                Print(line)
            )?;
            y += 1;
        }
        queue!(self.out, terminal::Clear(ClearType::FromCursorDown))?;
        self.out.flush()
    }

    fn flush_run(&mut self, run: &mut String, color: Option<Color>) -> io::Result<()> {
        if run.is_empty() {
            return Ok(());
        }
        if let Some(color) = color {
            queue!(self.out, SetForegroundColor(color))?;
        }
        queue!(self.out, Print(run.as_str()))?;
        run.clear();
        Ok(())
    }

    /// Wait up to `timeout` for a key press.
    pub fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyCode>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => Ok(Some(code)),
            _ => Ok(None),
        }
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
