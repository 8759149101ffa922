//! Terminal viewport implementation using ratatui.
//!
//! A demo host that renders the current slide as a full-screen panel with an
//! indicator row and a key-hint line. Keyboard input is translated into the
//! same `HostEvent`s a DOM host would deliver: arrows map to key navigation,
//! `n`/`p` stand in for the next/prev control clicks, and digits stand in for
//! indicator clicks. Hover and touch have no terminal analog and are never
//! emitted by this host.

use crate::error::Result;
use crate::input::{HostEvent, NavKey};
use crate::viewport::{RenderFrame, Viewport};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal host for the carousel demo.
///
/// Owns the slide deck content; the controller only ever addresses slides by
/// index through `RenderFrame`.
pub struct TerminalViewport {
    slides: Vec<String>,
    terminal: Option<CrosstermTerminal>,
}

impl TerminalViewport {
    pub fn new(slides: Vec<String>) -> Self {
        Self {
            slides,
            terminal: None,
        }
    }

    /// Convert a key press into the host event it stands for.
    fn key_to_event(&self, key: KeyCode, modifiers: KeyModifiers) -> Option<HostEvent> {
        match (key, modifiers) {
            (KeyCode::Right, _) => Some(HostEvent::Key(NavKey::ArrowRight)),
            (KeyCode::Left, _) => Some(HostEvent::Key(NavKey::ArrowLeft)),
            (KeyCode::Char('n'), KeyModifiers::NONE) => Some(HostEvent::NextClick),
            (KeyCode::Char('p'), KeyModifiers::NONE) => Some(HostEvent::PrevClick),
            (KeyCode::Char(ch), KeyModifiers::NONE) if ch.is_ascii_digit() && ch != '0' => {
                // Only indicators that exist are clickable, as in a real host.
                let index = (ch as usize) - ('1' as usize);
                (index < self.slides.len()).then_some(HostEvent::IndicatorClick(index))
            }
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Esc, _) => Some(HostEvent::Detach),
            _ => None,
        }
    }

    fn render_slide(frame: &mut Frame, area: Rect, slides: &[String], current: usize) {
        let content = slides.get(current).map(String::as_str).unwrap_or("");
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" slide {}/{} ", current + 1, slides.len()));
        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn render_indicators(frame: &mut Frame, area: Rect, slide_count: usize, active: usize) {
        let spans: Vec<Span> = (0..slide_count)
            .map(|index| {
                if index == active {
                    Span::styled("● ", Style::default().fg(Color::Yellow))
                } else {
                    Span::styled("○ ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        let indicators = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(indicators, area);
    }

    fn render_hints(frame: &mut Frame, area: Rect) {
        let hints = Paragraph::new("←/→ arrows · n/p next/prev · 1-9 jump · q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hints, area);
    }
}

impl Viewport for TerminalViewport {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        // One indicator per slide; a terminal host cannot lose elements the
        // way a mistyped DOM selector can.
        self.slides.len()
    }

    fn render(&mut self, render_frame: &RenderFrame) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let slides = &self.slides;
            let current = render_frame.active_indicator;

            terminal.draw(move |frame| {
                let size = frame.size();
                let chunks = Layout::vertical([
                    Constraint::Min(0),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .split(size);

                Self::render_slide(frame, chunks[0], slides, current);
                Self::render_indicators(frame, chunks[1], slides.len(), current);
                Self::render_hints(frame, chunks[2]);
            })?;
        }
        Ok(())
    }

    fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<HostEvent>> {
        let timeout_duration = timeout.unwrap_or(Duration::from_millis(100));

        if event::poll(timeout_duration)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    return Ok(None);
                }
                return Ok(self.key_to_event(key_event.code, key_event.modifiers));
            }
        }

        Ok(None)
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.terminal = None;
        }
        Ok(())
    }
}

impl Drop for TerminalViewport {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
