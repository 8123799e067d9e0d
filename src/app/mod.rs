//! Application shell: two CRUD screens, the tick loop and the chrome.
//!
//! Exactly one screen is visible at a time; F1/F2 switch between them.
//! The loop polls input with a short timeout so backend responses are
//! drained between key presses, and redraws through the diff renderer
//! only when something changed.

mod screen;
mod terminal;

pub use screen::CrudScreen;
pub use terminal::TerminalSession;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::api::Backend;
use crate::controller::Controller;
use crate::layout::{self, ScreenLayout};
use crate::model::{Entity, Escuela, Estudiante};
use crate::renderer::{DiffRenderer, FrameBuffer};
use crate::state::{poll_event, InputEvent, KeyState, KeyboardEvent};
use crate::theme::Theme;
use crate::types::Attr;

/// How long one tick waits for input before draining backend responses.
const TICK: Duration = Duration::from_millis(50);

/// Which screen is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveTab {
    Escuelas,
    Estudiantes,
}

/// The application.
pub struct App {
    escuelas: CrudScreen<Escuela>,
    estudiantes: CrudScreen<Estudiante>,
    active: ActiveTab,
    theme: Theme,
    buffer: FrameBuffer,
    renderer: DiffRenderer,
    layout: ScreenLayout,
}

impl App {
    /// Build the app. Both screens fetch their list on construction.
    pub fn new(
        escuelas: Arc<dyn Backend<Escuela>>,
        estudiantes: Arc<dyn Backend<Estudiante>>,
        theme: Theme,
    ) -> Self {
        Self {
            escuelas: CrudScreen::new(Controller::new(escuelas)),
            estudiantes: CrudScreen::new(Controller::new(estudiantes)),
            active: ActiveTab::Escuelas,
            theme,
            buffer: FrameBuffer::new(0, 0),
            renderer: DiffRenderer::new(),
            layout: layout::compute(0, 0),
        }
    }

    /// Run the tick loop until the user quits with Ctrl+C or Ctrl+Q.
    pub fn run(&mut self) -> io::Result<()> {
        let _session = TerminalSession::enter()?;
        let (width, height) = TerminalSession::size()?;
        self.resize(width, height);
        self.draw()?;

        loop {
            let mut dirty = false;

            if let Some(event) = poll_event(TICK)? {
                match event {
                    InputEvent::Key(key) if key.state != KeyState::Release => {
                        if is_quit(&key) {
                            break;
                        }
                        dirty |= self.handle_key(&key);
                    }
                    InputEvent::Click { x, y } => {
                        dirty |= self.active_screen_click(x, y);
                    }
                    InputEvent::Resize(width, height) => {
                        self.resize(width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            // Both controllers keep draining, visible or not
            dirty |= self.escuelas.tick();
            dirty |= self.estudiantes.tick();

            if dirty {
                self.draw()?;
            }
        }
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.buffer.resize(width, height);
        self.renderer.invalidate();
        self.layout = layout::compute(width, height);
    }

    fn handle_key(&mut self, key: &KeyboardEvent) -> bool {
        match key.key.as_str() {
            "F1" => {
                self.active = ActiveTab::Escuelas;
                true
            }
            "F2" => {
                self.active = ActiveTab::Estudiantes;
                true
            }
            _ => match self.active {
                ActiveTab::Escuelas => self.escuelas.handle_key(key),
                ActiveTab::Estudiantes => self.estudiantes.handle_key(key),
            },
        }
    }

    fn active_screen_click(&mut self, x: u16, y: u16) -> bool {
        match self.active {
            ActiveTab::Escuelas => self.escuelas.click(x, y, &self.layout),
            ActiveTab::Estudiantes => self.estudiantes.click(x, y, &self.layout),
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        self.buffer.clear_with_bg(self.theme.background.resolve());
        self.draw_header();
        match self.active {
            ActiveTab::Escuelas => {
                self.escuelas
                    .render(&mut self.buffer, &self.layout, &self.theme)
            }
            ActiveTab::Estudiantes => {
                self.estudiantes
                    .render(&mut self.buffer, &self.layout, &self.theme)
            }
        }
        self.draw_status();
        self.renderer.render(&self.buffer)?;
        Ok(())
    }

    fn draw_header(&mut self) {
        let rect = self.layout.header;
        let bg = self.theme.background.resolve();
        let clip = Some(&rect);

        self.buffer.draw_text(
            rect.x + 1,
            rect.y,
            "Registro Académico",
            self.theme.primary.resolve(),
            bg,
            Attr::BOLD,
            clip,
        );

        let tabs = [
            (ActiveTab::Escuelas, format!(" F1 {} ", Escuela::TITLE_PLURAL)),
            (
                ActiveTab::Estudiantes,
                format!(" F2 {} ", Estudiante::TITLE_PLURAL),
            ),
        ];
        let mut x = rect.x + 22;
        for (tab, label) in &tabs {
            let (fg, attrs) = if *tab == self.active {
                (self.theme.accent.resolve(), Attr::BOLD | Attr::INVERSE)
            } else {
                (self.theme.text_muted.resolve(), Attr::NONE)
            };
            self.buffer.draw_text(x, rect.y, label, fg, bg, attrs, clip);
            x += label.chars().count() as u16 + 1;
        }
    }

    fn draw_status(&mut self) {
        let rect = self.layout.status;
        self.buffer.draw_text(
            rect.x + 1,
            rect.y,
            "Tab campo · Enter enviar · e editar · d eliminar · Ctrl+Q salir",
            self.theme.text_muted.resolve(),
            self.theme.background.resolve(),
            Attr::NONE,
            Some(&rect),
        );
    }
}

fn is_quit(key: &KeyboardEvent) -> bool {
    key.modifiers.ctrl && (key.key == "c" || key.key == "q")
}

// =============================================================================
// Tests
// =============================================================================
