use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::AppConfig;
use crate::packing;
use crate::theme::Theme;
use crate::view::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

pub struct App {
    pub popup: Popup,
    pub config: AppConfig,
    pub theme: Theme,

    // Last rendering of the packing list
    pub tree: Node,

    // Shown in the footer line until the next key press
    pub status_message: Option<String>,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let theme = Theme::load(config.theme_file.as_deref());
        Self {
            popup: Popup::None,
            config,
            theme,
            tree: packing::packing_list(),
            status_message: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        self.status_message = None;

        if self.popup != Popup::None {
            self.handle_popup_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') | KeyCode::Char('h') => self.popup = Popup::Help,
            KeyCode::Char('r') => self.rerender(),
            _ => {}
        }
    }

    fn handle_popup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') | KeyCode::Char('q') => {
                self.popup = Popup::None;
            }
            _ => {}
        }
    }

    /// Render the list again from the literal data
    pub fn rerender(&mut self) {
        let tree = packing::packing_list();
        let unchanged = tree == self.tree;
        tracing::debug!(unchanged, "re-rendered packing list");

        self.tree = tree;
        self.status_message = Some(if unchanged {
            "Re-rendered, nothing changed".to_string()
        } else {
            "Re-rendered".to_string()
        });
    }
}
