//! Pause/options menu navigation
//!
//! Layout and drawing belong to the host. This module only tracks whether the
//! menu is open, which row is selected, and turns navigation into commands.

use crate::settings::Settings;

/// Menu rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItem {
    #[default]
    Resume,
    Twinkle,
    ShootingStars,
    Restart,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Resume,
        MenuItem::Twinkle,
        MenuItem::ShootingStars,
        MenuItem::Restart,
        MenuItem::Quit,
    ];

    fn position(&self) -> usize {
        Self::ALL.iter().position(|i| i == self).unwrap_or(0)
    }

    /// Row label, with the current value for option rows
    pub fn label(&self, settings: &Settings) -> String {
        match self {
            MenuItem::Resume => "Resume".to_string(),
            MenuItem::Twinkle => format!("Twinkle: {}", settings.twinkle.as_str()),
            MenuItem::ShootingStars => format!(
                "Shooting stars: {}",
                if settings.shooting_stars { "On" } else { "Off" }
            ),
            MenuItem::Restart => "Restart".to_string(),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

/// What the simulation should do after a menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    None,
    Resume,
    Restart,
    Quit,
    /// An option changed; the host may want to persist settings
    SettingsChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Menu {
    open: bool,
    selected: MenuItem,
}

impl Menu {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn selected(&self) -> MenuItem {
        self.selected
    }

    /// Open (selection back on Resume) or close
    pub fn toggle(&mut self) -> MenuCommand {
        if self.open {
            self.close();
            MenuCommand::Resume
        } else {
            self.open = true;
            self.selected = MenuItem::Resume;
            log::info!("Menu opened");
            MenuCommand::None
        }
    }

    pub fn close(&mut self) {
        if self.open {
            self.open = false;
            log::info!("Menu closed");
        }
    }

    pub fn up(&mut self) {
        if self.open {
            let n = MenuItem::ALL.len();
            self.selected = MenuItem::ALL[(self.selected.position() + n - 1) % n];
        }
    }

    pub fn down(&mut self) {
        if self.open {
            let n = MenuItem::ALL.len();
            self.selected = MenuItem::ALL[(self.selected.position() + 1) % n];
        }
    }

    /// Left/right on an option row: cycle the preset or flip the flag
    pub fn adjust(&mut self, settings: &mut Settings, forward: bool) -> MenuCommand {
        if !self.open {
            return MenuCommand::None;
        }
        match self.selected {
            MenuItem::Twinkle => {
                settings.twinkle = if forward {
                    settings.twinkle.next()
                } else {
                    settings.twinkle.prev()
                };
                MenuCommand::SettingsChanged
            }
            MenuItem::ShootingStars => {
                settings.shooting_stars = !settings.shooting_stars;
                MenuCommand::SettingsChanged
            }
            _ => MenuCommand::None,
        }
    }

    pub fn select(&mut self, settings: &mut Settings) -> MenuCommand {
        if !self.open {
            return MenuCommand::None;
        }
        match self.selected {
            MenuItem::Resume => {
                self.close();
                MenuCommand::Resume
            }
            MenuItem::Twinkle | MenuItem::ShootingStars => self.adjust(settings, true),
            MenuItem::Restart => {
                self.close();
                MenuCommand::Restart
            }
            MenuItem::Quit => MenuCommand::Quit,
        }
    }
}
