/// Entries of the start and game-over menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NewGame,
    Exit,
    Restart,
    BackToStart,
}

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::NewGame => "New Game",
            MenuItem::Exit => "Exit",
            MenuItem::Restart => "Restart",
            MenuItem::BackToStart => "Exit to Start",
        }
    }
}

/// A vertical list of choices with one highlighted entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: &'static [MenuItem],
    selected: usize,
}

impl Menu {
    pub fn start() -> Self {
        Self {
            items: &[MenuItem::NewGame, MenuItem::Exit],
            selected: 0,
        }
    }

    pub fn game_over() -> Self {
        Self {
            items: &[MenuItem::Restart, MenuItem::BackToStart],
            selected: 0,
        }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    pub fn selected(&self) -> MenuItem {
        self.items[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move the highlight down, wrapping around
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// Move the highlight up, wrapping around
    pub fn previous(&mut self) {
        self.selected = (self.selected + self.items.len() - 1) % self.items.len();
    }
}
