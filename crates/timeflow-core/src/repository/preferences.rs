//! User preferences stored next to the collections.

use crate::{
    error::Result,
    models::Theme,
    store::{keys, Snapshots},
};

/// Reads and writes the confirm-delete flag and the theme tag.
#[derive(Clone)]
pub struct Preferences {
    snapshots: Snapshots,
}

impl Preferences {
    pub fn new(snapshots: Snapshots) -> Self {
        Self { snapshots }
    }

    /// Whether destructive operations need explicit confirmation. Defaults to
    /// `true`.
    pub fn confirm_delete(&self) -> bool {
        self.snapshots.load(keys::CONFIRM_DELETE, true)
    }

    pub fn set_confirm_delete(&self, enabled: bool) -> Result<()> {
        self.snapshots.save(keys::CONFIRM_DELETE, &enabled)
    }

    /// The stored theme, [`Theme::Light`] by default.
    pub fn theme(&self) -> Theme {
        self.snapshots.load(keys::THEME, Theme::default())
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.snapshots.save(keys::THEME, &theme)
    }
}
