//! Preference operations for the Tracker.

use super::Tracker;
use crate::{error::Result, models::Theme};

impl Tracker {
    /// Whether deletions need explicit confirmation.
    pub async fn confirm_delete(&self) -> Result<bool> {
        self.run(|session| Ok(session.preferences.confirm_delete()))
            .await
    }

    pub async fn set_confirm_delete(&self, enabled: bool) -> Result<()> {
        self.run(move |session| session.preferences.set_confirm_delete(enabled))
            .await
    }

    pub async fn theme(&self) -> Result<Theme> {
        self.run(|session| Ok(session.preferences.theme())).await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.run(move |session| session.preferences.set_theme(theme))
            .await
    }
}
