//! Difficulty presets and player preferences
//!
//! The only persisted value is the difficulty name, stored as a bare
//! string in LocalStorage.

use serde::{Deserialize, Serialize};

/// Difficulty preset; decides how far ahead the death tile can be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Human-readable label ("Easy", "Medium", "Hard")
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Resolve a stored preference, falling back to Medium when it is
    /// missing or unreadable
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some(raw) => Self::from_str(raw).unwrap_or_else(|| {
                log::warn!("Ignoring unknown stored difficulty {:?}", raw);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Inclusive (min, max) number of columns between the player and the
    /// death tile
    pub fn gap_range(&self) -> (i32, i32) {
        match self {
            Difficulty::Easy => (12, 20),
            Difficulty::Medium => (5, 15),
            Difficulty::Hard => (2, 5),
        }
    }
}

/// Player preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub difficulty: Difficulty,
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "gameDifficulty";

    /// Text shown next to the difficulty buttons
    pub fn display_text(&self) -> String {
        format!("Current Difficulty: {}", self.difficulty.label())
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten());

        let difficulty = Difficulty::from_stored(stored.as_deref());
        log::info!("Difficulty: {}", difficulty.as_str());
        Self { difficulty }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if storage
                .set_item(Self::STORAGE_KEY, self.difficulty.as_str())
                .is_err()
            {
                log::warn!("Could not persist difficulty");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
