//! Home-page banner types.

use crate::ids::BannerId;
use serde::{Deserialize, Serialize};

/// An admin-managed marketing banner.
///
/// Banners can be toggled off without deleting them, and can carry an
/// optional display window for time-limited campaigns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Banner {
    /// Unique banner identifier.
    pub id: BannerId,
    /// Headline text.
    pub title: String,
    /// Secondary text.
    pub subtitle: Option<String>,
    /// Banner image URL.
    pub image_url: String,
    /// Target URL when the banner is clicked.
    pub link_url: Option<String>,
    /// Sort order position in the carousel.
    pub position: i32,
    /// Whether the banner is enabled at all.
    pub is_active: bool,
    /// Unix timestamp the banner starts showing (None = immediately).
    pub starts_at: Option<i64>,
    /// Unix timestamp the banner stops showing (None = never).
    pub ends_at: Option<i64>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Banner {
    /// Create a new active banner.
    pub fn new(title: impl Into<String>, image_url: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: BannerId::generate(),
            title: title.into(),
            subtitle: None,
            image_url: image_url.into(),
            link_url: None,
            position: 0,
            is_active: true,
            starts_at: None,
            ends_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the banner should be displayed at the given time.
    pub fn is_live(&self, now: i64) -> bool {
        if !self.is_active {
            return false;
        }
        if let Some(starts) = self.starts_at {
            if now < starts {
                return false;
            }
        }
        if let Some(ends) = self.ends_at {
            if now > ends {
                return false;
            }
        }
        true
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
