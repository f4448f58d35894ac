//! Access link configuration.

use serde::{Deserialize, Serialize};

/// Settings for password-protected access links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Base address of the frontend that renders shared links.
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
    /// Length of generated link passwords, in characters.
    #[serde(default = "default_password_length")]
    pub password_length: usize,
    /// Path segment for board share pages.
    #[serde(default = "default_board_share_path")]
    pub board_share_path: String,
    /// Path segment for business unit share pages.
    #[serde(default = "default_unit_share_path")]
    pub unit_share_path: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            frontend_url: default_frontend_url(),
            password_length: default_password_length(),
            board_share_path: default_board_share_path(),
            unit_share_path: default_unit_share_path(),
        }
    }
}

fn default_frontend_url() -> String {
    "http://localhost:5173".to_string()
}

fn default_password_length() -> usize {
    12
}

fn default_board_share_path() -> String {
    "/share".to_string()
}

fn default_unit_share_path() -> String {
    "/customer/login".to_string()
}
