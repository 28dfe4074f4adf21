// Bookmark Saver platform abstraction
// Resolves the per-user configuration directory for Windows, macOS, and Linux.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/bookmark-saver` (or `$XDG_CONFIG_HOME/bookmark-saver`)
/// - **macOS**: `~/Library/Application Support/BookmarkSaver`
/// - **Windows**: `%APPDATA%/BookmarkSaver`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}
