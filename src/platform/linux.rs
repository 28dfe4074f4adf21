// Linux config path: $XDG_CONFIG_HOME/bookmark-saver or ~/.config/bookmark-saver

use std::env;
use std::path::PathBuf;

/// Uses `$XDG_CONFIG_HOME/bookmark-saver` if set, otherwise `~/.config/bookmark-saver`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("bookmark-saver"),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join("bookmark-saver")
        }
    }
}
