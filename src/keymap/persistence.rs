use std::fs;
use std::path::{Path, PathBuf};

use super::Keymap;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub(crate) fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/keywire/keymap.ron`.
fn keymap_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("keywire").join("keymap.ron"))
}

/// Loads the keymap from disk, falling back to the stock bindings on any
/// error.
pub fn load_keymap() -> Keymap {
    let Some(path) = keymap_path() else {
        return Keymap::default();
    };
    load_keymap_from(&path)
}

fn load_keymap_from(path: &Path) -> Keymap {
    let Ok(contents) = fs::read_to_string(path) else {
        return Keymap::default();
    };
    ron::from_str(&contents).unwrap_or_default()
}

/// Persists the keymap to disk. Errors are silently ignored.
pub fn save_keymap(keymap: &Keymap) {
    let Some(path) = keymap_path() else {
        return;
    };
    save_keymap_to(keymap, &path);
}

fn save_keymap_to(keymap: &Keymap, path: &Path) {
    let Some(dir) = path.parent() else {
        return;
    };
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let Ok(serialized) = ron::ser::to_string_pretty(keymap, pretty) else {
        return;
    };
    let _ = fs::write(path, serialized);
}
