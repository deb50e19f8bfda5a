//! Keyboard input
//!
//! The game reacts to two logical actions, jump and restart. Keys are bound
//! to them by name in the config (DOM-style names like "Space" or "ArrowUp",
//! case-insensitive). Keys with no binding are ignored.

use macroquad::prelude::{get_keys_pressed, KeyCode};
use crate::config::KeyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Restart,
}

/// Resolve a key name to a macroquad key code
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let lower = name.trim().to_ascii_lowercase();

    // "KeyA" / "A" and "Digit1" / "1"
    let single = lower
        .strip_prefix("key")
        .or_else(|| lower.strip_prefix("digit"))
        .unwrap_or(&lower);
    if single.len() == 1 {
        if let Some(code) = single.chars().next().and_then(char_key) {
            return Some(code);
        }
    }

    let code = match lower.as_str() {
        "space" | " " => KeyCode::Space,
        "enter" | "return" => KeyCode::Enter,
        "numpadenter" => KeyCode::KpEnter,
        "arrowup" | "up" => KeyCode::Up,
        "arrowdown" | "down" => KeyCode::Down,
        "arrowleft" | "left" => KeyCode::Left,
        "arrowright" | "right" => KeyCode::Right,
        "escape" | "esc" => KeyCode::Escape,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "shiftleft" | "shift" => KeyCode::LeftShift,
        "shiftright" => KeyCode::RightShift,
        "controlleft" | "control" | "ctrl" => KeyCode::LeftControl,
        "controlright" => KeyCode::RightControl,
        _ => return None,
    };
    Some(code)
}

fn char_key(c: char) -> Option<KeyCode> {
    let code = match c {
        'a' => KeyCode::A, 'b' => KeyCode::B, 'c' => KeyCode::C, 'd' => KeyCode::D,
        'e' => KeyCode::E, 'f' => KeyCode::F, 'g' => KeyCode::G, 'h' => KeyCode::H,
        'i' => KeyCode::I, 'j' => KeyCode::J, 'k' => KeyCode::K, 'l' => KeyCode::L,
        'm' => KeyCode::M, 'n' => KeyCode::N, 'o' => KeyCode::O, 'p' => KeyCode::P,
        'q' => KeyCode::Q, 'r' => KeyCode::R, 's' => KeyCode::S, 't' => KeyCode::T,
        'u' => KeyCode::U, 'v' => KeyCode::V, 'w' => KeyCode::W, 'x' => KeyCode::X,
        'y' => KeyCode::Y, 'z' => KeyCode::Z,
        '0' => KeyCode::Key0, '1' => KeyCode::Key1, '2' => KeyCode::Key2,
        '3' => KeyCode::Key3, '4' => KeyCode::Key4, '5' => KeyCode::Key5,
        '6' => KeyCode::Key6, '7' => KeyCode::Key7, '8' => KeyCode::Key8,
        '9' => KeyCode::Key9,
        _ => return None,
    };
    Some(code)
}

/// Key codes bound to each action
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    jump: Vec<KeyCode>,
    restart: Vec<KeyCode>,
}

impl KeyBindings {
    /// Resolve configured names. Unknown names are reported and skipped.
    pub fn from_config(keys: &KeyConfig) -> Self {
        Self {
            jump: resolve_names(&keys.jump, "jump"),
            restart: resolve_names(&keys.restart, "restart"),
        }
    }

    pub fn action_for(&self, key: KeyCode) -> Option<Action> {
        if self.jump.contains(&key) {
            Some(Action::Jump)
        } else if self.restart.contains(&key) {
            Some(Action::Restart)
        } else {
            None
        }
    }

    /// Actions for keys pressed since the last frame
    pub fn poll(&self) -> Vec<Action> {
        let mut pressed: Vec<KeyCode> = get_keys_pressed().into_iter().collect();
        // HashSet order is arbitrary; keep dispatch deterministic
        pressed.sort_by_key(|k| *k as u16);
        pressed.into_iter().filter_map(|k| self.action_for(k)).collect()
    }
}

fn resolve_names(names: &[String], action: &str) -> Vec<KeyCode> {
    names
        .iter()
        .filter_map(|name| {
            let code = key_from_name(name);
            if code.is_none() {
                eprintln!("[input] Unknown key \"{}\" for {}, ignoring", name, action);
            }
            code
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(key_from_name("Space"), Some(KeyCode::Space));
        assert_eq!(key_from_name("enter"), Some(KeyCode::Enter));
        assert_eq!(key_from_name("ArrowUp"), Some(KeyCode::Up));
        assert_eq!(key_from_name("KeyW"), Some(KeyCode::W));
        assert_eq!(key_from_name("w"), Some(KeyCode::W));
        assert_eq!(key_from_name("Digit7"), Some(KeyCode::Key7));
        assert_eq!(key_from_name("  ESCAPE "), Some(KeyCode::Escape));
    }

    #[test]
    fn test_unknown_key_names() {
        assert_eq!(key_from_name("Hyper"), None);
        assert_eq!(key_from_name(""), None);
        assert_eq!(key_from_name("Key"), None);
        assert_eq!(key_from_name("?"), None);
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::from_config(&KeyConfig::default());
        assert_eq!(bindings.action_for(KeyCode::Space), Some(Action::Jump));
        assert_eq!(bindings.action_for(KeyCode::Enter), Some(Action::Restart));
        assert_eq!(bindings.action_for(KeyCode::Q), None);
    }

    #[test]
    fn test_unknown_names_skipped() {
        let keys = KeyConfig {
            jump: vec!["Bogus".to_string(), "ArrowUp".to_string()],
            restart: vec![],
        };
        let bindings = KeyBindings::from_config(&keys);
        assert_eq!(bindings.action_for(KeyCode::Up), Some(Action::Jump));
        assert_eq!(bindings.action_for(KeyCode::Enter), None);
    }
}
