use crossterm::event::KeyCode;

/// Operating constants for the monitor.
///
/// There is no file, flag or environment lookup: every run uses
/// `Config::default()`.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub general: GeneralConfig,
    pub table: TableConfig,
    pub keybinds: KeybindsConfig,
}

#[derive(Debug, Clone)]
pub struct GeneralConfig {
    pub refresh_rate_ms: u64,
    /// How long a kill outcome stays on screen before sampling resumes.
    pub kill_message_ms: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_rate_ms: 1000,
            kill_message_ms: 2000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableConfig {
    pub name_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig { name_width: 24 }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindsConfig {
    pub quit: String,
    pub kill: String,
}

impl Default for KeybindsConfig {
    fn default() -> Self {
        KeybindsConfig {
            quit: "q".to_string(),
            kill: "k".to_string(),
        }
    }
}

pub fn parse_key(s: &str) -> Option<KeyCode> {
    match s {
        "Enter" => Some(KeyCode::Enter),
        "Escape" | "Esc" => Some(KeyCode::Esc),
        "Tab" => Some(KeyCode::Tab),
        "Space" => Some(KeyCode::Char(' ')),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}
