use serde::{Deserialize, Serialize};

fn default_color() -> bool {
    true
}

fn default_prompt() -> String {
    "term> ".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// ANSI colors, only honoured when stdout is a terminal
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            prompt: default_prompt(),
        }
    }
}
