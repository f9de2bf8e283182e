use medgloss_config::ui::UiConfig;
use medgloss_core::session::Session;

use crate::render::Style;

/// UI-specific state, owned by the UI task
pub struct UiState {
    pub session: Session,
    pub style: Style,
}

impl UiState {
    pub fn new(style: Style) -> Self {
        Self {
            session: Session::new(),
            style,
        }
    }

    /// Colors only when configured and stdout is a terminal
    pub fn from_config(config: &UiConfig) -> Self {
        let color = config.color && atty::is(atty::Stream::Stdout);
        Self::new(Style { color })
    }
}
