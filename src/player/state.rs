/// Two-state toggle shared by the play and mute controls.
///
/// For the play control `Inactive` shows the play glyph and `Active` the pause glyph;
/// for mute, `Active` means muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TogglePhase {
    #[default]
    Inactive,
    Active,
}

impl TogglePhase {
    pub fn is_active(self) -> bool {
        self == TogglePhase::Active
    }

    pub fn flipped(self) -> Self {
        match self {
            TogglePhase::Inactive => TogglePhase::Active,
            TogglePhase::Active => TogglePhase::Inactive,
        }
    }
}

/// What the widget currently displays.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub play: TogglePhase,
    pub mute: TogglePhase,
    /// Seek slider value in whole seconds (or the drag position while dragging).
    pub seek_position: f64,
    /// Unset until metadata reports a duration.
    pub seek_max: Option<f64>,
    /// Volume slider value, 0-100.
    pub volume_position: f64,
    pub seek_fill: f64,
    pub volume_fill: f64,
    pub buffered_fill: f64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            play: TogglePhase::Inactive,
            mute: TogglePhase::Inactive,
            seek_position: 0.0,
            seek_max: None,
            volume_position: 100.0,
            seek_fill: 0.0,
            volume_fill: 100.0,
            buffered_fill: 0.0,
        }
    }
}
