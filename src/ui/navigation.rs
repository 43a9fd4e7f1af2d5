/// Central routing types for the TUI flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRoute {
    PresetsMenu,
    SavePreset,
}

impl UiRoute {
    /// Human readable label used by headers and logs.
    pub fn title(self) -> &'static str {
        match self {
            UiRoute::PresetsMenu => "OCIO Presets",
            UiRoute::SavePreset => "Save Preset",
        }
    }
}
