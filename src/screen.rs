use enumset::EnumSet;

use crate::button::ButtonKind;
use crate::channel::Channel;
use crate::volume::Volume;

/// What the picture area shows.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Off,
    Tuned(Channel),
}

impl Screen {
    /// Key of the image asset for this screen, relative to the asset root.
    pub fn image_key(self) -> String {
        match self {
            Screen::Off => "channels/off.png".to_owned(),
            Screen::Tuned(ch) => format!("channels/channel{}.png", ch),
        }
    }
}

/// Snapshot of everything a presentation layer renders after an event.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub screen: Screen,
    /// None hides the indicator.
    pub channel_indicator: Option<Channel>,
    /// Effective volume, 0 while muted.
    pub volume_indicator: Volume,
    pub muted: bool,
    pub controls_enabled: bool,
    pub enabled_buttons: EnumSet<ButtonKind>,
}

impl DisplayState {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
