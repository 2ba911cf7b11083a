use std::fmt;

use enumset::EnumSetType;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::channel::{Channel, ChannelError};

static CHANNEL_NAME: Lazy<Regex> = Lazy::new(||
    Regex::new(r"^(?:ch(?:annel)?_?)?(\d{1,9})$").unwrap()
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonError {
    UnknownButton(String),
    InvalidChannel(ChannelError),
}

impl fmt::Display for ButtonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonError::UnknownButton(name) => write!(f, "Unknown button '{}'.", name),
            ButtonError::InvalidChannel(e) => write!(f, "Invalid channel button: {}", e),
        }
    }
}

impl std::error::Error for ButtonError {}

/// Physical button kinds, used to report which controls are enabled.
/// All nine direct select buttons share the `DirectChannel` kind.
#[derive(Debug, EnumSetType)]
pub enum ButtonKind {
    Power,
    Mute,
    VolumeUp,
    VolumeDown,
    ChannelUp,
    ChannelDown,
    DirectChannel,
}

/// One press of a remote button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum Button {
    Power,
    Mute,
    VolumeUp,
    VolumeDown,
    ChannelUp,
    ChannelDown,
    Channel(Channel),
}

impl Button {
    pub const ALL: [Button; 15] = [
        Button::Power, Button::Mute,
        Button::VolumeUp, Button::VolumeDown,
        Button::ChannelUp, Button::ChannelDown,
        Button::Channel(Channel::ALL[0]), Button::Channel(Channel::ALL[1]), Button::Channel(Channel::ALL[2]),
        Button::Channel(Channel::ALL[3]), Button::Channel(Channel::ALL[4]), Button::Channel(Channel::ALL[5]),
        Button::Channel(Channel::ALL[6]), Button::Channel(Channel::ALL[7]), Button::Channel(Channel::ALL[8]),
    ];

    pub fn kind(self) -> ButtonKind {
        match self {
            Button::Power => ButtonKind::Power,
            Button::Mute => ButtonKind::Mute,
            Button::VolumeUp => ButtonKind::VolumeUp,
            Button::VolumeDown => ButtonKind::VolumeDown,
            Button::ChannelUp => ButtonKind::ChannelUp,
            Button::ChannelDown => ButtonKind::ChannelDown,
            Button::Channel(_) => ButtonKind::DirectChannel,
        }
    }

    /// Parses a button name. Case, `-` and blanks are not significant, so
    /// `Volume Up`, `volume-up` and `volume_up` are the same button. Direct
    /// selection accepts `channel5`, `ch5` or plain `5`.
    pub fn parse(s: &str) -> Result<Self, ButtonError> {
        let name: String = s.trim().to_lowercase()
            .chars()
            .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
            .collect();

        match name.as_str() {
            "power" => Ok(Button::Power),
            "mute" => Ok(Button::Mute),
            "volume_up" => Ok(Button::VolumeUp),
            "volume_down" => Ok(Button::VolumeDown),
            "channel_up" => Ok(Button::ChannelUp),
            "channel_down" => Ok(Button::ChannelDown),
            _ => match CHANNEL_NAME.captures(&name) {
                Some(c) => {
                    let no: i32 = c[1].parse().map_err(|_| ButtonError::UnknownButton(s.to_owned()))?;
                    Channel::value_of(no).map(Button::Channel).map_err(ButtonError::InvalidChannel)
                }
                None => Err(ButtonError::UnknownButton(s.to_owned())),
            }
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Button::Power => f.write_str("power"),
            Button::Mute => f.write_str("mute"),
            Button::VolumeUp => f.write_str("volume_up"),
            Button::VolumeDown => f.write_str("volume_down"),
            Button::ChannelUp => f.write_str("channel_up"),
            Button::ChannelDown => f.write_str("channel_down"),
            Button::Channel(ch) => write!(f, "channel{}", ch),
        }
    }
}

impl TryFrom<String> for Button {
    type Error = ButtonError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Button::parse(&s)
    }
}

impl From<Button> for String {
    fn from(b: Button) -> Self {
        b.to_string()
    }
}
