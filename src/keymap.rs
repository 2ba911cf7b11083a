use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use error_stack::{Report, ResultExt};
use once_cell::sync::Lazy;
use tracing::info;

use crate::button::Button;
use crate::channel::Channel;

static DEFAULT_BINDINGS: Lazy<BTreeMap<String, Button>> = Lazy::new(|| {
    let mut bindings = BTreeMap::from([
        ("p".to_owned(), Button::Power),
        ("m".to_owned(), Button::Mute),
        ("+".to_owned(), Button::VolumeUp),
        ("=".to_owned(), Button::VolumeUp),
        ("-".to_owned(), Button::VolumeDown),
        ("]".to_owned(), Button::ChannelUp),
        ("[".to_owned(), Button::ChannelDown),
    ]);
    for ch in Channel::ALL {
        bindings.insert(ch.to_string(), Button::Channel(ch));
    }
    bindings
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Io,
    Parse,
    InvalidButton,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io => f.write_str("Cannot read remote config."),
            ConfigError::Parse => f.write_str("Remote config is not valid JSON."),
            ConfigError::InvalidButton => f.write_str("Remote config binds a key to an unknown button."),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Maps host key strings (a typed character, a key name) to remote buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: BTreeMap<String, Button>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self { bindings: DEFAULT_BINDINGS.clone() }
    }
}

impl Keymap {
    pub fn empty() -> Self {
        Self { bindings: BTreeMap::new() }
    }

    /// Binds `key` to `button`, returning the button it was bound to before.
    pub fn bind(&mut self, key: impl Into<String>, button: Button) -> Option<Button> {
        self.bindings.insert(key.into(), button)
    }

    pub fn lookup(&self, key: &str) -> Option<Button> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Button)> {
        self.bindings.iter().map(|(k, b)| (k.as_str(), *b))
    }
}

#[derive(serde::Deserialize)]
struct Serialized {
    keymap: Option<BTreeMap<String, String>>,
}

/// Host-side settings of the remote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteConfig {
    pub keymap: Keymap,
}

impl RemoteConfig {
    /// Parses `{"keymap": {"<key>": "<button name>", ...}}`. Without a
    /// `keymap` entry the default bindings apply; a given keymap replaces them.
    pub fn from_json(json: &str) -> Result<Self, Report<ConfigError>> {
        let ser: Serialized = serde_json::from_str(json)
            .change_context(ConfigError::Parse)?;

        let keymap = match ser.keymap {
            None => Keymap::default(),
            Some(raw) => {
                let mut keymap = Keymap::empty();
                for (key, name) in raw {
                    let button = Button::parse(&name)
                        .change_context(ConfigError::InvalidButton)
                        .attach_printable_lazy(|| format!("key '{}' is bound to '{}'", key, name))?;
                    keymap.bind(key, button);
                }
                keymap
            }
        };

        Ok(Self { keymap })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Report<ConfigError>> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .change_context(ConfigError::Io)
            .attach_printable_lazy(|| format!("path: {}", path.display()))?;
        let config = Self::from_json(&json)
            .attach_printable_lazy(|| format!("path: {}", path.display()))?;
        info!(path = %path.display(), bindings = config.keymap.len(), "remote config loaded");
        Ok(config)
    }
}
