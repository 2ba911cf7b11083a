use std::fmt;

pub const MIN_CHANNEL: u8 = 1;
pub const MAX_CHANNEL: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    InvalidValue(i32),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::InvalidValue(value) => f.write_fmt(
                format_args!("Channel({}) should {} <= {} <= {}", value, MIN_CHANNEL, value, MAX_CHANNEL)
            ),
        }
    }
}

impl std::error::Error for ChannelError {}

/// Channel number. Stepping past either end wraps around.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(from="Serialized")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

#[derive(serde::Deserialize)]
struct Serialized(u8);

impl From<Serialized> for Channel {
    fn from(s: Serialized) -> Self {
        Self(s.0.clamp(MIN_CHANNEL, MAX_CHANNEL))
    }
}

impl Channel {
    pub const MIN: Channel = Channel(MIN_CHANNEL);
    pub const MAX: Channel = Channel(MAX_CHANNEL);
    pub const ALL: [Channel; 9] = [
        Channel(1), Channel(2), Channel(3), Channel(4), Channel(5),
        Channel(6), Channel(7), Channel(8), Channel(9),
    ];

    pub fn new(value: u8) -> Self {
        if (MIN_CHANNEL..=MAX_CHANNEL).contains(&value) {
            Self(value)
        } else {
            panic!("Invalid channel value(={}). Should be {} <= value <= {}.", value, MIN_CHANNEL, MAX_CHANNEL);
        }
    }

    pub fn value_of(value: i32) -> Result<Self, ChannelError> {
        if (MIN_CHANNEL as i32..=MAX_CHANNEL as i32).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ChannelError::InvalidValue(value))
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self.0
    }

    pub fn next(self) -> Self {
        if MAX_CHANNEL <= self.0 { Self::MIN } else { Self(self.0 + 1) }
    }

    pub fn prev(self) -> Self {
        if self.0 <= MIN_CHANNEL { Self::MAX } else { Self(self.0 - 1) }
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
