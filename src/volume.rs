use std::fmt;

/// Quietest stored volume level.
pub const MIN_VOLUME: u8 = 0;
/// Loudest stored volume level.
pub const MAX_VOLUME: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeError {
    OutOfRange(i32),
}

impl fmt::Display for VolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VolumeError::OutOfRange(value) => f.write_fmt(
                format_args!("Volume({}) should {} <= {} <= {}", value, MIN_VOLUME, value, MAX_VOLUME)
            ),
        }
    }
}

impl std::error::Error for VolumeError {}

/// Volume level of the set.
///
/// Always within `MIN_VOLUME..=MAX_VOLUME`. Deserialized values outside the
/// range are clamped.
///
/// ```
/// # use television_core::volume::Volume;
/// let v = Volume::new(2);
/// assert_eq!(v.up().unwrap().as_u8(), 3);
/// assert!(v.up().unwrap().up().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, PartialOrd, Ord, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(from="Serialized")]
pub struct Volume(u8);

impl Default for Volume {
    fn default() -> Self {
        Self::MIN
    }
}

#[derive(serde::Deserialize)]
struct Serialized(u8);

impl From<Serialized> for Volume {
    fn from(s: Serialized) -> Self {
        Self::safe_new(s.0)
    }
}

impl Volume {
    pub const MIN: Volume = Volume(MIN_VOLUME);
    pub const MAX: Volume = Volume(MAX_VOLUME);
    /// What the indicator shows while muted.
    pub const MUTED: Volume = Volume::MIN;

    /// # Panics
    ///
    /// Panics if `value` is greater than `MAX_VOLUME`.
    pub const fn new(value: u8) -> Self {
        if MAX_VOLUME < value {
            panic!("Too large volume.");
        } else {
            Volume(value)
        }
    }

    /// Creates a volume, clamping `value` to `MAX_VOLUME`.
    pub fn safe_new(value: u8) -> Self {
        Self(value.min(MAX_VOLUME))
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        self.0
    }

    pub fn up(self) -> Result<Self, VolumeError> {
        if MAX_VOLUME <= self.0 {
            Err(VolumeError::OutOfRange(self.0 as i32 + 1))
        } else {
            Ok(Volume(self.0 + 1))
        }
    }

    pub fn down(self) -> Result<Self, VolumeError> {
        if self.0 <= MIN_VOLUME {
            Err(VolumeError::OutOfRange(self.0 as i32 - 1))
        } else {
            Ok(Volume(self.0 - 1))
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
