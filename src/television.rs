use derive_builder::Builder;
use enumset::EnumSet;
use tracing::{debug, trace};

use crate::button::{Button, ButtonKind};
use crate::channel::{Channel, MAX_CHANNEL, MIN_CHANNEL};
use crate::screen::{DisplayState, Screen};
use crate::volume::Volume;

/// Everything the set remembers.
///
/// `muted` and the stored `volume` are independent: the stored level survives
/// muting and is what unmuting brings back.
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Builder)]
#[builder(default)]
pub struct TelevisionState {
    pub power: bool,
    pub muted: bool,
    pub volume: Volume,
    pub channel: Channel,
}

/// The remote's control logic.
///
/// Every operation is total. While the power is off, everything except
/// [`Television::toggle_power`] is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Television {
    state: TelevisionState,
}

impl Television {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: TelevisionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> TelevisionState {
        self.state
    }

    /// Turns the set on or off. Channel, volume and mute are kept as they are.
    pub fn toggle_power(&mut self) {
        self.state.power = !self.state.power;
        debug!(power = self.state.power, channel = %self.state.channel, "power toggled");
    }

    /// Mutes or unmutes. No-op while the power is off.
    pub fn toggle_mute(&mut self) {
        if !self.guard("toggle_mute") { return; }
        self.state.muted = !self.state.muted;
        debug!(muted = self.state.muted, volume = %self.state.volume, "mute toggled");
    }

    /// Raises the stored volume by one, stopping at `MAX_VOLUME`. No-op while
    /// the power is off.
    pub fn volume_up(&mut self) {
        if !self.guard("volume_up") { return; }
        // Stored volume moves even while muted; the indicator keeps showing 0
        // until unmuted.
        match self.state.volume.up() {
            Ok(v) => {
                self.state.volume = v;
                debug!(volume = %v, muted = self.state.muted, "volume up");
            }
            Err(_) => trace!(volume = %self.state.volume, "volume already at max"),
        }
    }

    /// Lowers the stored volume by one, stopping at `MIN_VOLUME`. No-op while
    /// the power is off.
    pub fn volume_down(&mut self) {
        if !self.guard("volume_down") { return; }
        match self.state.volume.down() {
            Ok(v) => {
                self.state.volume = v;
                debug!(volume = %v, muted = self.state.muted, "volume down");
            }
            Err(_) => trace!(volume = %self.state.volume, "volume already at min"),
        }
    }

    /// Next channel, wrapping from 9 to 1. No-op while the power is off.
    pub fn channel_up(&mut self) {
        if !self.guard("channel_up") { return; }
        self.state.channel = self.state.channel.next();
        debug!(channel = %self.state.channel, "channel up");
    }

    /// Previous channel, wrapping from 1 to 9. No-op while the power is off.
    pub fn channel_down(&mut self) {
        if !self.guard("channel_down") { return; }
        self.state.channel = self.state.channel.prev();
        debug!(channel = %self.state.channel, "channel down");
    }

    /// Tunes directly to channel `no`.
    ///
    /// `no` must be within `MIN_CHANNEL..=MAX_CHANNEL`. Debug builds panic on
    /// anything else; release builds ignore the call.
    pub fn select_channel(&mut self, no: u8) {
        debug_assert!(
            (MIN_CHANNEL..=MAX_CHANNEL).contains(&no),
            "Invalid channel value(={}). Should be {} <= value <= {}.", no, MIN_CHANNEL, MAX_CHANNEL
        );
        match Channel::value_of(no as i32) {
            Ok(ch) => self.select(ch),
            Err(e) => trace!(error = %e, "ignored out of range channel"),
        }
    }

    /// Tunes to `channel`. No-op while the power is off.
    pub fn select(&mut self, channel: Channel) {
        if !self.guard("select") { return; }
        self.state.channel = channel;
        debug!(channel = %channel, "channel selected");
    }

    /// Dispatches one button press. Returns true if the state changed.
    pub fn press(&mut self, button: Button) -> bool {
        let before = self.state;
        match button {
            Button::Power => self.toggle_power(),
            Button::Mute => self.toggle_mute(),
            Button::VolumeUp => self.volume_up(),
            Button::VolumeDown => self.volume_down(),
            Button::ChannelUp => self.channel_up(),
            Button::ChannelDown => self.channel_down(),
            Button::Channel(ch) => self.select(ch),
        }
        before != self.state
    }

    pub fn is_powered_on(&self) -> bool {
        self.state.power
    }

    /// Mute stays stored across power off but only shows while on.
    pub fn is_muted(&self) -> bool {
        self.state.power && self.state.muted
    }

    pub fn current_volume(&self) -> Volume {
        self.state.volume
    }

    pub fn effective_volume(&self) -> Volume {
        if self.is_muted() { Volume::MUTED } else { self.state.volume }
    }

    pub fn current_channel(&self) -> Channel {
        self.state.channel
    }

    /// Whether the buttons other than power accept input.
    pub fn controls_enabled(&self) -> bool {
        self.is_powered_on()
    }

    /// Buttons the presentation layer should leave clickable.
    ///
    /// Volume buttons are greyed out while muted even though
    /// [`Television::volume_up`] and [`Television::volume_down`] still work.
    /// They also stay greyed out when the set is powered on again while
    /// still muted, so the set never shows a volume button that mute hides.
    /// Older remotes re-enabled them on power on; this one does not.
    pub fn enabled_buttons(&self) -> EnumSet<ButtonKind> {
        if !self.controls_enabled() {
            return EnumSet::only(ButtonKind::Power);
        }
        let all = EnumSet::all();
        if self.is_muted() {
            all - ButtonKind::VolumeUp - ButtonKind::VolumeDown
        } else {
            all
        }
    }

    pub fn display(&self) -> DisplayState {
        let on = self.is_powered_on();
        DisplayState {
            screen: if on { Screen::Tuned(self.state.channel) } else { Screen::Off },
            channel_indicator: if on { Some(self.state.channel) } else { None },
            volume_indicator: self.effective_volume(),
            muted: self.is_muted(),
            controls_enabled: self.controls_enabled(),
            enabled_buttons: self.enabled_buttons(),
        }
    }

    fn guard(&self, op: &'static str) -> bool {
        if !self.state.power {
            trace!(op, "ignored while power is off");
        }
        self.state.power
    }
}
