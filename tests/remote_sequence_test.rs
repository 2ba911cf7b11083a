//! Property tests over random button sequences.

use proptest::prelude::*;
use television_core::{
    button::Button,
    channel::{Channel, MAX_CHANNEL, MIN_CHANNEL},
    television::Television,
    volume::{Volume, MAX_VOLUME, MIN_VOLUME},
};

fn any_button() -> impl Strategy<Value = Button> {
    prop_oneof![
        Just(Button::Power),
        Just(Button::Mute),
        Just(Button::VolumeUp),
        Just(Button::VolumeDown),
        Just(Button::ChannelUp),
        Just(Button::ChannelDown),
        (MIN_CHANNEL..=MAX_CHANNEL).prop_map(|n| Button::Channel(Channel::new(n))),
    ]
}

fn non_power_button() -> impl Strategy<Value = Button> {
    any_button().prop_filter("power toggles", |b| *b != Button::Power)
}

proptest! {
    #[test]
    fn values_stay_in_range(buttons in prop::collection::vec(any_button(), 0..200)) {
        let mut tv = Television::new();
        for b in buttons {
            tv.press(b);
            let volume = tv.current_volume().as_u8();
            let channel = tv.current_channel().as_u8();
            prop_assert!((MIN_VOLUME..=MAX_VOLUME).contains(&volume));
            prop_assert!((MIN_CHANNEL..=MAX_CHANNEL).contains(&channel));
            prop_assert_eq!(tv.controls_enabled(), tv.is_powered_on());
        }
    }

    #[test]
    fn power_off_ignores_other_buttons(
        setup in prop::collection::vec(any_button(), 0..50),
        buttons in prop::collection::vec(non_power_button(), 1..50),
    ) {
        let mut tv = Television::new();
        for b in setup {
            tv.press(b);
        }
        if tv.is_powered_on() {
            tv.press(Button::Power);
        }
        let before = tv.state();
        prop_assert!(!tv.is_muted());
        for b in buttons {
            prop_assert!(!tv.press(b));
            prop_assert_eq!(tv.state(), before);
            prop_assert!(!tv.is_muted());
            prop_assert!(!tv.display().muted);
        }
    }

    #[test]
    fn effective_volume_follows_mute(buttons in prop::collection::vec(any_button(), 0..200)) {
        let mut tv = Television::new();
        for b in buttons {
            tv.press(b);
            if tv.is_muted() {
                prop_assert_eq!(tv.effective_volume(), Volume::MUTED);
            } else {
                prop_assert_eq!(tv.effective_volume(), tv.current_volume());
            }
        }
    }

    #[test]
    fn press_reports_change(buttons in prop::collection::vec(any_button(), 0..200)) {
        let mut tv = Television::new();
        for b in buttons {
            let before = tv.state();
            let changed = tv.press(b);
            prop_assert_eq!(changed, before != tv.state());
        }
    }
}

#[test]
fn select_then_power_cycle() {
    let mut tv = Television::new();
    tv.toggle_power();
    tv.select_channel(5);
    tv.toggle_power();
    tv.toggle_power();
    assert!(tv.is_powered_on());
    assert_eq!(tv.current_channel(), Channel::new(5));
}

#[test]
fn volume_up_while_muted() {
    let mut tv = Television::new();
    tv.toggle_power();
    tv.toggle_mute();
    tv.volume_up();
    assert_eq!(tv.effective_volume().as_u8(), 0);
    assert_eq!(tv.current_volume().as_u8(), 1);
}

#[test]
fn display_follows_power() {
    let mut tv = Television::new();
    assert_eq!(tv.display().screen.image_key(), "channels/off.png");
    assert_eq!(tv.display().channel_indicator, None);
    tv.press(Button::Power);
    tv.press(Button::ChannelDown);
    assert_eq!(tv.display().screen.image_key(), "channels/channel9.png");
    assert_eq!(tv.display().channel_indicator, Some(Channel::MAX));
}
