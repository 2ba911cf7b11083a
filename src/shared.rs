use std::sync::Arc;

use parking_lot::Mutex;

use crate::button::Button;
use crate::screen::DisplayState;
use crate::television::{Television, TelevisionState};

/// A television whose events may arrive from several threads.
///
/// One lock guards the whole state record, so each press is applied
/// atomically. Clones share the same set.
#[derive(Debug, Clone, Default)]
pub struct SharedTelevision {
    inner: Arc<Mutex<Television>>,
}

impl SharedTelevision {
    pub fn new(tv: Television) -> Self {
        Self { inner: Arc::new(Mutex::new(tv)) }
    }

    pub fn press(&self, button: Button) -> bool {
        self.inner.lock().press(button)
    }

    pub fn state(&self) -> TelevisionState {
        self.inner.lock().state()
    }

    pub fn display(&self) -> DisplayState {
        self.inner.lock().display()
    }

    /// Runs `f` with the lock held, e.g. to press a button and read the
    /// resulting display in one step.
    pub fn with<R>(&self, f: impl FnOnce(&mut Television) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use crate::{button::Button, channel::Channel, television::Television, volume::Volume};
    use super::SharedTelevision;

    #[test]
    fn clones_share_state() {
        let tv = SharedTelevision::default();
        let other = tv.clone();
        assert!(tv.press(Button::Power));
        assert!(other.state().power);
    }

    #[test]
    fn concurrent_presses_keep_invariants() {
        let tv = SharedTelevision::new(Television::new());
        tv.press(Button::Power);

        let handles: Vec<_> = (0..4).map(|i| {
            let tv = tv.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    if i % 2 == 0 {
                        tv.press(Button::ChannelUp);
                        tv.press(Button::VolumeUp);
                    } else {
                        tv.press(Button::ChannelDown);
                        tv.press(Button::VolumeDown);
                    }
                }
            })
        }).collect();
        for h in handles {
            h.join().unwrap();
        }

        let state = tv.state();
        assert!(state.power);
        assert!(state.volume <= Volume::MAX);
        // Equal numbers of ups and downs cancel out on the wrapping channel.
        assert_eq!(state.channel, Channel::MIN);
    }

    #[test]
    fn with_holds_lock_for_compound_step() {
        let tv = SharedTelevision::default();
        let display = tv.with(|tv| {
            tv.toggle_power();
            tv.select_channel(4);
            tv.display()
        });
        assert_eq!(display.channel_indicator, Some(Channel::new(4)));
    }
}
