//! Control logic of a simulated television remote.
//!
//! [`television::Television`] owns the power, mute, volume and channel state
//! and exposes one method per button. A presentation layer feeds it
//! [`button::Button`] presses and renders [`screen::DisplayState`].
//!
//! ```
//! use television_core::{button::Button, channel::Channel, television::Television};
//!
//! let mut tv = Television::new();
//! tv.press(Button::Power);
//! tv.press(Button::Channel(Channel::new(5)));
//! assert_eq!(tv.display().screen.image_key(), "channels/channel5.png");
//! ```

pub mod button;
pub mod channel;
pub mod keymap;
pub mod screen;
pub mod shared;
pub mod television;
pub mod volume;
