// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Edit intents coming in from the picker's fields and updates going back out.

use crate::colors::Channel;
use std::fmt;

/// One of the five text fields of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The alpha percentage field.
    Alpha,
    /// The red field.
    Red,
    /// The green field.
    Green,
    /// The blue field.
    Blue,
    /// The hex field.
    Hex,
}

impl Field {
    /// All fields, channels first.
    pub const ALL: [Field; 5] = [Field::Alpha, Field::Red, Field::Green, Field::Blue, Field::Hex];

    /// Returns the channel a numeric field edits, or `None` for the hex field.
    pub fn channel(self) -> Option<Channel> {
        match self {
            Field::Alpha => Some(Channel::Alpha),
            Field::Red => Some(Channel::Red),
            Field::Green => Some(Channel::Green),
            Field::Blue => Some(Channel::Blue),
            Field::Hex => None,
        }
    }
}

impl From<Channel> for Field {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Alpha => Field::Alpha,
            Channel::Red => Field::Red,
            Channel::Green => Field::Green,
            Channel::Blue => Field::Blue,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.channel() {
            Some(channel) => write!(f, "{channel}"),
            None => write!(f, "hex"),
        }
    }
}

/// A request to change the color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditIntent {
    /// The user typed into a numeric field.
    Channel {
        /// The edited channel.
        channel: Channel,
        /// The field's full text.
        text: String,
    },
    /// The user typed into the hex field.
    Hex {
        /// The field's full text.
        text: String,
        /// Whether the hex field has input focus.
        focused: bool,
    },
    /// A collaborator such as a hue slider replaced the whole color.
    SetColor(u32),
}

impl EditIntent {
    /// Creates a channel edit.
    pub fn channel(channel: Channel, text: impl Into<String>) -> Self {
        Self::Channel {
            channel,
            text: text.into(),
        }
    }

    /// Creates a hex edit made while the hex field has focus.
    pub fn hex(text: impl Into<String>) -> Self {
        Self::Hex {
            text: text.into(),
            focused: true,
        }
    }

    /// Returns the field the edit came from, if any.
    pub fn origin(&self) -> Option<Field> {
        match self {
            Self::Channel { channel, .. } => Some(Field::from(*channel)),
            Self::Hex { .. } => Some(Field::Hex),
            Self::SetColor(_) => None,
        }
    }
}

/// What an observer is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The contents of one text field.
    Field(Field),
    /// The packed color, e.g. for a preview panel.
    Color,
}

/// A value pushed to an observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// New value for a channel field. Alpha is the internal 0-255 value.
    Channel {
        /// The channel.
        channel: Channel,
        /// Its new value.
        value: u8,
    },
    /// New text for the hex field, `#RRGGBB`.
    Hex(String),
    /// New packed `0xAARRGGBB` color.
    Color(u32),
}

impl FieldUpdate {
    /// Returns the text a field should show for this update.
    ///
    /// Packed color updates have no field text and return `None`.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Channel { channel, value } => Some(channel.display(*value)),
            Self::Hex(hex) => Some(hex.clone()),
            Self::Color(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_channel_mapping() {
        for channel in Channel::ALL {
            assert_eq!(Field::from(channel).channel(), Some(channel));
        }
        assert_eq!(Field::Hex.channel(), None);
        assert_eq!(Field::Hex.to_string(), "hex");
        assert_eq!(Field::Red.to_string(), "red");
    }

    #[test]
    fn test_intent_origin() {
        assert_eq!(EditIntent::channel(Channel::Blue, "3").origin(), Some(Field::Blue));
        assert_eq!(EditIntent::hex("#fff").origin(), Some(Field::Hex));
        assert_eq!(EditIntent::SetColor(0).origin(), None);
    }

    #[test]
    fn test_display_text() {
        let alpha = FieldUpdate::Channel {
            channel: Channel::Alpha,
            value: 255,
        };
        assert_eq!(alpha.display_text().as_deref(), Some("100"));
        assert_eq!(FieldUpdate::Hex("#010203".into()).display_text().as_deref(), Some("#010203"));
        assert_eq!(FieldUpdate::Color(1).display_text(), None);
    }
}
