// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! The color model and its update propagation policy.
//!
//! A [`ColorModel`] owns the canonical [`ColorState`] of one picker. Edits
//! arrive from five text fields and from collaborators that replace the whole
//! color. After every accepted edit the model publishes the derived values to
//! its observers, skipping the field the edit came from so the text the user
//! is typing is never rewritten underneath them.
//!
//! Observers are called while the model is mutably borrowed, so they cannot
//! feed a value back into it.

use crate::base::ValidationError;
use crate::colors::{compose, decompose, parse_hex, validate_channel, Channel, ColorState};
use crate::events::{EditIntent, Field, FieldUpdate, Target};
use smallvec::SmallVec;

/// Callback receiving updates for one [`Target`].
pub type ObserverFn = Box<dyn FnMut(&FieldUpdate) + Send>;

/// External listener receiving the packed color after user edits.
pub type ColorListener = Box<dyn FnMut(u32) + Send>;

/// Handle returned by [`ColorModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Which representation is currently being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No field owns the current value.
    #[default]
    Idle,
    /// The user is typing into a channel field.
    EditingChannel(Channel),
    /// The user is typing into the hex field.
    EditingHex,
}

impl Phase {
    fn for_origin(origin: Field) -> Self {
        match origin.channel() {
            Some(channel) => Phase::EditingChannel(channel),
            None => Phase::EditingHex,
        }
    }
}

struct Subscription {
    id: ObserverId,
    target: Target,
    callback: ObserverFn,
}

/// Canonical color state of a picker plus the rules for propagating edits.
pub struct ColorModel {
    state: ColorState,
    phase: Phase,
    callback_armed: bool,
    observers: SmallVec<[Subscription; 6]>,
    next_id: u64,
    on_color_change: Option<ColorListener>,
}

impl std::fmt::Debug for ColorModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorModel")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("callback_armed", &self.callback_armed)
            .field("observers", &self.observers.len())
            .field("on_color_change", &self.on_color_change.is_some())
            .finish()
    }
}

impl Default for ColorModel {
    fn default() -> Self {
        Self::new(ColorState::default())
    }
}

impl ColorModel {
    /// Creates a model holding the given color.
    pub fn new(initial: ColorState) -> Self {
        Self {
            state: initial,
            phase: Phase::Idle,
            callback_armed: false,
            observers: SmallVec::new(),
            next_id: 0,
            on_color_change: None,
        }
    }

    /// Returns the canonical color.
    pub fn state(&self) -> ColorState {
        self.state
    }

    /// Returns the packed `0xAARRGGBB` color.
    pub fn packed(&self) -> u32 {
        self.state.packed()
    }

    /// Returns the hex field text, `#RRGGBB`.
    pub fn hex(&self) -> String {
        self.state.hex()
    }

    /// Returns the current propagation phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns `true` if the last accepted edit came from the user and should
    /// reach the external listener.
    pub fn callback_armed(&self) -> bool {
        self.callback_armed
    }

    /// Registers an observer for one target.
    pub fn subscribe<F>(&mut self, target: Target, callback: F) -> ObserverId
    where
        F: FnMut(&FieldUpdate) + Send + 'static,
    {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push(Subscription {
            id,
            target,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|sub| sub.id != id);
        before != self.observers.len()
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Sets the listener called with the packed color after user edits.
    pub fn set_on_color_change<F>(&mut self, listener: F)
    where
        F: FnMut(u32) + Send + 'static,
    {
        self.on_color_change = Some(Box::new(listener));
    }

    /// Removes the external listener.
    pub fn clear_on_color_change(&mut self) {
        self.on_color_change = None;
    }

    /// Applies an edit intent.
    ///
    /// # Errors
    ///
    /// Returns the validation error of a rejected edit; the model is unchanged.
    pub fn dispatch(&mut self, intent: &EditIntent) -> Result<ColorState, ValidationError> {
        match intent {
            EditIntent::Channel { channel, text } => self.edit_channel(*channel, text),
            EditIntent::Hex { text, focused } => self.edit_hex(text, *focused),
            EditIntent::SetColor(packed) => {
                self.set_full_color(*packed);
                Ok(self.state)
            }
        }
    }

    /// Applies text typed into a channel field.
    ///
    /// Every observer except the edited field is notified.
    ///
    /// # Errors
    ///
    /// Returns the validation error of rejected text; the model is unchanged.
    pub fn edit_channel(&mut self, channel: Channel, raw: &str) -> Result<ColorState, ValidationError> {
        let value = validate_channel(channel, raw).inspect_err(|e| {
            tracing::debug!(%channel, input = raw, error = %e, "channel edit rejected");
        })?;
        Ok(self.apply_channel(channel, value, Field::from(channel)))
    }

    /// Applies an alpha percentage typed into `origin`.
    ///
    /// # Errors
    ///
    /// Returns the validation error of rejected text; the model is unchanged.
    pub fn apply_alpha_percent(&mut self, raw: &str, origin: Field) -> Result<ColorState, ValidationError> {
        let value = validate_channel(Channel::Alpha, raw)?;
        Ok(self.apply_channel(Channel::Alpha, value, origin))
    }

    /// Applies text typed into the hex field.
    ///
    /// Red, green and blue are replaced; alpha is kept. While the hex field has
    /// focus it is not notified and the edit counts as a user edit. Without
    /// focus the text was set programmatically and no field owns the edit.
    ///
    /// # Errors
    ///
    /// Returns the validation error of rejected text; the model is unchanged.
    pub fn edit_hex(&mut self, raw: &str, focused: bool) -> Result<ColorState, ValidationError> {
        let rgb = parse_hex(raw)?;
        let before = self.state.packed();

        self.state = self.state.with_rgb(rgb);
        self.phase = if focused { Phase::EditingHex } else { Phase::Idle };
        self.callback_armed = focused;
        tracing::debug!(input = raw, color = %self.state, focused, "hex edit accepted");

        self.publish(focused.then_some(Field::Hex));
        self.notify_listener(before);
        Ok(self.state)
    }

    /// Replaces the whole color, e.g. from the hue or saturation slider.
    ///
    /// Every observer is notified and the external listener is not called.
    pub fn set_full_color(&mut self, packed: u32) {
        self.state = decompose(packed);
        self.phase = Phase::Idle;
        self.callback_armed = false;
        tracing::debug!(color = %self.state, "full color set");
        self.publish(None);
    }

    /// Marks the current edit as finished, e.g. when a field loses focus.
    pub fn end_edit(&mut self) {
        self.phase = Phase::Idle;
    }

    fn apply_channel(&mut self, channel: Channel, value: u8, origin: Field) -> ColorState {
        let before = self.state.packed();

        self.state = self.state.with_channel(channel, value);
        self.phase = Phase::for_origin(origin);
        self.callback_armed = true;
        tracing::debug!(%channel, value, %origin, "channel edit accepted");

        self.publish(Some(origin));
        self.notify_listener(before);
        self.state
    }

    fn publish(&mut self, origin: Option<Field>) {
        let composed = compose(self.state);
        for sub in self.observers.iter_mut() {
            let update = match sub.target {
                Target::Field(field) if Some(field) == origin => continue,
                Target::Field(field) => match field.channel() {
                    Some(channel) => FieldUpdate::Channel {
                        channel,
                        value: self.state.channel(channel),
                    },
                    None => FieldUpdate::Hex(composed.hex.clone()),
                },
                Target::Color => FieldUpdate::Color(composed.packed),
            };
            tracing::trace!(target_field = ?sub.target, ?update, "notify observer");
            (sub.callback)(&update);
        }
    }

    fn notify_listener(&mut self, before: u32) {
        let packed = self.state.packed();
        if !self.callback_armed || packed == before {
            return;
        }
        if let Some(listener) = self.on_color_change.as_mut() {
            listener(packed);
        }
    }
}
