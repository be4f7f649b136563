// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Color preview widget: the alpha, red, green, blue and hex text fields of a
//! picker wired to a shared [`ColorModel`].

use crate::base::{Debouncer, Error, Result, ValidationError};
use crate::colors::{ColorState, Hsv};
use crate::config::PickerConfig;
use crate::core::{ColorModel, ObserverId};
use crate::events::{Field, FieldUpdate, Target};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Text currently shown by each field, plus the color shown by the preview panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTexts {
    alpha: String,
    red: String,
    green: String,
    blue: String,
    hex: String,
    color: u32,
}

impl FieldTexts {
    fn from_state(state: ColorState) -> Self {
        let mut texts = Self::default();
        texts.fill(state);
        texts
    }

    fn fill(&mut self, state: ColorState) {
        self.alpha = state.alpha_percent().to_string();
        self.red = state.r.to_string();
        self.green = state.g.to_string();
        self.blue = state.b.to_string();
        self.hex = state.hex();
        self.color = state.packed();
    }

    /// Returns the text of one field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Alpha => &self.alpha,
            Field::Red => &self.red,
            Field::Green => &self.green,
            Field::Blue => &self.blue,
            Field::Hex => &self.hex,
        }
    }

    fn set(&mut self, field: Field, text: String) {
        match field {
            Field::Alpha => self.alpha = text,
            Field::Red => self.red = text,
            Field::Green => self.green = text,
            Field::Blue => self.blue = text,
            Field::Hex => self.hex = text,
        }
    }

    /// Returns the packed color shown by the preview panel.
    pub fn color(&self) -> u32 {
        self.color
    }
}

/// A picker's text fields and preview panel.
///
/// The widget registers its fields with the model in [`attach`](Self::attach)
/// and removes them in [`detach`](Self::detach). Hex field keystrokes are also
/// buffered by a debouncer; once the field has been quiet for the configured
/// period, a number left in it is applied as an alpha percentage.
///
/// The color change listener runs while the model is locked and must not call
/// back into the same widget.
#[derive(Debug)]
pub struct ColorPreview {
    model: Arc<Mutex<ColorModel>>,
    fields: Arc<Mutex<FieldTexts>>,
    focused: Option<Field>,
    subscriptions: Vec<ObserverId>,
    debouncer: Option<Debouncer<String>>,
    config: PickerConfig,
}

impl ColorPreview {
    /// Creates a detached widget from a configuration.
    pub fn new(config: PickerConfig) -> Result<Self> {
        let initial = config.initial_state()?;
        Ok(Self {
            model: Arc::new(Mutex::new(ColorModel::new(initial))),
            fields: Arc::new(Mutex::new(FieldTexts::from_state(initial))),
            focused: None,
            subscriptions: Vec::new(),
            debouncer: None,
            config,
        })
    }

    /// Creates a detached widget showing `color`, with default settings.
    pub fn with_color(color: ColorState) -> Self {
        Self {
            model: Arc::new(Mutex::new(ColorModel::new(color))),
            fields: Arc::new(Mutex::new(FieldTexts::from_state(color))),
            focused: None,
            subscriptions: Vec::new(),
            debouncer: None,
            config: PickerConfig::default(),
        }
    }

    /// Registers the field observers and starts the hex debouncer on the
    /// current tokio runtime. Does nothing if already attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] when called outside a tokio runtime.
    pub fn attach(&mut self) -> Result<()> {
        if self.is_attached() {
            return Ok(());
        }
        let handle = Handle::try_current().map_err(|e| Error::Runtime(e.to_string()))?;

        let mut model = self.model.lock();
        self.fields.lock().fill(model.state());
        for field in Field::ALL {
            let fields = Arc::clone(&self.fields);
            let id = model.subscribe(Target::Field(field), move |update| {
                if let Some(text) = update.display_text() {
                    fields.lock().set(field, text);
                }
            });
            self.subscriptions.push(id);
        }
        let fields = Arc::clone(&self.fields);
        let id = model.subscribe(Target::Color, move |update| {
            if let FieldUpdate::Color(packed) = update {
                fields.lock().color = *packed;
            }
        });
        self.subscriptions.push(id);
        drop(model);

        let model = Arc::clone(&self.model);
        self.debouncer = Some(Debouncer::spawn_on(
            &handle,
            self.config.debounce(),
            move |text: String| {
                if text.parse::<i64>().is_err() {
                    return;
                }
                if let Err(e) = model.lock().apply_alpha_percent(&text, Field::Hex) {
                    tracing::debug!(input = %text, error = %e, "debounced alpha rejected");
                }
            },
        ));

        tracing::debug!(observers = self.subscriptions.len(), "color preview attached");
        Ok(())
    }

    /// Removes the field observers and cancels any pending debounced input.
    pub fn detach(&mut self) {
        if let Some(debouncer) = self.debouncer.take() {
            debouncer.cancel();
        }
        let mut model = self.model.lock();
        for id in self.subscriptions.drain(..) {
            model.unsubscribe(id);
        }
        model.end_edit();
        tracing::debug!("color preview detached");
    }

    /// Returns `true` between [`attach`](Self::attach) and [`detach`](Self::detach).
    pub fn is_attached(&self) -> bool {
        self.debouncer.is_some()
    }

    /// Handles the full text of a field after the user changed it.
    ///
    /// The text stays in the field whether or not it is accepted.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the text does not describe a color;
    /// the color is then unchanged.
    pub fn on_text_changed(&mut self, field: Field, text: &str) -> std::result::Result<ColorState, ValidationError> {
        self.fields.lock().set(field, text.to_string());

        match field.channel() {
            Some(channel) => self.model.lock().edit_channel(channel, text),
            None => {
                let focused = self.focused == Some(Field::Hex);
                if let Some(debouncer) = self.debouncer.as_ref().filter(|_| focused) {
                    debouncer.push(text.to_string());
                }
                self.model.lock().edit_hex(text, focused)
            }
        }
    }

    /// Moves input focus. Leaving a field ends its edit; leaving the hex
    /// field also drops its debounced text.
    pub fn set_focus(&mut self, field: Option<Field>) {
        if self.focused.is_some() && self.focused != field {
            if self.focused == Some(Field::Hex) {
                self.reset_debounced_input();
            }
            self.model.lock().end_edit();
        }
        self.focused = field;
    }

    /// Returns the field with input focus.
    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    /// Replaces the whole color without calling the color change listener.
    ///
    /// Debounced hex text still waiting for its quiet period is dropped.
    pub fn set_full_color(&mut self, packed: u32) {
        self.reset_debounced_input();
        self.model.lock().set_full_color(packed);
    }

    fn reset_debounced_input(&self) {
        if let Some(debouncer) = &self.debouncer {
            debouncer.reset();
        }
    }

    /// Replaces the whole color from hue, saturation and value.
    pub fn set_hsv(&mut self, alpha: u8, hsv: Hsv) {
        self.set_full_color(hsv.to_color(alpha).packed());
    }

    /// Sets the listener called with the packed color after user edits.
    pub fn set_on_color_change<F>(&mut self, listener: F)
    where
        F: FnMut(u32) + Send + 'static,
    {
        self.model.lock().set_on_color_change(listener);
    }

    /// Returns the canonical color.
    pub fn color(&self) -> ColorState {
        self.model.lock().state()
    }

    /// Returns the text a field currently shows.
    pub fn field_text(&self, field: Field) -> String {
        self.fields.lock().get(field).to_string()
    }

    /// Returns a copy of all field texts.
    pub fn fields(&self) -> FieldTexts {
        self.fields.lock().clone()
    }

    /// Returns the widget's configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }
}
