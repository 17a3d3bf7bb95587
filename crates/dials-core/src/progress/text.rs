//! Progress label text

use core::fmt::Write;

use serde::{Deserialize, Serialize};

use super::model::ProgressModel;
use crate::styling::truncated;

/// Label capacity in bytes.
pub const LABEL_CAPACITY: usize = 32;

pub type LabelText = heapless::String<LABEL_CAPACITY>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    #[default]
    None,
    /// `"{value} / {maximum}"`
    ValueOverMaximum,
    /// `"{value / maximum * 100}%"`
    Percentage,
    /// Text set by the host.
    UserDefined,
}

/// Text mode plus the host-provided text it may show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    mode: TextMode,
    custom: LabelText,
}

impl Label {
    pub fn mode(&self) -> TextMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TextMode) {
        self.mode = mode;
    }

    /// Whether the rendered text changes with the value.
    pub fn tracks_value(&self) -> bool {
        matches!(self.mode, TextMode::ValueOverMaximum | TextMode::Percentage)
    }

    pub fn custom_text(&self) -> &str {
        &self.custom
    }

    /// Store host text. Blank text turns the label off; any other text
    /// switches to [`TextMode::UserDefined`].
    pub fn set_text(&mut self, text: &str) {
        self.custom = truncated(text);
        if text.trim().is_empty() {
            self.mode = TextMode::None;
        } else if self.mode != TextMode::UserDefined {
            self.mode = TextMode::UserDefined;
        }
    }

    /// Text to draw for `model`, if any.
    pub fn render(&self, model: &ProgressModel) -> Option<LabelText> {
        let mut text = LabelText::new();
        match self.mode {
            TextMode::None => return None,
            TextMode::ValueOverMaximum => {
                let written = write!(text, "{} / {}", model.value(), model.maximum());
                debug_assert!(written.is_ok(), "two i32 and a separator fit the label");
            }
            TextMode::Percentage => {
                let written = write!(text, "{}%", model.percentage());
                debug_assert!(written.is_ok(), "a percentage fits the label");
            }
            TextMode::UserDefined => {
                if self.custom.trim().is_empty() {
                    return None;
                }
                text = self.custom.clone();
            }
        }
        Some(text)
    }
}
