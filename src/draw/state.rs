use serde::{Deserialize, Serialize};

use crate::models::{Category, QuoteRecord};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DrawPhase {
    Idle,
    Drawing,
    Result,
}

impl Default for DrawPhase {
    fn default() -> Self {
        DrawPhase::Idle
    }
}

/// Snapshot of the draw engine, mirrored to the shell. `current_text`
/// holds the cosmetic shuffle candidate while drawing and the committed
/// text once settled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawState {
    pub phase: DrawPhase,
    pub category: Option<Category>,
    pub current_text: Option<String>,
    pub committed: Option<QuoteRecord>,
}

impl DrawState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, category: Category) {
        *self = Self {
            phase: DrawPhase::Drawing,
            category: Some(category),
            current_text: None,
            committed: None,
        };
    }

    pub fn shuffle(&mut self, text: &str) {
        self.current_text = Some(text.to_string());
    }

    pub fn settle(&mut self, record: QuoteRecord) {
        self.phase = DrawPhase::Result;
        self.current_text = Some(record.text.clone());
        self.committed = Some(record);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
