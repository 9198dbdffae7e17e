//! Typed encoding of stored values
//!
//! Enums are stored as their bare lowercase word, booleans as
//! `"true"`/`"false"` and structured values as JSON.

use std::collections::BTreeMap;

use gitguide_core::prelude::*;
use gitguide_core::{AnimationComplexity, AnimationSpeed, ThemeMode};

/// A value that can live in the preference store
pub trait StoredValue: Sized {
    fn encode(&self) -> String;
    fn decode(raw: &str) -> Result<Self>;
}

impl StoredValue for AnimationSpeed {
    fn encode(&self) -> String {
        self.as_str().to_string()
    }

    fn decode(raw: &str) -> Result<Self> {
        raw.parse()
    }
}

impl StoredValue for AnimationComplexity {
    fn encode(&self) -> String {
        self.as_str().to_string()
    }

    fn decode(raw: &str) -> Result<Self> {
        raw.parse()
    }
}

impl StoredValue for ThemeMode {
    fn encode(&self) -> String {
        self.as_str().to_string()
    }

    fn decode(raw: &str) -> Result<Self> {
        raw.parse()
    }
}

impl StoredValue for bool {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str::<bool>(raw.trim())?)
    }
}

/// Completion flags keyed `"<sectionId>-<index>"`
impl StoredValue for BTreeMap<String, bool> {
    fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn decode(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
