// src/config.rs
use crate::core::types::Persona;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_TENSE: &str = "present indicative";
pub const DEFAULT_TARGET_TENSE: &str = "present subjunctive";
pub const DEFAULT_TRANSLATION_PREFIX: &str = "SUBJUNCTIVE CONTEXT: ";

/// How the normalized persona is written back into `persona_base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaStyle {
    /// "1sg", "2sg", ...
    #[default]
    Token,
    /// "yo", "tú", "él/ella/Ud.", ...
    Label,
}

impl PersonaStyle {
    pub fn render(self, persona: Persona) -> &'static str {
        match self {
            PersonaStyle::Token => persona.token(),
            PersonaStyle::Label => persona.label(),
        }
    }
}

/// Labels and markers used by one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Only records whose tense label equals this take part.
    pub source_tense: String,
    pub target_tense: String,
    pub translation_prefix: String,
    pub persona_style: PersonaStyle,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_tense: DEFAULT_SOURCE_TENSE.to_string(),
            target_tense: DEFAULT_TARGET_TENSE.to_string(),
            translation_prefix: DEFAULT_TRANSLATION_PREFIX.to_string(),
            persona_style: PersonaStyle::default(),
        }
    }
}

impl ConverterConfig {
    /// Prefixes a translation with the subjunctive marker. An empty
    /// translation becomes the bare marker.
    pub fn mark_translation(&self, translation: Option<&str>) -> String {
        let old = translation.unwrap_or("").trim();
        if old.is_empty() {
            self.translation_prefix.trim_end().to_string()
        } else {
            format!("{}{}", self.translation_prefix, old)
        }
    }
}
