// src/core/stems.rs
use crate::core::types::{Persona, StemPair, VerbClass, VerbRecord};
use std::collections::HashMap;

/// Stem of the boot persons: the 1sg present form without its final "o".
/// Malformed forms ("sé", "voy") come back unchanged.
pub fn boot_stem(first_singular_form: &str) -> String {
    let form = first_singular_form.trim();
    match form.strip_suffix('o') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => form.to_string(),
    }
}

/// Stem of the non-boot plural persons: the 1pl present form without its
/// class ending. An empty result counts as no stem.
pub fn base_stem(first_plural_form: &str, class: VerbClass) -> Option<String> {
    let form = first_plural_form.trim();
    let stem = form
        .strip_suffix(class.present_plural_suffix())
        .unwrap_or(form);
    (!stem.is_empty()).then(|| stem.to_string())
}

/// Derives both stems from the present rows of one verb, keyed by persona.
/// The boot stem is empty when the verb has no 1sg row.
pub fn derive_stems(rows: &HashMap<Persona, &VerbRecord>, class: VerbClass) -> StemPair {
    StemPair {
        boot: rows
            .get(&Persona::FirstSingular)
            .map(|row| boot_stem(row.form_text()))
            .unwrap_or_default(),
        base: rows
            .get(&Persona::FirstPlural)
            .and_then(|row| base_stem(row.form_text(), class)),
    }
}
