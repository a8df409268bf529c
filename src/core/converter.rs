// src/core/converter.rs
use crate::core::irregular::irregular_form;
use crate::core::types::{Persona, StemPair, VerbClass};

// Present-subjunctive endings in persona order (1sg, 2sg, 3sg, 1pl, 2pl, 3pl).
const ENDINGS_AR: [&str; 6] = ["e", "es", "e", "emos", "éis", "en"];
const ENDINGS_ER_IR: [&str; 6] = ["a", "as", "a", "amos", "áis", "an"];

/// Vowel weakening carried into the 1pl/2pl stem of -ir boot changers
/// (dormir -> durmamos, sentir -> sintamos, pedir -> pidamos).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelShift {
    OToU,
    EToI,
}

impl VowelShift {
    pub fn apply(self, stem: &str) -> String {
        match self {
            VowelShift::OToU => replace_last(stem, 'o', 'u'),
            VowelShift::EToI => replace_last(stem, 'e', 'i'),
        }
    }
}

/// Guesses the shift from what the boot stem did to the base stem's vowel.
pub fn detect_vowel_shift(base: &str, boot: &str) -> Option<VowelShift> {
    if base.contains('o') && boot.contains("ue") {
        Some(VowelShift::OToU)
    } else if base.contains('e') && boot.contains("ie") {
        Some(VowelShift::EToI)
    } else if base.contains('e') && boot.contains('i') {
        // pedir: pido
        Some(VowelShift::EToI)
    } else {
        None
    }
}

pub fn ending(class: VerbClass, persona: Persona) -> &'static str {
    let endings = match class {
        VerbClass::Ar => &ENDINGS_AR,
        VerbClass::Er | VerbClass::Ir => &ENDINGS_ER_IR,
    };
    endings[persona.index()]
}

/// Keeps the consonant sound of -car/-gar/-zar stems before a front vowel
/// (busc + e -> busque, lleg + e -> llegue, empiez + e -> empiece).
pub fn apply_spelling_change(infinitive: &str, stem: &str, next_vowel: Option<char>) -> String {
    if !matches!(next_vowel, Some('e' | 'é')) {
        return stem.to_string();
    }
    let inf = infinitive.trim().to_lowercase();
    let rules = [("car", 'c', "qu"), ("gar", 'g', "gu"), ("zar", 'z', "c")];
    for (verb_ending, last, replacement) in rules {
        if inf.ends_with(verb_ending) {
            if let Some(rest) = stem.strip_suffix(last) {
                return format!("{rest}{replacement}");
            }
        }
    }
    stem.to_string()
}

/// Builds the present-subjunctive form of one persona.
///
/// Irregular verbs answer straight from the table. Otherwise the boot persons
/// use the boot stem, 1pl/2pl use the base stem (with the vowel shift on -ir
/// verbs), and the spelling change runs before the ending is attached.
pub fn build_form(
    infinitive: &str,
    class: VerbClass,
    persona: Persona,
    stems: &StemPair,
) -> String {
    if let Some(form) = irregular_form(infinitive, persona) {
        return form.to_string();
    }

    let suffix = ending(class, persona);
    let stem = select_stem(infinitive, class, persona, stems);
    let stem = apply_spelling_change(infinitive, &stem, suffix.chars().next());

    stem + suffix
}

fn select_stem(infinitive: &str, class: VerbClass, persona: Persona, stems: &StemPair) -> String {
    if persona.is_boot() {
        return stems.boot.clone();
    }
    match class {
        VerbClass::Ar | VerbClass::Er => stems.base.clone().unwrap_or_else(|| stems.boot.clone()),
        VerbClass::Ir => {
            let base = stems
                .base
                .clone()
                .or_else(|| strip_last_two(infinitive.trim()))
                .unwrap_or_else(|| stems.boot.clone());
            match detect_vowel_shift(&base, &stems.boot) {
                Some(shift) => shift.apply(&base),
                None => base,
            }
        }
    }
}

/// The infinitive without its last two characters, when anything is left.
fn strip_last_two(infinitive: &str) -> Option<String> {
    let chars: Vec<char> = infinitive.chars().collect();
    (chars.len() > 2).then(|| chars[..chars.len() - 2].iter().collect())
}

fn replace_last(s: &str, from: char, to: char) -> String {
    match s.rfind(from) {
        Some(i) => format!("{}{}{}", &s[..i], to, &s[i + from.len_utf8()..]),
        None => s.to_string(),
    }
}
