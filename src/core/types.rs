// src/core/types.rs
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use strum::EnumIter;

/// One of the six grammatical subjects a conjugated form is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Persona {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Persona {
    /// Short canonical token, e.g. "1sg".
    pub fn token(self) -> &'static str {
        match self {
            Persona::FirstSingular => "1sg",
            Persona::SecondSingular => "2sg",
            Persona::ThirdSingular => "3sg",
            Persona::FirstPlural => "1pl",
            Persona::SecondPlural => "2pl",
            Persona::ThirdPlural => "3pl",
        }
    }

    /// Spanish canonical label, e.g. "él/ella/Ud.".
    pub fn label(self) -> &'static str {
        match self {
            Persona::FirstSingular => "yo",
            Persona::SecondSingular => "tú",
            Persona::ThirdSingular => "él/ella/Ud.",
            Persona::FirstPlural => "nosotros",
            Persona::SecondPlural => "vosotros",
            Persona::ThirdPlural => "ellos/ellas/Uds.",
        }
    }

    /// Position in the fixed six-slot tables (endings, irregular forms).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The "boot" persons share the stem of the first-person singular.
    pub fn is_boot(self) -> bool {
        !matches!(self, Persona::FirstPlural | Persona::SecondPlural)
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.token().fmt(f)
    }
}

/// Conjugation class, read off the infinitive ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    Ar,
    Er,
    Ir,
}

impl VerbClass {
    pub fn suffix(self) -> &'static str {
        match self {
            VerbClass::Ar => "ar",
            VerbClass::Er => "er",
            VerbClass::Ir => "ir",
        }
    }

    /// Present-indicative first-person plural ending for this class.
    pub fn present_plural_suffix(self) -> &'static str {
        match self {
            VerbClass::Ar => "amos",
            VerbClass::Er => "emos",
            VerbClass::Ir => "imos",
        }
    }
}

/// The two working stems of one verb.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StemPair {
    /// From the 1sg present form ("pienso" -> "piens").
    pub boot: String,
    /// From the 1pl present form ("pensamos" -> "pens"), when one was attested.
    pub base: Option<String>,
}

/// Why a whole verb group produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipCode {
    UnknownVerbClass,
    MissingFirstPersonSingular,
}

impl fmt::Display for SkipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipCode::UnknownVerbClass => "unknown verb class",
            SkipCode::MissingFirstPersonSingular => "missing first-person-singular row",
        };
        reason.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipReason {
    pub infinitive: String,
    pub code: SkipCode,
}

/// A single conjugated-form record as it appears in the vocabulary files.
/// Keys other than the six known ones ride along in `extra` untouched, and
/// `infinitivo`/`sujeto` keep their raw JSON value since they are never rewritten.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VerbRecord {
    #[serde(
        rename = "infinitivo",
        default,
        deserialize_with = "raw_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub infinitive: Option<Value>,
    #[serde(
        rename = "tiempo",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub tense: Option<String>,
    #[serde(
        rename = "sujeto",
        default,
        deserialize_with = "raw_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub subject: Option<Value>,
    #[serde(
        rename = "persona_base",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub persona: Option<String>,
    #[serde(
        rename = "forma",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub form: Option<String>,
    #[serde(
        rename = "traducción",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub translation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VerbRecord {
    /// Convenience constructor used by the harness binary and tests.
    pub fn present(infinitive: &str, tense: &str, persona: &str, form: &str) -> Self {
        Self {
            infinitive: Some(Value::from(infinitive)),
            tense: Some(tense.to_string()),
            persona: Some(persona.to_string()),
            form: Some(form.to_string()),
            ..Self::default()
        }
    }

    pub fn infinitive_text(&self) -> Option<Cow<'_, str>> {
        scalar_text(self.infinitive.as_ref())
    }

    pub fn subject_text(&self) -> Option<Cow<'_, str>> {
        scalar_text(self.subject.as_ref())
    }

    /// The label used for persona normalization: `persona_base`, else `sujeto`.
    pub fn persona_label(&self) -> Cow<'_, str> {
        match self.persona.as_deref() {
            Some(p) if !p.trim().is_empty() => Cow::Borrowed(p),
            _ => self.subject_text().unwrap_or_default(),
        }
    }

    pub fn form_text(&self) -> &str {
        self.form.as_deref().unwrap_or("")
    }
}

/// Text view of a kept-as-is field: strings as-is, other scalars as their
/// JSON text, null as absent.
fn scalar_text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s)),
        other => Some(Cow::Owned(other.to_string())),
    }
}

/// Keeps a present field verbatim, `null` included.
fn raw_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Reads strings as-is, other scalars as their JSON text, and null as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn persona_indices_follow_table_order() {
        assert_eq!(0, Persona::FirstSingular.index());
        assert_eq!(5, Persona::ThirdPlural.index());
    }

    #[test]
    fn only_plural_first_and_second_are_outside_the_boot() {
        assert!(Persona::ThirdPlural.is_boot());
        assert!(!Persona::FirstPlural.is_boot());
        assert!(!Persona::SecondPlural.is_boot());
    }

    #[test]
    fn unknown_keys_are_kept() {
        let record: VerbRecord = serde_json::from_value(json!({
            "infinitivo": "hablar",
            "forma": "hablo",
            "nivel": 3,
        }))
        .unwrap();
        assert_eq!(Some(json!(3)), record.extra.get("nivel").cloned());

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(json!("hablar"), back["infinitivo"]);
        assert_eq!(json!(3), back["nivel"]);
    }

    #[test]
    fn non_string_scalars_are_read_as_text() {
        let record: VerbRecord = serde_json::from_value(json!({
            "traducción": 42,
            "sujeto": 7,
        }))
        .unwrap();
        assert_eq!(Some("42".to_string()), record.translation);
        assert_eq!(Some("7"), record.subject_text().as_deref());
    }

    #[test]
    fn untouched_fields_round_trip_verbatim() {
        let null_subject = json!({ "infinitivo": "hablar", "sujeto": null, "forma": "hablo" });
        let number_subject = json!({ "infinitivo": 12, "sujeto": 7, "forma": "hablo" });

        for input in [null_subject, number_subject] {
            let record: VerbRecord = serde_json::from_value(input.clone()).unwrap();
            let back = serde_json::to_value(&record).unwrap();
            assert_eq!(input["sujeto"], back["sujeto"]);
            assert_eq!(input["infinitivo"], back["infinitivo"]);
            assert!(back.as_object().unwrap().contains_key("sujeto"));
        }
    }

    #[test]
    fn null_subject_has_no_text() {
        let record: VerbRecord = serde_json::from_value(json!({ "sujeto": null })).unwrap();
        assert_eq!(Some(Value::Null), record.subject);
        assert_eq!(None, record.subject_text());
    }

    #[test]
    fn persona_label_falls_back_to_subject() {
        let mut record = VerbRecord::present("hablar", "presente", "  ", "hablo");
        record.subject = Some(json!("yo"));
        assert_eq!("yo", record.persona_label());
    }
}
