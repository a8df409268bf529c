// src/core/classifier.rs
use crate::core::types::VerbClass;

/// Reads the conjugation class off the infinitive ending.
pub fn classify(infinitive: &str) -> Option<VerbClass> {
    let inf = infinitive.trim().to_lowercase();
    [VerbClass::Ar, VerbClass::Er, VerbClass::Ir]
        .into_iter()
        .find(|class| inf.ends_with(class.suffix()))
}
