// src/core/irregular.rs
use crate::core::types::Persona;

/// Present-subjunctive forms of one fully irregular verb, in persona order
/// (1sg, 2sg, 3sg, 1pl, 2pl, 3pl). The array type makes a short entry a
/// compile error.
pub struct IrregularEntry {
    pub infinitive: &'static str,
    forms: [&'static str; 6],
}

impl IrregularEntry {
    pub fn form(&self, persona: Persona) -> &'static str {
        self.forms[persona.index()]
    }
}

pub static IRREGULAR_VERBS: [IrregularEntry; 6] = [
    IrregularEntry {
        infinitive: "ser",
        forms: ["sea", "seas", "sea", "seamos", "seáis", "sean"],
    },
    IrregularEntry {
        infinitive: "ir",
        forms: ["vaya", "vayas", "vaya", "vayamos", "vayáis", "vayan"],
    },
    IrregularEntry {
        infinitive: "dar",
        forms: ["dé", "des", "dé", "demos", "deis", "den"],
    },
    IrregularEntry {
        infinitive: "estar",
        forms: ["esté", "estés", "esté", "estemos", "estéis", "estén"],
    },
    IrregularEntry {
        infinitive: "saber",
        forms: ["sepa", "sepas", "sepa", "sepamos", "sepáis", "sepan"],
    },
    IrregularEntry {
        infinitive: "haber",
        forms: ["haya", "hayas", "haya", "hayamos", "hayáis", "hayan"],
    },
];

/// Finds the table entry for an infinitive, ignoring case and surrounding spaces.
pub fn irregular_entry(infinitive: &str) -> Option<&'static IrregularEntry> {
    let key = infinitive.trim().to_lowercase();
    IRREGULAR_VERBS.iter().find(|entry| entry.infinitive == key)
}

pub fn is_irregular(infinitive: &str) -> bool {
    irregular_entry(infinitive).is_some()
}

pub fn irregular_form(infinitive: &str, persona: Persona) -> Option<&'static str> {
    irregular_entry(infinitive).map(|entry| entry.form(persona))
}
