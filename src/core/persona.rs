// src/core/persona.rs
use crate::core::types::Persona;

/// Free-text subject labels seen in the vocabulary files, lowercased.
const ALIASES: &[(&str, Persona)] = &[
    ("yo", Persona::FirstSingular),
    ("1sg", Persona::FirstSingular),
    ("tú", Persona::SecondSingular),
    ("tu", Persona::SecondSingular),
    ("2sg", Persona::SecondSingular),
    ("él", Persona::ThirdSingular),
    ("el", Persona::ThirdSingular),
    ("ella", Persona::ThirdSingular),
    ("usted", Persona::ThirdSingular),
    ("ud", Persona::ThirdSingular),
    ("ud.", Persona::ThirdSingular),
    ("él/ella", Persona::ThirdSingular),
    ("él/ella/ud", Persona::ThirdSingular),
    ("él/ella/ud.", Persona::ThirdSingular),
    ("él/ella/usted", Persona::ThirdSingular),
    ("3sg", Persona::ThirdSingular),
    ("nosotros", Persona::FirstPlural),
    ("nosotras", Persona::FirstPlural),
    ("nosotros/nosotras", Persona::FirstPlural),
    ("1pl", Persona::FirstPlural),
    ("vosotros", Persona::SecondPlural),
    ("vosotras", Persona::SecondPlural),
    ("vosotros/vosotras", Persona::SecondPlural),
    ("2pl", Persona::SecondPlural),
    ("ellos", Persona::ThirdPlural),
    ("ellas", Persona::ThirdPlural),
    ("ustedes", Persona::ThirdPlural),
    ("uds", Persona::ThirdPlural),
    ("uds.", Persona::ThirdPlural),
    ("ellos/ellas", Persona::ThirdPlural),
    ("ellos/ellas/uds", Persona::ThirdPlural),
    ("ellos/ellas/uds.", Persona::ThirdPlural),
    ("ellos/ellas/ustedes", Persona::ThirdPlural),
    ("3pl", Persona::ThirdPlural),
];

/// Maps a subject label such as "Ud." or " ellos " to its canonical persona.
/// Returns `None` when the label is not a known alias.
pub fn normalize_persona(label: &str) -> Option<Persona> {
    let key = label.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|&(_, persona)| persona)
}
