// src/bin/conjugate.rs
// Prints the present subjunctive of a single verb from its yo/nosotros forms.
// Run with: cargo run --bin conjugate -- pedir pido pedimos
use anyhow::{bail, Result};
use crossterm::style::Stylize;
use strum::IntoEnumIterator;
use subjuntivo_core::config::DEFAULT_SOURCE_TENSE;
use subjuntivo_core::core::irregular::is_irregular;
use subjuntivo_core::{ConverterConfig, Persona, PersonaStyle, SubjunctiveEngine, VerbRecord};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (infinitive, yo, nosotros) = match args.as_slice() {
        [inf] => (inf.as_str(), None, None),
        [inf, yo] => (inf.as_str(), Some(yo.as_str()), None),
        [inf, yo, nos] => (inf.as_str(), Some(yo.as_str()), Some(nos.as_str())),
        _ => bail!("usage: conjugate <infinitive> [yo-form] [nosotros-form]"),
    };

    // One row per persona; only the yo and nosotros forms feed the stems.
    // Without a yo form a regular verb has no row to anchor on.
    let records: Vec<VerbRecord> = Persona::iter()
        .filter(|&persona| {
            persona != Persona::FirstSingular || yo.is_some() || is_irregular(infinitive)
        })
        .map(|persona| {
            let form = match persona {
                Persona::FirstSingular => yo.unwrap_or(""),
                Persona::FirstPlural => nosotros.unwrap_or(""),
                _ => "",
            };
            VerbRecord::present(infinitive, DEFAULT_SOURCE_TENSE, persona.label(), form)
        })
        .collect();

    let config = ConverterConfig {
        persona_style: PersonaStyle::Label,
        ..ConverterConfig::default()
    };
    let outcome = SubjunctiveEngine::new(config).convert(&records);
    if let Some(skip) = outcome.skipped.first() {
        bail!("{}: {}", skip.infinitive, skip.code);
    }

    println!("{}", format!("{infinitive} (present subjunctive)").bold());
    for record in &outcome.records {
        let persona = record.persona.as_deref().unwrap_or("");
        println!("  {:<18} {}", persona, record.form_text());
    }
    Ok(())
}
