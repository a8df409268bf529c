// src/core/engine.rs
use crate::config::ConverterConfig;
use crate::core::classifier::classify;
use crate::core::converter::build_form;
use crate::core::irregular::is_irregular;
use crate::core::persona::normalize_persona;
use crate::core::stems::derive_stems;
use crate::core::types::{Persona, SkipCode, SkipReason, VerbRecord};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Counts for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Records carrying the source tense label.
    pub source_records: usize,
    pub converted: usize,
    /// Records whose persona label has no canonical mapping.
    pub dropped_persona: usize,
    pub missing_infinitive: usize,
    pub skipped_verbs: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ConversionOutcome {
    pub records: Vec<VerbRecord>,
    pub skipped: Vec<SkipReason>,
    pub summary: ConversionSummary,
}

/// Present-indicative records of one infinitive, in input order.
struct VerbGroup<'a> {
    infinitive: String,
    rows: Vec<&'a VerbRecord>,
}

/// Turns present-indicative records into present-subjunctive ones.
pub struct SubjunctiveEngine {
    config: ConverterConfig,
}

impl Default for SubjunctiveEngine {
    fn default() -> Self {
        Self::new(ConverterConfig::default())
    }
}

impl SubjunctiveEngine {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn convert(&self, records: &[VerbRecord]) -> ConversionOutcome {
        let mut outcome = ConversionOutcome::default();

        // 1. Keep the source tense and group it by infinitive, first-seen order
        let source: Vec<&VerbRecord> = records
            .iter()
            .filter(|r| r.tense.as_deref() == Some(self.config.source_tense.as_str()))
            .collect();
        outcome.summary.source_records = source.len();

        let groups = self.group_by_infinitive(&source, &mut outcome.summary);

        // 2. Convert each verb on its own; a failure never touches the others
        for group in groups {
            match self.convert_group(&group, &mut outcome) {
                Ok(()) => {}
                Err(code) => {
                    warn!("Skipping '{}': {}", group.infinitive, code);
                    outcome.skipped.push(SkipReason {
                        infinitive: group.infinitive.clone(),
                        code,
                    });
                }
            }
        }
        outcome.summary.skipped_verbs = outcome.skipped.len();

        info!(
            "Converted {} of {} source records ({} verbs skipped, {} rows with unknown persona)",
            outcome.summary.converted,
            outcome.summary.source_records,
            outcome.summary.skipped_verbs,
            outcome.summary.dropped_persona,
        );
        outcome
    }

    fn group_by_infinitive<'a>(
        &self,
        source: &[&'a VerbRecord],
        summary: &mut ConversionSummary,
    ) -> Vec<VerbGroup<'a>> {
        let mut groups: Vec<VerbGroup<'a>> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for &record in source {
            let infinitive = match record.infinitive_text() {
                Some(inf) if !inf.trim().is_empty() => inf.into_owned(),
                _ => {
                    warn!("Dropping a record with no infinitive (form {:?})", record.form);
                    summary.missing_infinitive += 1;
                    continue;
                }
            };
            let slot = *index.entry(infinitive.clone()).or_insert_with(|| {
                groups.push(VerbGroup {
                    infinitive,
                    rows: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].rows.push(record);
        }
        groups
    }

    /// Converts every row of one verb, or reports why the verb can't be done.
    fn convert_group(
        &self,
        group: &VerbGroup<'_>,
        outcome: &mut ConversionOutcome,
    ) -> Result<(), SkipCode> {
        let class = classify(&group.infinitive).ok_or(SkipCode::UnknownVerbClass)?;

        // The first row of each persona anchors the stems
        let mut anchors: HashMap<Persona, &VerbRecord> = HashMap::new();
        for &row in &group.rows {
            if let Some(persona) = normalize_persona(&row.persona_label()) {
                anchors.entry(persona).or_insert(row);
            }
        }

        if !anchors.contains_key(&Persona::FirstSingular) && !is_irregular(&group.infinitive) {
            return Err(SkipCode::MissingFirstPersonSingular);
        }

        let stems = derive_stems(&anchors, class);
        debug!(
            "{}: class -{}, boot stem {:?}, base stem {:?}",
            group.infinitive,
            class.suffix(),
            stems.boot,
            stems.base
        );

        // Every row is converted, subject-label duplicates included
        for &row in &group.rows {
            let Some(persona) = normalize_persona(&row.persona_label()) else {
                debug!(
                    "{}: no persona for label {:?}, dropping row",
                    group.infinitive,
                    row.persona_label()
                );
                outcome.summary.dropped_persona += 1;
                continue;
            };

            let mut converted = row.clone();
            converted.persona = Some(self.config.persona_style.render(persona).to_string());
            converted.tense = Some(self.config.target_tense.clone());
            converted.form = Some(build_form(&group.infinitive, class, persona, &stems));
            converted.translation =
                Some(self.config.mark_translation(row.translation.as_deref()));

            outcome.records.push(converted);
            outcome.summary.converted += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SOURCE_TENSE;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn row(infinitive: &str, persona: &str, form: &str) -> VerbRecord {
        VerbRecord::present(infinitive, DEFAULT_SOURCE_TENSE, persona, form)
    }

    #[test]
    fn hablar_yo_becomes_hable() {
        let outcome = SubjunctiveEngine::default().convert(&[row("hablar", "yo", "hablo")]);

        assert_eq!(1, outcome.records.len());
        let record = &outcome.records[0];
        assert_eq!(Some("1sg"), record.persona.as_deref());
        assert_eq!(Some("hable"), record.form.as_deref());
        assert_eq!(Some("present subjunctive"), record.tense.as_deref());
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn pedir_plural_gets_the_shift() {
        let outcome = SubjunctiveEngine::default().convert(&[
            row("pedir", "yo", "pido"),
            row("pedir", "nosotros", "pedimos"),
            row("pedir", "ellos", "piden"),
        ]);
        let forms: Vec<_> = outcome.records.iter().filter_map(|r| r.form.as_deref()).collect();
        assert_eq!(vec!["pida", "pidamos", "pidan"], forms);
    }

    #[test]
    fn unclassifiable_verb_is_reported_once() {
        let outcome = SubjunctiveEngine::default().convert(&[
            row("xyz", "yo", "xyzo"),
            row("xyz", "tú", "xyzas"),
        ]);
        assert!(outcome.records.is_empty());
        assert_eq!(
            vec![SkipReason {
                infinitive: "xyz".to_string(),
                code: SkipCode::UnknownVerbClass,
            }],
            outcome.skipped
        );
    }

    #[test]
    fn missing_yo_row_skips_the_verb() {
        let outcome = SubjunctiveEngine::default().convert(&[row("comer", "tú", "comes")]);
        assert!(outcome.records.is_empty());
        assert_eq!(SkipCode::MissingFirstPersonSingular, outcome.skipped[0].code);
    }

    #[test]
    fn irregular_verb_needs_no_yo_row() {
        let outcome = SubjunctiveEngine::default().convert(&[row("ser", "ellos", "son")]);
        assert!(outcome.skipped.is_empty());
        assert_eq!(Some("sean"), outcome.records[0].form.as_deref());
    }

    #[test]
    fn unknown_persona_is_dropped_without_a_skip_entry() {
        let outcome = SubjunctiveEngine::default().convert(&[
            row("hablar", "yo", "hablo"),
            row("hablar", "vos", "hablás"),
        ]);
        assert_eq!(1, outcome.records.len());
        assert!(outcome.skipped.is_empty());
        assert_eq!(1, outcome.summary.dropped_persona);
    }

    #[test]
    fn other_tenses_are_ignored_entirely() {
        let mut past = row("xyz", "yo", "xyzé");
        past.tense = Some("pretérito".to_string());
        let outcome = SubjunctiveEngine::default().convert(&[past]);
        assert!(outcome.records.is_empty());
        assert!(outcome.skipped.is_empty());
        assert_eq!(0, outcome.summary.source_records);
    }

    #[test]
    fn records_without_infinitive_are_counted() {
        let mut orphan = row("", "yo", "hablo");
        orphan.infinitive = None;
        let outcome = SubjunctiveEngine::default().convert(&[orphan]);
        assert!(outcome.records.is_empty());
        assert_eq!(1, outcome.summary.missing_infinitive);
    }

    const VERBS: [&str; 6] = ["hablar", "pedir", "dormir", "comer", "ser", "xyz"];
    const LABELS: [&str; 8] = ["yo", "tú", "Ud.", "nosotros", "vosotros", "ellos", "vos", ""];

    fn record_set() -> impl Strategy<Value = Vec<VerbRecord>> {
        prop::collection::vec((0..VERBS.len(), 0..LABELS.len(), "[a-z]{1,8}"), 0..40).prop_map(
            |rows| {
                rows.into_iter()
                    .map(|(verb, label, form)| row(VERBS[verb], LABELS[label], &form))
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn same_input_same_output(records in record_set()) {
            let engine = SubjunctiveEngine::default();
            let first = engine.convert(&records);
            let second = engine.convert(&records);

            prop_assert_eq!(
                serde_json::to_string(&first.records).unwrap(),
                serde_json::to_string(&second.records).unwrap()
            );
            prop_assert_eq!(first.skipped, second.skipped);
            prop_assert_eq!(first.summary, second.summary);
        }

        #[test]
        fn personas_out_are_the_normalizable_personas_in(records in record_set()) {
            let outcome = SubjunctiveEngine::default().convert(&records);
            prop_assert!(outcome.records.len() <= records.len());

            for verb in VERBS {
                let of_verb = |r: &&VerbRecord| r.infinitive_text().as_deref() == Some(verb);
                let input: BTreeSet<&str> = records
                    .iter()
                    .filter(of_verb)
                    .filter_map(|r| normalize_persona(&r.persona_label()))
                    .map(Persona::token)
                    .collect();
                let output: BTreeSet<&str> = outcome
                    .records
                    .iter()
                    .filter(of_verb)
                    .filter_map(|r| r.persona.as_deref())
                    .collect();
                let skips = outcome.skipped.iter().filter(|s| s.infinitive == verb).count();

                if skips == 1 {
                    prop_assert!(output.is_empty());
                } else {
                    prop_assert_eq!(0, skips);
                    prop_assert_eq!(input, output);
                }
            }
        }
    }
}
