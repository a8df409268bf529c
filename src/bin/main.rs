// src/bin/main.rs
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use log::debug;
use std::path::PathBuf;
use subjuntivo_core::persistence::{load_config, load_records, save_records};
use subjuntivo_core::report::{skip_header, skip_lines, summary_line};
use subjuntivo_core::{ConverterConfig, PersonaStyle, SubjunctiveEngine};

#[derive(Parser)]
#[command(name = "subjunctive_converter")]
#[command(version)]
#[command(about = "Derive present-subjunctive verb records from present-indicative ones", long_about = None)]
struct Cli {
    /// JSON array of present-indicative records
    input: PathBuf,
    /// Where to write the present-subjunctive records
    output: PathBuf,
    /// JSON file with converter settings; flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Tense label of the records to convert
    #[arg(long)]
    source_tense: Option<String>,
    /// Tense label written on converted records
    #[arg(long)]
    target_tense: Option<String>,
    /// Marker put in front of each translation
    #[arg(long)]
    translation_prefix: Option<String>,
    /// How the normalized persona is written
    #[arg(long, value_enum)]
    persona_style: Option<StyleArg>,
    /// Number of skipped verbs listed in the report
    #[arg(long, default_value_t = 20)]
    max_skips_shown: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Token,
    Label,
}

impl From<StyleArg> for PersonaStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Token => PersonaStyle::Token,
            StyleArg::Label => PersonaStyle::Label,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    debug!("Using {config:?}");

    let records = load_records(&cli.input)
        .with_context(|| format!("failed to read records from {}", cli.input.display()))?;

    let outcome = SubjunctiveEngine::new(config).convert(&records);

    save_records(&outcome.records, &cli.output)
        .with_context(|| format!("failed to write records to {}", cli.output.display()))?;

    let output = cli.output.display().to_string();
    println!("{}", summary_line(&outcome.summary, &output).green());
    if let Some(header) = skip_header(&outcome.skipped, cli.max_skips_shown) {
        println!("{}", header.yellow());
        for line in skip_lines(&outcome.skipped, cli.max_skips_shown) {
            println!(" - {line}");
        }
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<ConverterConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ConverterConfig::default(),
    };
    if let Some(tense) = &cli.source_tense {
        config.source_tense = tense.clone();
    }
    if let Some(tense) = &cli.target_tense {
        config.target_tense = tense.clone();
    }
    if let Some(prefix) = &cli.translation_prefix {
        config.translation_prefix = prefix.clone();
    }
    if let Some(style) = cli.persona_style {
        config.persona_style = style.into();
    }
    Ok(config)
}
