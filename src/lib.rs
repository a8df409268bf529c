// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod report;
pub use crate::config::{ConverterConfig, PersonaStyle};
pub use crate::core::engine::{ConversionOutcome, ConversionSummary, SubjunctiveEngine};
pub use crate::core::types::{Persona, SkipCode, SkipReason, VerbClass, VerbRecord};
pub use crate::error::SubjunctiveError;
