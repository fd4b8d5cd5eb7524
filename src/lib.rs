// src/lib.rs

pub mod core;
pub mod error;
pub mod persistence;

pub use crate::core::engine::{sample_translate, translate_text, ConverseEngine, TranslationInput};
pub use crate::core::group::{DirectionalMapping, GroupConfig, TranslationGroup};
pub use crate::core::translator::Translator;
pub use crate::core::types::{Direction, Pair, Tier};
pub use crate::error::{ConverseError, Result};
