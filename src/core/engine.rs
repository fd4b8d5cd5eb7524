use crate::core::group::{GroupConfig, TranslationGroup};
use crate::core::translator::Translator;
use crate::core::types::Direction;
use crate::error::{ConverseError, Result};
use crate::persistence::{load_group_json, parse_group_json, read_input, save_output};
use std::path::{Path, PathBuf};
use tracing::info;

/// The bundled example dialect, an English "accent".
pub const SAMPLE_DATA: &str = include_str!("../../data/sample.json");

/// Where the text to translate comes from.
#[derive(Debug, Clone, Default)]
pub struct TranslationInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

impl TranslationInput {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), file: None }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self { text: None, file: Some(path.into()) }
    }

    /// Exactly one input method must be set.
    pub fn resolve(self) -> Result<String> {
        match (self.text, self.file) {
            (Some(_), Some(_)) => Err(ConverseError::InputConflict),
            (None, None) => Err(ConverseError::MissingInput),
            (Some(text), None) => Ok(text),
            (None, Some(path)) => read_input(&path),
        }
    }
}

// The engine owns one translator plus the workflow around it.
pub struct ConverseEngine {
    translator: Translator,
    source: Option<PathBuf>,
}

impl ConverseEngine {
    pub fn new(group: TranslationGroup, direction: Direction) -> Self {
        Self { translator: Translator::new(group, direction), source: None }
    }

    pub fn from_file(path: impl AsRef<Path>, direction: Direction) -> Result<Self> {
        let path = path.as_ref();
        let group = load_group_json(path)?;
        let mut engine = Self::new(group, direction);
        engine.source = Some(path.to_path_buf());
        Ok(engine)
    }

    pub fn from_config(config: GroupConfig, direction: Direction) -> Result<Self> {
        let source = config.sources.last().cloned();
        let mut engine = Self::new(TranslationGroup::from_config(config)?, direction);
        engine.source = source;
        Ok(engine)
    }

    pub fn sample(direction: Direction) -> Result<Self> {
        Ok(Self::new(parse_group_json(SAMPLE_DATA)?, direction))
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// The converse file the dictionary was last loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn translate(&self, text: &str) -> String {
        self.translator.translate(text)
    }

    /// Translates the resolved input; when `output` is given the result is
    /// also written there.
    pub fn translate_file(&self, input: TranslationInput, output: Option<&Path>) -> Result<String> {
        let text = input.resolve()?;
        let result = self.translate(&text);
        info!(
            direction = %self.translator.direction(),
            input_chars = text.chars().count(),
            output_chars = result.chars().count(),
            "translated"
        );
        if let Some(path) = output {
            save_output(path, &result)?;
        }
        Ok(result)
    }
}

pub fn translate_text(converse_file: &Path, text: &str, direction: Direction) -> Result<String> {
    Ok(ConverseEngine::from_file(converse_file, direction)?.translate(text))
}

/// Translates English `text` with the bundled sample accent.
pub fn sample_translate(text: &str) -> Result<String> {
    Ok(ConverseEngine::sample(Direction::AToB)?.translate(text))
}
