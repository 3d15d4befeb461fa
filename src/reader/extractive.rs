use candle_core::Tensor;
use std::path::Path;
use tokenizers::{Encoding, Tokenizer, TruncationParams, TruncationStrategy};
use tracing::{debug, info};

use super::bert::{QuestionAnsweringModel, read_architecture};
use super::config::ReaderConfig;
use super::device::select_device;
use super::error::ReaderError;
use super::span::{SpanChoice, best_span, best_window_span, context_token_range};
use super::{AnswerModel, ModelAnswer};

const REQUIRED_FILES: [&str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

/// Extractive reader backed by a local BERT or DistilBERT SQuAD checkpoint.
pub struct ExtractiveReader {
    device: candle_core::Device,
    config: ReaderConfig,
    model: QuestionAnsweringModel,
    tokenizer: Tokenizer,
}

impl std::fmt::Debug for ExtractiveReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractiveReader")
            .field("device", &format!("{:?}", self.device))
            .field("architecture", &self.model.architecture())
            .field("config", &self.config)
            .finish()
    }
}

impl ExtractiveReader {
    pub fn load(config: ReaderConfig) -> Result<Self, ReaderError> {
        if let Err(msg) = config.validate() {
            return Err(ReaderError::InvalidConfig { reason: msg });
        }

        let model_path = config.model_path.clone().ok_or(ReaderError::NotConfigured)?;
        if !model_path.exists() {
            return Err(ReaderError::ModelNotFound { path: model_path });
        }
        for file in REQUIRED_FILES {
            if !model_path.join(file).exists() {
                return Err(ReaderError::ModelLoadFailed {
                    reason: format!("Missing {} in {}", file, model_path.display()),
                });
            }
        }

        let architecture =
            read_architecture(&model_path).map_err(|e| ReaderError::ModelLoadFailed {
                reason: format!("{} ({})", e, model_path.join("config.json").display()),
            })?;

        let device = select_device()?;
        debug!(?device, "Selected compute device for reader");

        info!(
            model_path = %model_path.display(),
            model_name = %config.model_name,
            architecture = architecture.as_str(),
            "Loading reader model"
        );

        let model =
            QuestionAnsweringModel::load(&model_path, architecture, &device).map_err(|e| {
                ReaderError::ModelLoadFailed {
                    reason: format!("Failed to load {} model: {}", architecture.as_str(), e),
                }
            })?;

        let tokenizer = load_pair_tokenizer(&model_path, config.max_seq_len, config.doc_stride)?;

        info!(model_name = %config.model_name, "Reader model loaded successfully");

        Ok(Self {
            device,
            config,
            model,
            tokenizer,
        })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn device(&self) -> &candle_core::Device {
        &self.device
    }

    fn tensor(&self, values: &[u32]) -> Result<Tensor, ReaderError> {
        Ok(Tensor::new(values, &self.device)?.unsqueeze(0)?)
    }

    /// Best span of one question/context window, `None` if the window holds no context.
    fn read_window(&self, window: &Encoding) -> Result<Option<SpanChoice>, ReaderError> {
        let Some(range) = context_token_range(&window.get_sequence_ids()) else {
            return Ok(None);
        };

        let input_ids = self.tensor(window.get_ids())?;
        let type_ids = self.tensor(window.get_type_ids())?;
        let attention_mask = self.tensor(window.get_attention_mask())?;

        let logits = self
            .model
            .forward(&input_ids, &type_ids, &attention_mask)
            .map_err(|e| ReaderError::InferenceFailed {
                reason: e.to_string(),
            })?;

        Ok(best_span(
            &logits.start,
            &logits.end,
            range,
            self.config.max_answer_len,
        ))
    }
}

impl AnswerModel for ExtractiveReader {
    fn answer(&self, question: &str, context: &str) -> Result<ModelAnswer, ReaderError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ReaderError::EmptyInput { field: "question" });
        }
        if context.trim().is_empty() {
            return Err(ReaderError::EmptyInput { field: "context" });
        }

        let encoding = self
            .tokenizer
            .encode((question, context), true)
            .map_err(|e| ReaderError::TokenizationFailed {
                reason: e.to_string(),
            })?;

        let windows: Vec<&Encoding> = std::iter::once(&encoding)
            .chain(encoding.get_overflowing())
            .collect();

        let spans = windows
            .iter()
            .map(|window| self.read_window(window))
            .collect::<Result<Vec<_>, _>>()?;
        let (window_idx, span) = best_window_span(spans).ok_or(ReaderError::NoAnswer)?;
        let window = windows[window_idx];

        let offsets = window.get_offsets();
        let byte_start = offsets[span.start].0;
        let byte_end = offsets[span.end].1;
        let text = context
            .get(byte_start..byte_end)
            .ok_or_else(|| ReaderError::InferenceFailed {
                reason: format!("span {}..{} is not a valid context slice", byte_start, byte_end),
            })?;

        let start = context[..byte_start].chars().count();
        let end = start + text.chars().count();

        debug!(
            start,
            end,
            score = span.score,
            windows = windows.len(),
            "Extracted answer span"
        );

        Ok(ModelAnswer {
            text: text.to_string(),
            score: span.score,
            start,
            end,
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model_name
    }
}

/// Loads `tokenizer.json` so that a long context overflows into windows of `max_len`
/// tokens, each repeating `stride` context tokens of the previous one.
fn load_pair_tokenizer(
    model_dir: &Path,
    max_len: usize,
    stride: usize,
) -> Result<Tokenizer, ReaderError> {
    let mut tokenizer = Tokenizer::from_file(model_dir.join("tokenizer.json")).map_err(|e| {
        ReaderError::ModelLoadFailed {
            reason: format!("Failed to load tokenizer: {}", e),
        }
    })?;

    let truncation = TruncationParams {
        max_length: max_len,
        strategy: TruncationStrategy::OnlySecond,
        stride,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| ReaderError::ModelLoadFailed {
            reason: format!("Failed to configure truncation: {}", e),
        })?;

    Ok(tokenizer)
}
