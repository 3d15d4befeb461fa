use candle::{DType, Device, Result, Tensor};
use candle_core as candle;
use candle_core::IndexOp;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::{bert, distilbert};
use serde::Deserialize;
use std::path::Path;

/// Start/end logits for every input position.
#[derive(Debug, Clone)]
pub struct SpanLogits {
    pub start: Vec<f32>,
    pub end: Vec<f32>,
}

/// Encoder family of a SQuAD checkpoint, read from its `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QaArchitecture {
    Bert,
    DistilBert,
}

impl QaArchitecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bert => "bert",
            Self::DistilBert => "distilbert",
        }
    }

    /// Whether the encoder consumes segment (token type) ids.
    pub fn uses_token_type_ids(&self) -> bool {
        matches!(self, Self::Bert)
    }
}

/// Fields shared by every Hugging Face `config.json` that identify the encoder.
#[derive(Debug, Default, Deserialize)]
struct ConfigHeader {
    #[serde(default)]
    model_type: Option<String>,
    #[serde(default)]
    architectures: Vec<String>,
    /// DistilBERT hidden width.
    #[serde(default)]
    dim: Option<usize>,
}

impl ConfigHeader {
    fn model_type(&self) -> String {
        if let Some(model_type) = &self.model_type {
            return model_type.to_lowercase();
        }
        match self.architectures.first().map(|arch| arch.to_lowercase()) {
            Some(arch) if arch.starts_with("distilbert") => "distilbert".to_string(),
            Some(arch) if arch.starts_with("bert") => "bert".to_string(),
            Some(arch) => arch,
            None => String::new(),
        }
    }
}

/// Reads the encoder family from a `config.json` document.
///
/// A config without `model_type` or `architectures` is treated as BERT. RoBERTa-family
/// checkpoints are rejected: their position ids are offset past the padding index, which
/// the BERT encoder does not reproduce.
pub fn detect_architecture(config_json: &str) -> std::result::Result<QaArchitecture, String> {
    let header: ConfigHeader = serde_json::from_str(config_json)
        .map_err(|e| format!("Failed to parse config: {}", e))?;

    match header.model_type().as_str() {
        "distilbert" => Ok(QaArchitecture::DistilBert),
        "bert" | "" => Ok(QaArchitecture::Bert),
        other => Err(format!(
            "Unsupported model_type '{}' (expected bert or distilbert)",
            other
        )),
    }
}

/// [`detect_architecture`] on `<model_dir>/config.json`.
pub fn read_architecture(model_dir: &Path) -> Result<QaArchitecture> {
    let content = std::fs::read_to_string(model_dir.join("config.json"))?;
    detect_architecture(&content).map_err(candle::Error::Msg)
}

enum Encoder {
    Bert(bert::BertModel),
    DistilBert(distilbert::DistilBertModel),
}

struct QuestionAnsweringImpl {
    encoder: Encoder,
    qa_outputs: Linear,
}

impl QuestionAnsweringImpl {
    fn load(vb: VarBuilder, config_json: &str, architecture: QaArchitecture) -> Result<Self> {
        let parse_err =
            |e: serde_json::Error| candle::Error::Msg(format!("Failed to parse config: {}", e));

        let (encoder, hidden_size) = match architecture {
            QaArchitecture::Bert => {
                let config: bert::Config = serde_json::from_str(config_json).map_err(parse_err)?;
                let encoder = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
                    bert::BertModel::load(vb.pp("bert"), &config)?
                } else {
                    bert::BertModel::load(vb.clone(), &config)?
                };
                (Encoder::Bert(encoder), config.hidden_size)
            }
            QaArchitecture::DistilBert => {
                let header: ConfigHeader = serde_json::from_str(config_json).map_err(parse_err)?;
                let hidden_size = header
                    .dim
                    .ok_or_else(|| candle::Error::Msg("DistilBERT config has no 'dim'".into()))?;
                let config: distilbert::Config =
                    serde_json::from_str(config_json).map_err(parse_err)?;
                let encoder =
                    if vb.contains_tensor("distilbert.embeddings.word_embeddings.weight") {
                        distilbert::DistilBertModel::load(vb.pp("distilbert"), &config)?
                    } else {
                        distilbert::DistilBertModel::load(vb.clone(), &config)?
                    };
                (Encoder::DistilBert(encoder), hidden_size)
            }
        };

        let qa_outputs = candle_nn::linear(hidden_size, 2, vb.pp("qa_outputs"))?;

        Ok(Self {
            encoder,
            qa_outputs,
        })
    }

    fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<SpanLogits> {
        let sequence_output = match &self.encoder {
            Encoder::Bert(model) => {
                model.forward(input_ids, token_type_ids, Some(attention_mask))?
            }
            Encoder::DistilBert(model) => {
                // DistilBERT takes a (seq, seq) mask where nonzero entries are hidden.
                let seq_len = input_ids.dim(1)?;
                let keep = attention_mask.i(0)?.to_vec1::<u32>()?;
                let hidden: Vec<u8> = (0..seq_len)
                    .flat_map(|_| keep.iter().map(|k| u8::from(*k == 0)))
                    .collect();
                let mask = Tensor::from_vec(hidden, (seq_len, seq_len), input_ids.device())?;
                model.forward(input_ids, &mask)?
            }
        };
        let logits = self.qa_outputs.forward(&sequence_output)?;

        let start = logits.i((0, .., 0))?.contiguous()?.to_vec1::<f32>()?;
        let end = logits.i((0, .., 1))?.contiguous()?.to_vec1::<f32>()?;

        Ok(SpanLogits { start, end })
    }
}

/// Encoder with a two-way span head (`qa_outputs`), as exported by SQuAD fine-tunes of
/// BERT and DistilBERT.
#[derive(Clone)]
pub struct QuestionAnsweringModel {
    inner: std::sync::Arc<QuestionAnsweringImpl>,
    architecture: QaArchitecture,
}

impl QuestionAnsweringModel {
    pub fn load<P: AsRef<Path>>(
        model_dir: P,
        architecture: QaArchitecture,
        device: &Device,
    ) -> Result<Self> {
        let model_dir = model_dir.as_ref();
        let config_content = std::fs::read_to_string(model_dir.join("config.json"))?;

        let weights_path = model_dir.join("model.safetensors");
        let vb =
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, device)? };

        let model = QuestionAnsweringImpl::load(vb, &config_content, architecture)?;

        Ok(Self {
            inner: std::sync::Arc::new(model),
            architecture,
        })
    }

    pub fn architecture(&self) -> QaArchitecture {
        self.architecture
    }

    /// Runs a single (batch size 1) forward pass. `token_type_ids` is ignored by DistilBERT.
    pub fn forward(
        &self,
        input_ids: &Tensor,
        token_type_ids: &Tensor,
        attention_mask: &Tensor,
    ) -> Result<SpanLogits> {
        self.inner.forward(input_ids, token_type_ids, attention_mask)
    }
}
