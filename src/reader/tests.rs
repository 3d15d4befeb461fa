use super::*;
use serial_test::serial;

mod span_tests {
    use super::*;

    #[test]
    fn test_context_token_range() {
        // [CLS] q q [SEP] c c c [SEP]
        let ids = vec![
            None,
            Some(0),
            Some(0),
            None,
            Some(1),
            Some(1),
            Some(1),
            None,
        ];
        assert_eq!(context_token_range(&ids), Some(4..7));
    }

    #[test]
    fn test_context_token_range_without_context() {
        assert_eq!(context_token_range(&[None, Some(0), None]), None);
    }

    #[test]
    fn test_best_span_picks_peak_logits() {
        let start = vec![9.0, 0.0, 0.0, 5.0, 0.0, 0.0];
        let end = vec![9.0, 0.0, 0.0, 0.0, 5.0, 0.0];

        // Position 0 (CLS) is outside the window and must be ignored.
        let span = best_span(&start, &end, 1..6, 15).unwrap();
        assert_eq!((span.start, span.end), (3, 4));
        assert!(span.score > 0.0 && span.score <= 1.0);
    }

    #[test]
    fn test_best_span_never_ends_before_start() {
        let start = vec![0.0, 0.0, 8.0];
        let end = vec![8.0, 0.0, 0.0];

        let span = best_span(&start, &end, 0..3, 15).unwrap();
        assert!(span.start <= span.end);
    }

    #[test]
    fn test_best_span_respects_max_answer_len() {
        let start = vec![5.0, 0.0, 0.0, 0.0, 0.0];
        let end = vec![0.0, 0.0, 0.0, 0.0, 5.0];

        let span = best_span(&start, &end, 0..5, 2).unwrap();
        assert!(span.end - span.start < 2);
    }

    #[test]
    fn test_best_span_single_token() {
        let span = best_span(&[1.0], &[1.0], 0..1, 15).unwrap();
        assert_eq!((span.start, span.end), (0, 0));
        assert!((span.score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_best_span_empty_window() {
        assert!(best_span(&[1.0, 2.0], &[1.0, 2.0], 2..2, 15).is_none());
        assert!(best_span(&[1.0], &[1.0], 0..1, 0).is_none());
    }

    #[test]
    fn test_best_span_clamps_window_to_logits() {
        let span = best_span(&[0.0, 3.0], &[0.0, 3.0], 1..10, 15).unwrap();
        assert_eq!((span.start, span.end), (1, 1));
    }

    fn choice(start: usize, score: f32) -> SpanChoice {
        SpanChoice {
            start,
            end: start + 1,
            score,
        }
    }

    #[test]
    fn test_best_window_span_finds_answer_in_later_window() {
        let spans = vec![Some(choice(5, 0.2)), None, Some(choice(9, 0.7)), Some(choice(3, 0.4))];
        let (idx, span) = best_window_span(spans).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(span.start, 9);
    }

    #[test]
    fn test_best_window_span_tie_keeps_earliest_window() {
        let (idx, _) = best_window_span(vec![Some(choice(1, 0.5)), Some(choice(2, 0.5))]).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn test_best_window_span_without_spans() {
        assert!(best_window_span(Vec::new()).is_none());
        assert!(best_window_span(vec![None, None]).is_none());
    }

    #[test]
    fn test_best_span_tie_keeps_earliest() {
        let span = best_span(&[1.0, 1.0], &[1.0, 1.0], 0..2, 1).unwrap();
        assert_eq!((span.start, span.end), (0, 0));
    }
}

mod config_tests {
    use super::*;
    use std::path::PathBuf;

    fn clear_reader_env() {
        // SAFETY: Test code only, we accept the thread-safety risk in tests.
        unsafe {
            std::env::remove_var("HELPBUBBLE_MODEL_PATH");
            std::env::remove_var("HELPBUBBLE_MODEL_NAME");
            std::env::remove_var("HELPBUBBLE_MAX_ANSWER_LEN");
            std::env::remove_var("HELPBUBBLE_MAX_SEQ_LEN");
            std::env::remove_var("HELPBUBBLE_DOC_STRIDE");
        }
    }

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert!(config.model_path.is_none());
        assert_eq!(config.model_name, crate::constants::DEFAULT_MODEL_NAME);
        assert_eq!(config.max_answer_len, 15);
        assert_eq!(config.max_seq_len, 384);
        assert_eq!(config.doc_stride, 128);
        assert_eq!(config.model_name, "distilbert-base-cased-distilled-squad");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ReaderConfig::new("/models/squad")
            .with_model_name("custom")
            .with_max_answer_len(30)
            .with_max_seq_len(512)
            .with_doc_stride(64);
        assert_eq!(config.model_path, Some(PathBuf::from("/models/squad")));
        assert_eq!(config.model_name, "custom");
        assert_eq!(config.max_answer_len, 30);
        assert_eq!(config.max_seq_len, 512);
        assert_eq!(config.doc_stride, 64);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ReaderConfig::default().with_max_answer_len(0).validate().is_err());
        assert!(ReaderConfig::default().with_max_seq_len(8).validate().is_err());
        assert!(ReaderConfig::new("").validate().is_err());
        assert!(ReaderConfig::default().with_model_name(" ").validate().is_err());
        assert!(ReaderConfig::default().with_max_seq_len(128).validate().is_err());
        assert!(
            ReaderConfig::default()
                .with_max_seq_len(128)
                .with_doc_stride(64)
                .validate()
                .is_ok()
        );
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_reader_env();
        // SAFETY: Test code only, we accept the thread-safety risk in tests.
        unsafe {
            std::env::set_var("HELPBUBBLE_MODEL_PATH", "/models/bert-squad");
            std::env::set_var("HELPBUBBLE_MODEL_NAME", "bert-large-squad");
            std::env::set_var("HELPBUBBLE_MAX_ANSWER_LEN", "20");
            std::env::set_var("HELPBUBBLE_MAX_SEQ_LEN", "not_a_number");
            std::env::set_var("HELPBUBBLE_DOC_STRIDE", "96");
        }

        let config = ReaderConfig::from_env();
        clear_reader_env();

        assert_eq!(config.model_path, Some(PathBuf::from("/models/bert-squad")));
        assert_eq!(config.model_name, "bert-large-squad");
        assert_eq!(config.max_answer_len, 20);
        assert_eq!(config.max_seq_len, 384);
        assert_eq!(config.doc_stride, 96);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_reader_env();
        let config = ReaderConfig::from_env();
        assert!(config.model_path.is_none());
        assert_eq!(config.model_name, crate::constants::DEFAULT_MODEL_NAME);
    }
}

mod load_tests {
    use super::*;

    #[test]
    fn test_load_without_path_is_not_configured() {
        let err = ExtractiveReader::load(ReaderConfig::default()).unwrap_err();
        assert!(matches!(err, ReaderError::NotConfigured));
    }

    #[test]
    fn test_load_missing_directory() {
        let err = ExtractiveReader::load(ReaderConfig::new("/nonexistent/bert-squad")).unwrap_err();
        assert!(matches!(err, ReaderError::ModelNotFound { .. }));
    }

    #[test]
    fn test_load_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{}").unwrap();

        let err = ExtractiveReader::load(ReaderConfig::new(dir.path())).unwrap_err();
        match err {
            ReaderError::ModelLoadFailed { reason } => {
                assert!(reason.contains("model.safetensors"));
            }
            other => panic!("expected ModelLoadFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let err = ExtractiveReader::load(ReaderConfig::default().with_max_answer_len(0)).unwrap_err();
        assert!(matches!(err, ReaderError::InvalidConfig { .. }));
    }
}

mod architecture_tests {
    use super::*;
    use crate::reader::bert::read_architecture;

    const DISTILBERT_CONFIG: &str = r#"{
        "activation": "gelu",
        "architectures": ["DistilBertForQuestionAnswering"],
        "dim": 768,
        "dropout": 0.1,
        "hidden_dim": 3072,
        "max_position_embeddings": 512,
        "model_type": "distilbert",
        "n_heads": 12,
        "n_layers": 6,
        "pad_token_id": 0,
        "vocab_size": 28996
    }"#;

    const BERT_CONFIG: &str = r#"{
        "architectures": ["BertForQuestionAnswering"],
        "hidden_size": 1024,
        "model_type": "bert",
        "num_attention_heads": 16,
        "num_hidden_layers": 24
    }"#;

    const ROBERTA_CONFIG: &str = r#"{
        "architectures": ["RobertaForQuestionAnswering"],
        "hidden_size": 768,
        "model_type": "roberta",
        "pad_token_id": 1
    }"#;

    fn model_dir(config_json: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), config_json).unwrap();
        std::fs::write(dir.path().join("model.safetensors"), b"").unwrap();
        std::fs::write(dir.path().join("tokenizer.json"), "{}").unwrap();
        dir
    }

    #[test]
    fn test_distilbert_config_is_detected() {
        let dir = model_dir(DISTILBERT_CONFIG);
        let architecture = read_architecture(dir.path()).unwrap();
        assert_eq!(architecture, QaArchitecture::DistilBert);
        assert!(!architecture.uses_token_type_ids());
    }

    #[test]
    fn test_bert_config_is_detected() {
        assert_eq!(detect_architecture(BERT_CONFIG).unwrap(), QaArchitecture::Bert);
        assert!(QaArchitecture::Bert.uses_token_type_ids());
    }

    #[test]
    fn test_architectures_field_used_without_model_type() {
        let json = r#"{"architectures": ["DistilBertForQuestionAnswering"], "dim": 768}"#;
        assert_eq!(detect_architecture(json).unwrap(), QaArchitecture::DistilBert);

        let json = r#"{"architectures": ["BertForQuestionAnswering"]}"#;
        assert_eq!(detect_architecture(json).unwrap(), QaArchitecture::Bert);
    }

    #[test]
    fn test_untyped_config_defaults_to_bert() {
        assert_eq!(detect_architecture(r#"{"hidden_size": 768}"#).unwrap(), QaArchitecture::Bert);
    }

    #[test]
    fn test_roberta_is_rejected() {
        let err = detect_architecture(ROBERTA_CONFIG).unwrap_err();
        assert!(err.contains("roberta"), "{err}");
    }

    #[test]
    fn test_load_rejects_roberta_checkpoint() {
        let dir = model_dir(ROBERTA_CONFIG);
        let err = ExtractiveReader::load(ReaderConfig::new(dir.path())).unwrap_err();
        match err {
            ReaderError::ModelLoadFailed { reason } => {
                assert!(reason.contains("Unsupported model_type 'roberta'"), "{reason}");
            }
            other => panic!("expected ModelLoadFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_config_fails_detection() {
        assert!(detect_architecture("not json").is_err());
    }
}

mod mock_tests {
    use super::*;
    use std::sync::Arc;

    const CONTEXT: &str = "Our return policy allows returns within 30 days. Refunds take 5-7 days.";

    #[test]
    fn test_scripted_answer_has_offsets() {
        let model = MockAnswerModel::new("mock").with_answer("How long?", "30 days");
        let answer = model.answer("How long?", CONTEXT).unwrap();

        assert_eq!(answer.text, "30 days");
        assert_eq!(&CONTEXT[answer.start..answer.end], "30 days");
        assert!(answer.score > 0.5);
    }

    #[test]
    fn test_unscripted_answer_is_first_sentence() {
        let model = MockAnswerModel::new("mock");
        let answer = model.answer("anything", CONTEXT).unwrap();
        assert_eq!(answer.text, "Our return policy allows returns within 30 days");
        assert_eq!(answer.start, 0);
    }

    #[test]
    fn test_failures() {
        let model = MockAnswerModel::new("mock").failing_on("boom");
        assert!(model.answer("boom", CONTEXT).is_err());
        assert!(model.answer("fine", CONTEXT).is_ok());
        assert_eq!(model.calls(), 2);

        let down = MockAnswerModel::unavailable("down");
        assert!(matches!(
            down.answer("fine", CONTEXT),
            Err(ReaderError::InferenceFailed { .. })
        ));
    }

    #[test]
    fn test_arc_and_ref_forwarding() {
        let model = Arc::new(MockAnswerModel::new("shared"));
        assert_eq!(model.model_name(), "shared");
        let by_ref: &MockAnswerModel = &model;
        assert_eq!(AnswerModel::model_name(&by_ref), "shared");
        assert!(model.answer("q", CONTEXT).is_ok());
    }
}
