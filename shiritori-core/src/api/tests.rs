//! Tests for the processing API

#[cfg(test)]
mod api_tests {
    use crate::api::*;
    use std::io::Cursor;

    #[test]
    fn test_processor_creation() {
        let processor = ChainProcessor::new();
        assert_eq!(processor.config(), &Config::default());

        let config = Config::builder()
            .max_input_bytes(1024)
            .threads(2)
            .parallel_threshold(8)
            .build()
            .unwrap();
        let processor = ChainProcessor::with_config(config).unwrap();
        assert_eq!(processor.config().max_input_bytes(), 1024);
        assert_eq!(processor.config().threads(), Some(2));
        assert_eq!(processor.config().parallel_threshold(), 8);
    }

    #[test]
    fn test_config_validation() {
        let err = Config::builder().max_input_bytes(0).build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("max_input_bytes"));

        let err = Config::builder().threads(0).build().unwrap_err();
        assert!(err.to_string().contains("threads must be greater than 0"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.max_input_bytes(), defaults::MAX_INPUT_BYTES);
        assert_eq!(config.threads(), None);
        assert_eq!(config.parallel_threshold(), defaults::PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_process_text_output() {
        let processor = ChainProcessor::new();
        let output = processor.process_text("ab ba x xy yz");

        assert_eq!(output.sequence, "x xy yz");
        assert!(output.has_chain());
        assert_eq!(output.word_count(), 3);

        let chain = output.chain.unwrap();
        assert_eq!(chain.start_word, 2);
        assert_eq!(chain.words, vec!["x", "xy", "yz"]);
        assert_eq!(output.metadata.bytes_processed, 13);
        assert_eq!(output.metadata.stats.words_scanned, 5);
    }

    #[test]
    fn test_process_text_without_chain() {
        let output = ChainProcessor::new().process_text("cat dog bird");
        assert_eq!(output.sequence, "");
        assert!(!output.has_chain());
        assert_eq!(output.word_count(), 0);
        assert_eq!(output.metadata.stats.longest_chain_len, 1);
    }

    #[test]
    fn test_input_variants() {
        let processor = ChainProcessor::new();

        let text = processor.process(Input::from_text("Dog Great")).unwrap();
        assert_eq!(text.sequence, "Dog Great");

        let bytes = processor
            .process(Input::from_bytes(b"Dog Great".to_vec()))
            .unwrap();
        assert_eq!(bytes.sequence, "Dog Great");

        let reader = processor
            .process(Input::from_reader(Cursor::new("Dog Great")))
            .unwrap();
        assert_eq!(reader.sequence, "Dog Great");
    }

    #[test]
    fn test_file_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("message.txt");
        std::fs::write(&path, "apple elegant task").unwrap();

        let output = ChainProcessor::new()
            .process(Input::from_file(&path))
            .unwrap();
        assert_eq!(output.sequence, "apple elegant task");
    }

    #[test]
    fn test_missing_file_is_infrastructure_error() {
        let err = ChainProcessor::new()
            .process(Input::from_file("/nonexistent/message.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::Infrastructure(_)));
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_invalid_utf8_is_not_text() {
        let output = ChainProcessor::new()
            .process(Input::from_bytes(vec![0x61, 0x20, 0xff, 0x61]))
            .unwrap();
        assert_eq!(output.sequence, "");
        assert!(output.chain.is_none());
        assert_eq!(output.metadata.bytes_processed, 0);
    }

    #[test]
    fn test_input_size_limit() {
        let config = Config::builder().max_input_bytes(4).build().unwrap();
        let processor = ChainProcessor::with_config(config).unwrap();

        assert!(processor.process(Input::from_text("ab bc")).is_err());
        assert!(processor.process(Input::from_text("a ab")).is_ok());

        let err = processor
            .process(Input::from_reader(Cursor::new(vec![b'a'; 100])))
            .unwrap_err();
        match err {
            Error::InputTooLarge { size, limit } => {
                assert_eq!(size, 5);
                assert_eq!(limit, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_file_size_limit() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("long.txt");
        std::fs::write(&path, "ab ".repeat(100)).unwrap();

        let err = Input::from_file(&path).read_bytes(10).unwrap_err();
        assert!(matches!(err, Error::InputTooLarge { size: 11, limit: 10 }));
    }

    #[cfg(unix)]
    #[test]
    fn test_unsized_file_is_limited_while_reading() {
        // Character devices report a length of zero but never run dry
        let err = Input::from_file("/dev/zero").read_bytes(1024).unwrap_err();
        match err {
            Error::InputTooLarge { size, limit } => {
                assert_eq!(size, 1025);
                assert_eq!(limit, 1024);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_batch_preserves_order() {
        let processor = ChainProcessor::new();
        let messages = ["cat dog", "ab bc", "", "hello Open"];
        let outputs = processor.process_batch(&messages).unwrap();

        let sequences: Vec<&str> = outputs.iter().map(|o| o.sequence.as_str()).collect();
        assert_eq!(sequences, vec!["", "ab bc", "", "hello Open"]);
    }

    #[test]
    fn test_parallel_batch_matches_sequential() {
        let messages: Vec<String> = (0..200)
            .map(|i| match i % 4 {
                0 => "ab ba x xy yz".to_string(),
                1 => "cat dog bird".to_string(),
                2 => format!("w{i} {i}z za"),
                _ => "a  b".to_string(),
            })
            .collect();

        let sequential = ChainProcessor::with_config(
            Config::builder()
                .parallel_threshold(usize::MAX)
                .build()
                .unwrap(),
        )
        .unwrap();
        let parallel = ChainProcessor::with_config(
            Config::builder()
                .parallel_threshold(2)
                .threads(4)
                .build()
                .unwrap(),
        )
        .unwrap();

        let expected: Vec<String> = sequential
            .process_batch(&messages)
            .unwrap()
            .into_iter()
            .map(|o| o.sequence)
            .collect();
        let actual: Vec<String> = parallel
            .process_batch(&messages)
            .unwrap()
            .into_iter()
            .map(|o| o.sequence)
            .collect();

        assert_eq!(actual, expected);
        assert_eq!(actual[0], "x xy yz");
        assert_eq!(actual[2], "w2 2z za");
    }

    #[test]
    fn test_empty_batch() {
        let outputs = ChainProcessor::new().process_batch::<&str>(&[]).unwrap();
        assert!(outputs.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_output_serialization() {
        let output = ChainProcessor::new().process_text("Dog Great Tea");
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["sequence"], "Dog Great Tea");
        assert_eq!(value["chain"]["start_word"], 0);
        assert_eq!(value["chain"]["words"][2], "Tea");
        assert_eq!(value["metadata"]["stats"]["words_scanned"], 3);

        let restored: Output = serde_json::from_value(value).unwrap();
        assert_eq!(restored.sequence, output.sequence);
        assert_eq!(restored.chain, output.chain);
    }
}
