//! Integration tests for the extraction pipeline

#[cfg(test)]
mod tests {
    use crate::{ExtractionPipeline, ExtractionError, ExtractorConfig};
    use inquest_embed::HashEmbedder;

    fn pipeline() -> ExtractionPipeline<HashEmbedder> {
        ExtractionPipeline::new(HashEmbedder::default(), ExtractorConfig::default()).unwrap()
    }

    #[test]
    fn test_extraction_idempotent() {
        let text = "Recent benchmarks show a 20% efficiency gain in agent-based systems. \
                    Independent benchmarks report efficiency gains in agent systems. \
                    The deployment guide may help new teams get started.";
        let pipeline = pipeline();
        let first = pipeline.extract(text).unwrap();
        let second = pipeline.extract(text).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hedge_scenario() {
        // "may" keeps the first sentence below threshold; the declarative
        // benchmark sentence is accepted. The only other sentence is the
        // hedged one, which shares little vocabulary, so the accepted claim
        // ends up with no evidence stronger than itself.
        let text = "AI agents may improve efficiency. \
                    Recent benchmarks show a 20% efficiency gain in agent-based systems.";
        let result = pipeline().extract(text).unwrap();

        assert_eq!(result.claim_count(), 1);
        let pair = &result.pairs[0];
        assert!(pair.claim.text.starts_with("Recent benchmarks"));
        assert_eq!(pair.claim.sentence_index, 1);
        assert!(!pair.evidence.is_supported());
    }

    #[test]
    fn test_claims_preserve_document_order() {
        let text = "The first trial demonstrates a 12% improvement in recall. \
                    Participants were recruited from three partner universities. \
                    The second trial confirms a 9% improvement in precision.";
        let result = pipeline().extract(text).unwrap();
        let indices: Vec<usize> = result.pairs.iter().map(|p| p.claim.sentence_index).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn test_supported_claim_found_for_overlapping_text() {
        let text = "Agent benchmarks show large efficiency gains across workloads. \
                    Independent agent benchmarks report similar efficiency gains across workloads.";
        let result = pipeline().extract(text).unwrap();
        assert!(result.claim_count() >= 1);
        assert!(result.pairs.iter().any(|p| p.evidence.is_supported()));
    }

    #[test]
    fn test_empty_text_fails() {
        assert!(matches!(
            pipeline().extract("   "),
            Err(ExtractionError::EmptyInput)
        ));
    }

    #[test]
    fn test_only_short_fragments_fails() {
        assert!(matches!(
            pipeline().extract("Hi there. Ok then."),
            Err(ExtractionError::NoSentences)
        ));
    }

    #[test]
    fn test_no_claims_yields_zero_aggregate() {
        let text = "Could this possibly work out in practice? \
                    Perhaps the team might revisit the idea next quarter.";
        let result = pipeline().extract(text).unwrap();
        assert_eq!(result.claim_count(), 0);
        assert_eq!(result.aggregate.value(), 0.0);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = ExtractorConfig::default();
        config.similarity_floor = 2.0;
        let result = ExtractionPipeline::new(HashEmbedder::default(), config);
        assert!(matches!(result, Err(ExtractionError::Config(_))));
    }
}
