//! Response generator port
//!
//! The strategy that turns an inbound text into the reply body. The webhook
//! pipeline only depends on this capability, so a rule-based or model-backed
//! generator can replace the reference one without touching the pipeline.

/// Produces the reply text for an inbound message text
pub trait ResponseGenerator: Send + Sync {
    fn generate(&self, input: &str) -> String;
}

impl<F> ResponseGenerator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn generate(&self, input: &str) -> String {
        self(input)
    }
}
