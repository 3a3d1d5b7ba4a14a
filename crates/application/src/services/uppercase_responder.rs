//! Reference response generator

use crate::ports::ResponseGenerator;

/// Replies with the inbound text upper-cased
#[derive(Debug, Clone, Copy, Default)]
pub struct UppercaseResponder;

impl ResponseGenerator for UppercaseResponder {
    fn generate(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn uppercases_ascii() {
        assert_eq!(UppercaseResponder.generate("hello"), "HELLO");
    }

    #[test]
    fn keeps_digits_and_punctuation() {
        assert_eq!(
            UppercaseResponder.generate("yoga at 10:00?"),
            "YOGA AT 10:00?"
        );
    }

    #[test]
    fn uppercases_non_ascii() {
        assert_eq!(UppercaseResponder.generate("grüße"), "GRÜSSE");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(UppercaseResponder.generate(""), "");
    }

    proptest! {
        #[test]
        fn uppercasing_is_idempotent(text in "[a-zA-Z0-9 äöüßéèàç.,!?-]{0,64}") {
            let once = UppercaseResponder.generate(&text);
            let twice = UppercaseResponder.generate(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
