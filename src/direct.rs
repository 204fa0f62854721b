use crate::core::SubstringSearch;

/// Tests each pattern against the text with a plain containment check.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectScan;

impl SubstringSearch for DirectScan {
    fn name(&self) -> &'static str {
        "direct scan"
    }

    fn search<'p>(&self, text: &str, patterns: &[&'p str]) -> Vec<&'p str> {
        let mut out = Vec::new();
        for &pattern in patterns {
            crate::instrumentation::add_containment_checks(1);
            // empty pattern is contained in every text
            if text.contains(pattern) {
                out.push(pattern);
            }
        }
        out
    }
}
