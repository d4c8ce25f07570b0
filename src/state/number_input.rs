//! NumberInput - Raw Text Held Until Commit
//!
//! Interim text is kept as typed and never reaches the filter state; only a
//! commit (blur or Enter) produces a value, clamped to the input's bounds.

/// Text model behind one numeric input box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberInput {
    raw: String,
    value: u32,
    min: u32,
    max: u32,
}

impl NumberInput {
    pub fn new(value: u32, min: u32, max: u32) -> Self {
        Self {
            raw: value.to_string(),
            value,
            min,
            max,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Last committed value
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Follow an external change (e.g. the slider moved)
    pub fn sync(&mut self, value: u32, min: u32, max: u32) {
        self.value = value;
        self.min = min;
        self.max = max;
        self.raw = value.to_string();
    }

    /// Accept interim text if it is empty or all digits
    pub fn input(&mut self, text: &str) -> bool {
        if text.chars().all(|c| c.is_ascii_digit()) {
            self.raw = text.to_string();
            true
        } else {
            false
        }
    }

    /// Commit the interim text.
    ///
    /// Returns the clamped value, or `None` (reverting the text) when it does
    /// not parse.
    pub fn commit(&mut self) -> Option<u32> {
        match parse_clamped(&self.raw, self.min, self.max) {
            Some(value) => {
                self.value = value;
                self.raw = value.to_string();
                Some(value)
            }
            None => {
                self.raw = self.value.to_string();
                None
            }
        }
    }
}

/// Parse a base-10 number and clamp it to `[min, max]`
///
/// Digit strings too large for `u32` clamp to `max`.
fn parse_clamped(text: &str, min: u32, max: u32) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let value = text.parse::<u32>().unwrap_or(u32::MAX);
    Some(value.clamp(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_digit_interim_text() {
        let mut input = NumberInput::new(10, 1, 60);
        assert!(input.input("1"));
        assert!(input.input(""));
        assert!(!input.input("1a"));
        assert_eq!(input.raw(), "");
    }

    #[test]
    fn commit_clamps_to_bounds() {
        let mut input = NumberInput::new(10, 1, 40);
        input.input("75");
        assert_eq!(input.commit(), Some(40));
        assert_eq!(input.raw(), "40");

        input.input("0");
        assert_eq!(input.commit(), Some(1));
    }

    #[test]
    fn empty_commit_reverts() {
        let mut input = NumberInput::new(12, 1, 60);
        input.input("");
        assert_eq!(input.commit(), None);
        assert_eq!(input.raw(), "12");
        assert_eq!(input.value(), 12);
    }

    #[test]
    fn sync_follows_external_changes() {
        let mut input = NumberInput::new(10, 1, 60);
        input.input("3");
        input.sync(25, 1, 30);
        assert_eq!(input.raw(), "25");

        input.input("99");
        assert_eq!(input.commit(), Some(30));
    }

    #[test]
    fn huge_numbers_clamp_to_max() {
        assert_eq!(parse_clamped("99999999999", 1, 365), Some(365));
        assert_eq!(parse_clamped("-3", 1, 365), None);
    }
}
