//! Redaction-by-type for log output.
//!
//! Clinical values (lab results, entered text) must not reach the log file.
//! Wrap them in [`Redacted`] before they go near a `tracing` call; the
//! wrapper's `Debug` and `Display` never print the inner value.

use zeroize::Zeroize;

const REDACTED: &str = "[REDACTED]";

/// A value that is hidden from formatting.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Redacted<T>(T);

impl<T> Redacted<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Access the inner value. Callers take responsibility for not logging it.
    #[must_use]
    pub fn expose(&self) -> &T {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> std::fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> From<T> for Redacted<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Zeroize> Zeroize for Redacted<T> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_hide_value() {
        let hb = Redacted::new(8.4_f64);
        assert_eq!(format!("{hb:?}"), "[REDACTED]");
        assert_eq!(format!("{hb}"), "[REDACTED]");
        assert!(!format!("{hb:?}").contains("8.4"));
    }

    #[test]
    fn test_nested_debug_stays_redacted() {
        let entry = Some(Redacted::new("142".to_string()));
        assert_eq!(format!("{entry:?}"), "Some([REDACTED])");
    }

    #[test]
    fn test_expose_and_zeroize() {
        let mut entry = Redacted::new("12.5".to_string());
        assert_eq!(entry.expose(), "12.5");
        entry.zeroize();
        assert!(entry.expose().is_empty());
    }
}
