//! Keyword/semantic blend weight for product search.

use std::fmt;

/// Search blend weight between keyword (0.0) and semantic (1.0) matching.
///
/// Stored as whole tenths so repeated nudges never drift. The backend owns the
/// meaning of the weight; the client only forwards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Alpha(u8);

impl Alpha {
    const MAX_TENTHS: u8 = 10;

    /// Pure keyword matching.
    pub const KEYWORD: Self = Self(0);

    /// Pure semantic matching.
    pub const SEMANTIC: Self = Self(Self::MAX_TENTHS);

    /// Builds a weight from tenths, clamped to `0..=10`.
    #[must_use]
    pub fn from_tenths(tenths: u8) -> Self {
        Self(tenths.min(Self::MAX_TENTHS))
    }

    /// Parses a decimal weight such as `"0.6"`, clamping to `[0, 1]` and
    /// snapping to the nearest tenth.
    ///
    /// Returns `None` for non-numeric input.
    ///
    /// # Examples
    ///
    /// ```
    /// use zstorefront::api::Alpha;
    ///
    /// assert_eq!(Alpha::parse("0.64"), Some(Alpha::from_tenths(6)));
    /// assert_eq!(Alpha::parse("7"), Some(Alpha::SEMANTIC));
    /// assert_eq!(Alpha::parse("high"), None);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let value: f64 = text.trim().parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tenths = (value.clamp(0.0, 1.0) * 10.0).round() as u8;
        Some(Self::from_tenths(tenths))
    }

    /// One step (0.1) towards semantic matching.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::from_tenths(self.0.saturating_add(1))
    }

    /// One step (0.1) towards keyword matching.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self(6)
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}
