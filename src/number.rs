use serde_json::Number;

/// The two numeric types a JSON number can be guessed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    /// A number with no fractional component.
    Int,

    /// Anything else.
    Float,
}

impl NumberKind {
    /// Classifies a number by integrality.
    ///
    /// The test is on the value, not on how it was written: `4.0` has no
    /// remainder and is therefore a [`NumberKind::Int`]. A number too large
    /// for `f64` reads as infinity, which has no defined remainder, so it is a
    /// [`NumberKind::Float`]. Returns `None` only when the number's text is not
    /// a number at all.
    pub fn classify(n: &Number) -> Option<Self> {
        if n.is_i64() || n.is_u64() {
            return Some(NumberKind::Int);
        }

        // `as_f64` refuses infinities, so read the original text instead.
        n.as_str().parse::<f64>().ok().map(Self::classify_f64)
    }

    pub(crate) fn classify_f64(n: f64) -> Self {
        if n % 1.0 == 0.0 {
            NumberKind::Int
        } else {
            NumberKind::Float
        }
    }
}
