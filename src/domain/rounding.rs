//! Explicit rounding direction for fixed-point division.

/// Rounding direction of a division.
///
/// Every division in the crate names its direction.  The pricing formulas
/// use [`Rounding::Down`] throughout so that error accumulates in one
/// direction only.
///
/// # Examples
///
/// ```
/// use weighted_math::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Up.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    #[default]
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
