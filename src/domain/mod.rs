//! Validated value types for weighted-pool pricing.
//!
//! Every quantity that enters a pricing formula is first wrapped in one of
//! these newtypes.  Constructors enforce the domain invariants (positive
//! balances and weights, fee in `[0, 1)`, amount below the input reserve),
//! so a formula that receives them never has to re-check its inputs.
//!
//! All types are generic over the numeric backend
//! [`Precision`](crate::math::Precision).

mod amount;
mod balance;
mod fee;
mod rounding;
mod swap_input;
mod weight;

pub use amount::Amount;
pub use balance::Balance;
pub use fee::Fee;
pub use rounding::Rounding;
pub use swap_input::SwapInput;
pub use weight::Weight;

use core::cmp::Ordering;

use crate::math::Precision;

/// `true` when `value > 0`; `false` for zero, negatives and `NaN`.
pub(crate) fn is_positive<P: Precision>(value: &P) -> bool {
    value.partial_cmp(&P::zero()) == Some(Ordering::Greater)
}
