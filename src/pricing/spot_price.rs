//! Marginal exchange rate of a weighted pair.

use tracing::debug;

use crate::domain::{Balance, Rounding, Weight};
use crate::error::MathError;
use crate::math::Precision;

/// Spot price `(Bi / Wi) / (Bo / Wo)`: units of the input asset paid per
/// unit of the output asset at the margin, before fees.
///
/// # Errors
///
/// - [`MathError::Domain`] if any argument is not strictly positive.
/// - Backend arithmetic errors from the divisions.
///
/// # Examples
///
/// ```
/// use weighted_math::math::FloatArithmetic as F;
/// use weighted_math::pricing::spot_price;
///
/// let Ok(p) = spot_price(F::new(100.0), F::new(0.2), F::new(250.0), F::new(0.8)) else {
///     panic!("positive inputs");
/// };
/// assert!((p.get() - 1.6).abs() < 1e-12);
/// ```
pub fn spot_price<P: Precision>(
    balance_in: P,
    weight_in: P,
    balance_out: P,
    weight_out: P,
) -> Result<P, MathError> {
    let (bi, wi, bo, wo) = validate(balance_in, weight_in, balance_out, weight_out)
        .map_err(|err| {
            debug!(%err, "spot_price rejected");
            err
        })?;
    spot_price_of(&bi, &wi, &bo, &wo)
}

type Validated<P> = (Balance<P>, Weight<P>, Balance<P>, Weight<P>);

pub(super) fn validate<P: Precision>(
    balance_in: P,
    weight_in: P,
    balance_out: P,
    weight_out: P,
) -> Result<Validated<P>, MathError> {
    Ok((
        Balance::new(balance_in)?,
        Weight::new(weight_in)?,
        Balance::new(balance_out)?,
        Weight::new(weight_out)?,
    ))
}

/// The formula on already-validated values, as `(Bi / Bo) * Wo / Wi`.
///
/// The weight product is taken wide, so a small weight next to a large
/// balance does not overflow when the price itself fits.
pub(super) fn spot_price_of<P: Precision>(
    balance_in: &Balance<P>,
    weight_in: &Weight<P>,
    balance_out: &Balance<P>,
    weight_out: &Weight<P>,
) -> Result<P, MathError> {
    let balances = balance_in
        .get()
        .checked_div(&balance_out.get(), Rounding::Down)?;
    balances.checked_mul_div(&weight_out.get(), &weight_in.get(), Rounding::Down)
}
