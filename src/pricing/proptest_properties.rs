//! Property-based tests for the pricing formulas and the power series.
//!
//! 1. **Series agreement**: `pow_approx` stays within `1e-6` of `powf`.
//! 2. **Exact/approx consistency**: swap outputs agree within `Bo · 1e-6`.
//! 3. **Spot price monotonicity**: increasing in `Bi`, decreasing in `Bo`.
//! 4. **Fee monotonicity**: a higher fee never yields more output.
//! 5. **Target price**: the computed amount re-prices the pool to `SER1`.
//! 6. **Backend agreement**: wad results decode to the float results.

use proptest::prelude::*;

use super::*;
use crate::math::{pow_approx, FloatArithmetic as F};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves in `[1, 1e6]`.
fn balance_strategy() -> impl Strategy<Value = f64> {
    1.0f64..1_000_000.0
}

/// Normalised weights in `[0.05, 0.95]`.
fn weight_strategy() -> impl Strategy<Value = f64> {
    (5u32..=95u32).prop_map(|v| f64::from(v) / 100.0)
}

/// Fees in `[0, 0.1]` with a 1 bp step.
fn fee_strategy() -> impl Strategy<Value = f64> {
    (0u32..=1_000u32).prop_map(|v| f64::from(v) / 10_000.0)
}

/// Swap size as a share of the input reserve, `(0, 0.9]`.
fn trade_share_strategy() -> impl Strategy<Value = f64> {
    (1u32..=900u32).prop_map(|v| f64::from(v) / 1_000.0)
}

fn swap(
    f: fn(F, F, F, F, F, F) -> Result<F, MathError>,
    args: [f64; 6],
) -> Option<f64> {
    let [bi, wi, bo, wo, ai, fee] = args.map(F::new);
    f(bi, wi, bo, wo, ai, fee).ok().map(|v| v.get())
}

// ---------------------------------------------------------------------------
// Property 1: Series agreement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_pow_approx_close_to_powf(
        base in 0.05f64..1.95,
        exponent in 0.1f64..10.0,
    ) {
        let Ok(approx) = pow_approx(F::new(base), F::new(exponent)) else {
            return Err(TestCaseError::fail("pow_approx rejected an in-domain point"));
        };
        let diff = (approx.get() - base.powf(exponent)).abs();
        prop_assert!(diff <= 1e-6, "base {}, exponent {}: diff {}", base, exponent, diff);
    }

    #[test]
    fn prop_pow_approx_of_one_is_one(exponent in 0.0f64..10.0) {
        let Ok(r) = pow_approx(F::one(), F::new(exponent)) else {
            return Err(TestCaseError::fail("base one rejected"));
        };
        prop_assert_eq!(r.get(), 1.0);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Exact/approx consistency
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_exact_and_approx_agree(
        bi in balance_strategy(),
        bo in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        share in trade_share_strategy(),
        fee in fee_strategy(),
    ) {
        let args = [bi, wi, bo, wo, bi * share, fee];
        let (Some(exact), Some(approx)) = (
            swap(swap_amount_out_exact, args),
            swap(swap_amount_out_approx, args),
        ) else {
            return Err(TestCaseError::fail("valid swap rejected"));
        };
        prop_assert!(
            (exact - approx).abs() <= bo * 1e-6,
            "exact {} vs approx {}", exact, approx
        );
        prop_assert!(exact >= 0.0 && exact < bo);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Spot price monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_spot_price_monotone_in_balances(
        bi in balance_strategy(),
        bo in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        step in 1.0f64..1_000.0,
    ) {
        let price = |bi: f64, bo: f64| {
            spot_price(F::new(bi), F::new(wi), F::new(bo), F::new(wo)).map(|p| p.get())
        };
        let (Ok(base), Ok(more_in), Ok(more_out)) =
            (price(bi, bo), price(bi + step, bo), price(bi, bo + step))
        else {
            return Err(TestCaseError::fail("positive inputs rejected"));
        };
        prop_assert!(more_in > base, "Bi up: {} <= {}", more_in, base);
        prop_assert!(more_out < base, "Bo up: {} >= {}", more_out, base);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Fee monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_higher_fee_never_pays_more(
        bi in balance_strategy(),
        bo in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        share in trade_share_strategy(),
        low in fee_strategy(),
        bump in fee_strategy(),
    ) {
        let ai = bi * share;
        let high = low + bump;
        let (Some(cheap), Some(dear)) = (
            swap(swap_amount_out_exact, [bi, wi, bo, wo, ai, low]),
            swap(swap_amount_out_exact, [bi, wi, bo, wo, ai, high]),
        ) else {
            return Err(TestCaseError::fail("valid swap rejected"));
        };
        prop_assert!(dear <= cheap, "fee {} paid {} > fee {} paid {}", high, dear, low, cheap);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Target price
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_amount_in_reaches_target_price(
        bi in balance_strategy(),
        bo in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        lift in (0u32..=900u32).prop_map(|v| 1.0 + f64::from(v) / 1_000.0),
    ) {
        let Ok(current) = spot_price(F::new(bi), F::new(wi), F::new(bo), F::new(wo)) else {
            return Err(TestCaseError::fail("positive inputs rejected"));
        };
        let target = current.get() * lift;
        let Ok(ai) = spot_price_from_invariant_exact(
            F::new(bi), F::new(wi), F::new(bo), F::new(wo), F::new(target), F::zero(),
        ) else {
            return Err(TestCaseError::fail("target above current price rejected"));
        };
        let ai = ai.get();
        let ao = bo * (1.0 - (bi / (bi + ai)).powf(wi / wo));
        let after = ((bi + ai) / wi) / ((bo - ao) / wo);
        prop_assert!(
            ((after - target) / target).abs() < 1e-9,
            "target {} reached {}", target, after
        );
    }
}

// ---------------------------------------------------------------------------
// Property 6: Backend agreement
// ---------------------------------------------------------------------------

#[cfg(feature = "fixed-point")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_fixed_point_swap_matches_float(
        bi in balance_strategy(),
        bo in balance_strategy(),
        wi in weight_strategy(),
        wo in weight_strategy(),
        share in trade_share_strategy(),
        fee in fee_strategy(),
    ) {
        use crate::math::FixedPointArithmetic as FP;

        let args = [bi, wi, bo, wo, bi * share, fee];
        let Some(float) = swap(swap_amount_out_approx, args) else {
            return Err(TestCaseError::fail("valid float swap rejected"));
        };
        let [fbi, fwi, fbo, fwo, fai, ffee] = args.map(FP::from_f64);
        let Ok(fixed) = swap_amount_out_approx(fbi, fwi, fbo, fwo, fai, ffee) else {
            return Err(TestCaseError::fail("valid fixed-point swap rejected"));
        };
        prop_assert!(
            (fixed.to_f64_lossy() - float).abs() <= bo * 1e-6,
            "fixed {} vs float {}", fixed, float
        );
    }
}
