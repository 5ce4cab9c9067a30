//! Reference points shared by the integration suite.
//!
//! Every expected value is the `f64` closed-form result (`powf` for the
//! power).  Tables are immutable and passed explicitly to the checks that
//! use them.

/// `(Bi, Wi, Bo, Wo) -> spot price`.
#[derive(Debug, Clone, Copy)]
pub struct SpotPricePoint {
    pub bi: f64,
    pub wi: f64,
    pub bo: f64,
    pub wo: f64,
    pub res: f64,
}

/// `(Bi, Wi, Bo, Wo, Ai, fee) -> amount out`.
#[derive(Debug, Clone, Copy)]
pub struct SwapPoint {
    pub bi: f64,
    pub wi: f64,
    pub bo: f64,
    pub wo: f64,
    pub ai: f64,
    pub fee: f64,
    pub res: f64,
}

/// `(Bi, Wi, Bo, Wo, SER1, fee) -> amount in`.
#[derive(Debug, Clone, Copy)]
pub struct InvariantPoint {
    pub bi: f64,
    pub wi: f64,
    pub bo: f64,
    pub wo: f64,
    pub ser1: f64,
    pub fee: f64,
    pub res: f64,
}

/// `(base, exponent) -> base^exponent`.
#[derive(Debug, Clone, Copy)]
pub struct PowPoint {
    pub base: f64,
    pub exp: f64,
    pub res: f64,
}

/// Absolute tolerance for approximate and fixed-point results.
pub const APPROX_TOLERANCE: f64 = 1e-6;

/// Absolute tolerance for the `f64` exact paths.
pub const FLOAT_EQ_TOLERANCE: f64 = 1e-12;

pub const SPOT_PRICE_POINTS: &[SpotPricePoint] = &[
    SpotPricePoint { bi: 10.0, wi: 0.3, bo: 5260.0, wo: 0.3, res: 0.0019011406844106462 },
    SpotPricePoint { bi: 1.0, wi: 0.5, bo: 2.0, wo: 0.5, res: 0.5 },
    SpotPricePoint { bi: 100.0, wi: 0.2, bo: 250.0, wo: 0.8, res: 1.6 },
    SpotPricePoint { bi: 4.5, wi: 1.0, bo: 3.0, wo: 2.0, res: 3.0 },
    SpotPricePoint { bi: 0.5, wi: 0.25, bo: 40.0, wo: 0.75, res: 0.0375 },
    SpotPricePoint { bi: 1000.0, wi: 0.9, bo: 1000.0, wo: 0.1, res: 0.1111111111111111 },
];

pub const SWAP_POINTS: &[SwapPoint] = &[
    SwapPoint { bi: 2.0, wi: 1.0, bo: 2.0, wo: 1.0, ai: 1.0, fee: 0.0, res: 0.6666666666666667 },
    SwapPoint { bi: 10.0, wi: 0.3, bo: 5260.0, wo: 0.3, ai: 0.003, fee: 0.003, res: 1.5727955768429691 },
    SwapPoint { bi: 3.0, wi: 0.2, bo: 10.0, wo: 0.8, ai: 1.0, fee: 0.01, res: 0.6881260235969688 },
    SwapPoint { bi: 100.0, wi: 0.8, bo: 400.0, wo: 0.2, ai: 20.0, fee: 0.003, res: 206.71248022720116 },
    SwapPoint { bi: 50.0, wi: 0.5, bo: 50.0, wo: 0.5, ai: 10.0, fee: 0.05, res: 7.9831932773109235 },
    SwapPoint { bi: 1.0, wi: 0.1, bo: 1.0, wo: 0.9, ai: 0.5, fee: 0.0, res: 0.044051921577024866 },
    SwapPoint { bi: 8.0, wi: 2.0, bo: 6.0, wo: 1.0, ai: 3.0, fee: 0.02, res: 2.7915403614196093 },
    SwapPoint { bi: 200.0, wi: 0.25, bo: 10.0, wo: 0.75, ai: 150.0, fee: 0.1, res: 1.579683882167695 },
];

pub const INVARIANT_POINTS: &[InvariantPoint] = &[
    InvariantPoint { bi: 10.0, wi: 0.3, bo: 10.0, wo: 0.3, ser1: 1.5, fee: 0.003, res: 2.2542113479597687 },
    InvariantPoint { bi: 100.0, wi: 0.8, bo: 400.0, wo: 0.2, ser1: 0.1, fee: 0.01, res: 9.9556104349614 },
    InvariantPoint { bi: 3.0, wi: 0.2, bo: 10.0, wo: 0.8, ser1: 1.5, fee: 0.0, res: 0.5863218742126386 },
    InvariantPoint { bi: 50.0, wi: 0.5, bo: 50.0, wo: 0.5, ser1: 1.9, fee: 0.05, res: 19.91604606363274 },
    InvariantPoint { bi: 8.0, wi: 2.0, bo: 6.0, wo: 1.0, ser1: 1.0, fee: 0.02, res: 1.1813407555374031 },
    InvariantPoint { bi: 1.0, wi: 0.1, bo: 1.0, wo: 0.9, ser1: 12.5, fee: 0.003, res: 0.3450397131730582 },
];

pub const POW_POINTS: &[PowPoint] = &[
    PowPoint { base: 1.5, exp: 1.5, res: 1.8371173070873836 },
    PowPoint { base: 0.25, exp: 0.5, res: 0.5 },
    PowPoint { base: 1.9, exp: 9.7, res: 505.71976707985056 },
    PowPoint { base: 0.06, exp: 0.5, res: 0.2449489742783178 },
    PowPoint { base: 1.01, exp: 0.01, res: 1.0000995082591502 },
    PowPoint { base: 0.75, exp: 3.3, res: 0.3869921621147632 },
    PowPoint { base: 1.2, exp: 7.25, res: 3.750282936075115 },
    PowPoint { base: 0.5, exp: 2.0, res: 0.25 },
    PowPoint { base: 1.95, exp: 0.37, res: 1.2803031269867686 },
    PowPoint { base: 0.3, exp: 0.1, res: 0.8865681505652133 },
];
