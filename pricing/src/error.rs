use thiserror::Error;

/// Domain violations of the pricing model, raised at construction.
/// The logarithm of the moneyness and the division by `vola * sqrt(T)`
/// require all four bounds; rates and dividend yields may be any real.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PricingError {
    #[error("asset price must be positive, got {0}")]
    NonPositiveAssetPrice(f64),
    #[error("strike must be positive, got {0}")]
    NonPositiveStrike(f64),
    #[error("time to expiration must be positive, got {0}")]
    NonPositiveExpiry(f64),
    #[error("volatility must be positive, got {0}")]
    NonPositiveVola(f64),
}
