mod black_scholes;

pub use black_scholes::{BlackScholesMerton, RiskNeutralQuantities};
