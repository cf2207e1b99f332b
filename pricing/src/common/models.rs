/// European option style: a plain call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseType {
    Call,
    Put,
}

/// A price sensitivity figure of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Greek {
    /// sensitivity of the option price to the asset price
    Delta,
    /// sensitivity of delta to the asset price
    Gamma,
    /// annualized rate of time decay of the option price
    Theta,
    /// sensitivity of the option price to the risk-free rate
    Rho,
    /// sensitivity of the option price to the volatility
    Vega,
}

#[derive(Debug, Clone, Copy)]
pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
    /// the annualized continuous dividend yield of the asset
    pub dividend_yield: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        dividend_yield: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
            dividend_yield,
        }
    }
}

/// The full result record of a single option evaluation: the theoretical
/// value together with all sensitivity figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSummary {
    pub exercise_type: ExerciseType,
    pub price: f64,
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub rho: f64,
    pub vega: f64,
}
