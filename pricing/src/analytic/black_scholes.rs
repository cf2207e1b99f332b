use std::collections::HashMap;
use std::f64::consts::PI;

use crate::common::models::{DerivativeParameter, ExerciseType, Greek, OptionSummary};
use crate::error::PricingError;
use probability::distribution::{Continuous, Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub(crate) fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

/// The risk-neutral moneyness measures of the Black-Scholes formula and the
/// standard normal CDF and density evaluated at them, computed once per option.
/// https://en.wikipedia.org/wiki/Greeks_(finance)
#[derive(Debug, Clone, Copy)]
pub struct RiskNeutralQuantities {
    pub d1: f64,
    pub d2: f64,
    pub cdf_d1: f64,
    pub cdf_d2: f64,
    pub cdf_neg_d1: f64,
    pub cdf_neg_d2: f64,
    pub pdf_d1: f64,
    pub pdf_d2: f64,
    pub pdf_neg_d1: f64,
    pub pdf_neg_d2: f64,
}

impl RiskNeutralQuantities {
    /// Requires `asset_price`, `strike`, `time_to_expiration` and `vola` to be
    /// positive (checked by the pricer constructor).
    fn from_parameter(dp: &DerivativeParameter) -> Self {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr - dp.dividend_yield + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        let d2 = d1 - sigma_exp;

        Self {
            d1,
            d2,
            cdf_d1: cdf(d1),
            cdf_d2: cdf(d2),
            cdf_neg_d1: cdf(-d1),
            cdf_neg_d2: cdf(-d2),
            pdf_d1: pdf(d1),
            pdf_d2: pdf(d2),
            pdf_neg_d1: pdf(-d1),
            pdf_neg_d2: pdf(-d2),
        }
    }
}

/// European Put and Call option prices and greeks for stocks paying a
/// continuous dividend yield.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
#[derive(Debug, Clone)]
pub struct BlackScholesMerton {
    exercise_type: ExerciseType,
    params: DerivativeParameter,
    quantities: RiskNeutralQuantities,
}

impl BlackScholesMerton {
    pub fn new(
        exercise_type: ExerciseType,
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        dividend_yield: f64,
    ) -> Result<Self, PricingError> {
        let params = DerivativeParameter::new(
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
            dividend_yield,
        );
        Self::with_params(exercise_type, params)
    }

    /// Checks the domain bounds of the model and caches the risk-neutral
    /// quantities; the pricer is immutable afterwards.
    pub fn with_params(
        exercise_type: ExerciseType,
        params: DerivativeParameter,
    ) -> Result<Self, PricingError> {
        if params.asset_price <= 0.0 {
            return Err(PricingError::NonPositiveAssetPrice(params.asset_price));
        }
        if params.strike <= 0.0 {
            return Err(PricingError::NonPositiveStrike(params.strike));
        }
        if params.time_to_expiration <= 0.0 {
            return Err(PricingError::NonPositiveExpiry(params.time_to_expiration));
        }
        if params.vola <= 0.0 {
            return Err(PricingError::NonPositiveVola(params.vola));
        }

        let quantities = RiskNeutralQuantities::from_parameter(&params);
        Ok(Self {
            exercise_type,
            params,
            quantities,
        })
    }

    pub fn exercise_type(&self) -> ExerciseType {
        self.exercise_type
    }

    pub fn params(&self) -> &DerivativeParameter {
        &self.params
    }

    pub fn quantities(&self) -> &RiskNeutralQuantities {
        &self.quantities
    }

    fn rate_discount(&self) -> f64 {
        (-self.params.rfr * self.params.time_to_expiration).exp()
    }

    fn yield_discount(&self) -> f64 {
        (-self.params.dividend_yield * self.params.time_to_expiration).exp()
    }

    /// The price (theoretical value) of the option. The put value is derived
    /// from the call value through put-call parity rather than evaluated as a
    /// standalone formula, so call/put pairs satisfy the parity identity to
    /// rounding error.
    pub fn price(&self) -> f64 {
        let call = self.params.asset_price * self.yield_discount() * self.quantities.cdf_d1
            - self.params.strike * self.rate_discount() * self.quantities.cdf_d2;

        match self.exercise_type {
            ExerciseType::Call => call,
            // put-call parity
            ExerciseType::Put => {
                call + self.params.strike * self.rate_discount()
                    - self.params.asset_price * self.yield_discount()
            }
        }
    }

    /// Sensitivity of the option price to the asset price.
    pub fn delta(&self) -> f64 {
        match self.exercise_type {
            ExerciseType::Call => self.quantities.cdf_d1 * self.yield_discount(),
            ExerciseType::Put => (self.quantities.cdf_d1 - 1.0) * self.yield_discount(),
        }
    }

    /// Sensitivity of delta to the asset price; identical for calls and puts.
    /// Written in the discounted-strike form `K e^(-rT) pdf(d2) / (S^2 v sqrt(T))`,
    /// which equals the spot form `e^(-qT) pdf(d1) / (S v sqrt(T))` through the
    /// identity `K e^(-rT) pdf(d2) = S e^(-qT) pdf(d1)`.
    pub fn gamma(&self) -> f64 {
        self.params.strike * self.rate_discount() * self.quantities.pdf_d2
            / (self.params.asset_price.powi(2)
                * self.params.vola
                * self.params.time_to_expiration.sqrt())
    }

    /// Annualized rate of decay of the option price: negative for a standard
    /// long call losing value as expiration approaches.
    pub fn theta(&self) -> f64 {
        let dp = &self.params;
        let decay = -1.0
            * (dp.asset_price * dp.vola * self.yield_discount()
                / (2.0 * dp.time_to_expiration.sqrt() * (2.0 * PI).sqrt())
                * (-self.quantities.d1 * self.quantities.d1 / 2.0).exp());

        match self.exercise_type {
            ExerciseType::Call => {
                decay - dp.rfr * dp.strike * self.rate_discount() * self.quantities.cdf_d2
                    + dp.dividend_yield
                        * dp.asset_price
                        * self.yield_discount()
                        * self.quantities.cdf_d1
            }
            ExerciseType::Put => {
                decay + dp.rfr * dp.strike * self.rate_discount() * self.quantities.cdf_neg_d2
                    - dp.dividend_yield
                        * dp.asset_price
                        * self.yield_discount()
                        * self.quantities.cdf_neg_d1
            }
        }
    }

    /// Sensitivity of the option price to the risk-free rate.
    pub fn rho(&self) -> f64 {
        let discounted_strike = self.params.time_to_expiration
            * self.params.strike
            * self.rate_discount();

        match self.exercise_type {
            ExerciseType::Call => discounted_strike * self.quantities.cdf_d2,
            ExerciseType::Put => discounted_strike * self.quantities.cdf_neg_d2,
        }
    }

    /// Sensitivity of the option price to the volatility; identical for calls
    /// and puts. As with [`Self::gamma`], the discounted-strike form
    /// `sqrt(T) K e^(-rT) pdf(d2)` is used instead of the textbook spot form
    /// `sqrt(T) S e^(-qT) pdf(d1)`; the two agree through the same identity.
    pub fn vega(&self) -> f64 {
        self.params.time_to_expiration.sqrt()
            * self.params.strike
            * self.rate_discount()
            * self.quantities.pdf_d2
    }

    /// All sensitivity figures of the option, keyed by greek.
    pub fn greeks(&self) -> HashMap<Greek, f64> {
        HashMap::from([
            (Greek::Delta, self.delta()),
            (Greek::Gamma, self.gamma()),
            (Greek::Theta, self.theta()),
            (Greek::Rho, self.rho()),
            (Greek::Vega, self.vega()),
        ])
    }

    /// The price and all greeks as one record; each value is evaluated through
    /// the corresponding operation on the shared cached quantities.
    pub fn summary(&self) -> OptionSummary {
        OptionSummary {
            exercise_type: self.exercise_type,
            price: self.price(),
            delta: self.delta(),
            gamma: self.gamma(),
            theta: self.theta(),
            rho: self.rho(),
            vega: self.vega(),
        }
    }
}
