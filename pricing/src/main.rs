use pricing::analytic::BlackScholesMerton;
use pricing::common::models::ExerciseType;
use pricing::error::PricingError;

/// Prices one sample call and one sample put and prints the full summaries.
fn main() -> Result<(), PricingError> {
    let (asset_price, strike, time_to_expiration) = (100.0, 102.0, 1.0);
    let (rfr, vola, dividend_yield) = (0.05, 0.2, 0.02);

    let call = BlackScholesMerton::new(
        ExerciseType::Call,
        asset_price,
        strike,
        time_to_expiration,
        rfr,
        vola,
        dividend_yield,
    )?;
    println!("call : {:?}", call.summary());

    let put = BlackScholesMerton::new(
        ExerciseType::Put,
        asset_price,
        strike,
        time_to_expiration,
        rfr,
        vola,
        dividend_yield,
    )?;
    println!("put : {:?}", put.summary());

    Ok(())
}
