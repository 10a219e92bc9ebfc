
use bsm_lib::{
    black_scholes_call, call_payoffs, monte_carlo_call_estimate, monte_carlo_call_price,
    price_call_closed_form, price_call_monte_carlo, simulate, simulate_terminal_prices,
    MarketParameters, PricingError, SimulationConfig,
};
use test_utils::{create_test_config, reference_contract, reference_market, seeded_draws};

/// One million draws land within ±0.05 of the closed form for the reference
/// scenario, despite the different discounting conventions.
#[test]
fn test_monte_carlo_convergence_reference() {
    let draws = seeded_draws(1_000_000, 7);
    let mc = monte_carlo_call_price(100.0, 0.03, 0.4, 0.25, 105.0, &draws).unwrap();
    let cf = black_scholes_call(100.0, 0.03, 0.4, 0.25, 105.0).unwrap();
    println!("monte carlo {mc:.6} vs closed form {cf:.6}");
    assert!((mc - cf).abs() < 0.05, "mc {mc} vs closed form {cf}");
}

/// Across several scenarios the estimate sits within four standard errors.
#[test]
fn test_monte_carlo_within_standard_error() {
    let draws = seeded_draws(200_000, 11);
    let scenarios = [
        (100.0, 0.03, 0.4, 0.25, 105.0),
        (100.0, 0.01, 0.2, 1.0, 100.0),
        (50.0, 0.05, 0.6, 0.5, 40.0),
        (250.0, 0.0, 0.15, 2.0, 300.0),
    ];
    for (s, r, sigma, t, k) in scenarios {
        let est = monte_carlo_call_estimate(s, r, sigma, t, k, &draws).unwrap();
        let cf = black_scholes_call(s, r, sigma, t, k).unwrap();
        // Simple vs continuous discounting gap, second order in rT
        let discount_gap = cf * ((r * t).exp() / (1.0 + r * t) - 1.0).abs();
        let tol = 4.0 * est.std_error + discount_gap + 1e-9;
        assert!(
            (est.price - cf).abs() < tol,
            "S0={s} r={r} σ={sigma} T={t} K={k}: mc {} ± {} vs cf {cf}",
            est.price,
            est.std_error
        );
    }
}

/// σ = 0 makes every terminal price the deterministic forward S0·e^(rT).
#[test]
fn test_zero_volatility_degeneracy() {
    let draws = seeded_draws(1_000, 3);
    let prices = simulate_terminal_prices(100.0, 0.03, 0.0, 0.25, &draws).unwrap();
    let forward = 100.0 * (0.03_f64 * 0.25).exp();
    for p in prices {
        assert!((p - forward).abs() <= 1e-12 * forward, "{p} != {forward}");
    }
}

/// T = 0 returns spot for every draw; the price is intrinsic value.
#[test]
fn test_zero_time_degeneracy() {
    let draws = seeded_draws(1_000, 5);
    let prices = simulate_terminal_prices(110.0, 0.03, 0.4, 0.0, &draws).unwrap();
    assert!(prices.iter().all(|&p| p == 110.0));

    let itm = monte_carlo_call_price(110.0, 0.03, 0.4, 0.0, 100.0, &draws).unwrap();
    assert_eq!(itm, 10.0);
    let otm = monte_carlo_call_price(90.0, 0.03, 0.4, 0.0, 100.0, &draws).unwrap();
    assert_eq!(otm, 0.0);

    // Approaching from above
    let near = monte_carlo_call_price(110.0, 0.03, 0.4, 1e-12, 100.0, &draws).unwrap();
    assert!((near - 10.0).abs() < 1e-4, "{near}");
}

#[test]
fn test_payoff_floor() {
    let draws = seeded_draws(10_000, 9);
    let prices = simulate_terminal_prices(100.0, 0.03, 0.4, 0.25, &draws).unwrap();
    let payoffs = call_payoffs(&prices, 105.0).unwrap();
    for (s_t, payoff) in prices.iter().zip(&payoffs) {
        assert!(*payoff >= 0.0);
        if *s_t <= 105.0 {
            assert_eq!(*payoff, 0.0);
        } else {
            assert_eq!(*payoff, s_t - 105.0);
        }
    }
}

/// Reordering the draws reorders the terminal prices identically.
#[test]
fn test_positional_correspondence() {
    let draws = seeded_draws(257, 13);
    let prices = simulate_terminal_prices(100.0, 0.03, 0.4, 0.25, &draws).unwrap();

    let mut order: Vec<usize> = (0..draws.len()).collect();
    order.reverse();
    order.rotate_left(31);
    let shuffled: Vec<f64> = order.iter().map(|&i| draws[i]).collect();
    let shuffled_prices = simulate_terminal_prices(100.0, 0.03, 0.4, 0.25, &shuffled).unwrap();

    for (pos, &i) in order.iter().enumerate() {
        assert_eq!(shuffled_prices[pos], prices[i]);
    }
}

#[test]
fn test_empty_sample_set() {
    assert_eq!(
        monte_carlo_call_price(100.0, 0.03, 0.4, 0.25, 105.0, &[]),
        Err(PricingError::EmptySampleSet)
    );
}

#[test]
fn test_simulator_rejects_empty_draws() {
    assert_eq!(
        simulate_terminal_prices(100.0, 0.03, 0.4, 0.25, &[]),
        Err(PricingError::EmptySampleSet)
    );
}

/// Simple-interest discounting needs 1 + rT > 0; otherwise the factor is
/// infinite or negative and the price must be rejected rather than returned.
#[test]
fn test_non_positive_discount_base_rejected() {
    let draws = [0.1, -0.3, 0.7];
    for (r, t, k) in [(-1.0, 1.0, 1000.0), (-1.0, 1.0, 10.0), (-2.0, 1.0, 10.0)] {
        let result = monte_carlo_call_price(100.0, r, 0.2, t, k, &draws);
        assert!(
            matches!(
                result,
                Err(PricingError::InvalidParameter { name: "rate", .. })
            ),
            "r={r} T={t} K={k}: {result:?}"
        );
    }

    let market = MarketParameters::new(100.0, -2.0, 0.2, 1.0).unwrap();
    assert!(simulate(&market, &reference_contract(), &create_test_config(100)).is_err());

    // Negative rates with 1 + rT > 0 still price to a finite non-negative value
    let price = monte_carlo_call_price(100.0, -0.5, 0.2, 1.0, 10.0, &draws).unwrap();
    assert!(price.is_finite() && price >= 0.0, "{price}");
}

#[test]
fn test_invalid_inputs_rejected() {
    let draws = [0.1, -0.2];
    assert!(simulate_terminal_prices(-100.0, 0.03, 0.4, 0.25, &draws).is_err());
    assert!(simulate_terminal_prices(100.0, 0.03, -0.4, 0.25, &draws).is_err());
    assert!(simulate_terminal_prices(100.0, 0.03, 0.4, -0.25, &draws).is_err());
    assert!(monte_carlo_call_price(100.0, 0.03, 0.4, 0.25, 0.0, &draws).is_err());
}

/// Same seed, same estimate; the high-level entry point matches the raw one.
#[test]
fn test_seeded_pipeline_is_reproducible() {
    let market = reference_market();
    let contract = reference_contract();
    let config = create_test_config(50_000);

    let a = price_call_monte_carlo(&market, &contract, &config).unwrap();
    let b = price_call_monte_carlo(&market, &contract, &config).unwrap();
    assert_eq!(a, b);

    let run = simulate(&market, &contract, &config).unwrap();
    assert_eq!(run.draws.len(), 50_000);
    assert_eq!(run.terminal_prices.len(), 50_000);
    assert_eq!(run.payoffs.len(), 50_000);
    assert_eq!(run.estimate, a);

    let raw = monte_carlo_call_estimate(
        market.spot,
        market.rate,
        market.volatility,
        market.expiry,
        contract.strike,
        &run.draws,
    )
    .unwrap();
    assert_eq!(raw, a);
}

/// Antithetic pairing keeps the estimate unbiased. The reported standard error
/// treats the pairs as independent, which overstates the true error.
#[test]
fn test_antithetic_estimate() {
    let market = reference_market();
    let contract = reference_contract();
    let config = SimulationConfig {
        antithetic: true,
        ..create_test_config(400_000)
    };

    let est = price_call_monte_carlo(&market, &contract, &config).unwrap();
    let cf = price_call_closed_form(&market, &contract).unwrap();
    assert!(
        (est.price - cf).abs() < 4.0 * est.std_error + 1e-3,
        "antithetic mc {} ± {} vs cf {cf}",
        est.price,
        est.std_error
    );
}

#[test]
fn test_invalid_config_rejected() {
    let config = SimulationConfig {
        num_draws: 0,
        ..SimulationConfig::minimal()
    };
    assert!(matches!(
        price_call_monte_carlo(&reference_market(), &reference_contract(), &config),
        Err(PricingError::InvalidConfig(_))
    ));
}
