//! Closed-form payoff checked against single-debt simulations

use crate::model::DebtEntry;
use crate::payoff::{months_to_payoff, total_interest_paid};
use crate::simulation::{PayoffPolicy, SimulationConfig, simulate};

fn single(balance: f64, rate: f64, payment: f64) -> DebtEntry {
    DebtEntry {
        id: "d".into(),
        balance,
        interest_rate: rate,
        minimum_payment: payment,
        ..Default::default()
    }
}

#[test]
fn test_closed_form_tracks_simulator() {
    let config = SimulationConfig::new(360, PayoffPolicy::Independent);

    for balance in [500.0, 1000.0, 2500.0, 5000.0, 12_000.0, 25_000.0] {
        for rate in [0.0, 3.5, 5.8, 12.0, 19.99, 24.99] {
            for payment in [50.0, 100.0, 150.0, 280.0, 500.0] {
                let closed = months_to_payoff(balance, rate, payment);
                let simulated = simulate(&[single(balance, rate, payment)], &config)
                    .months_to_debt_free();

                match closed {
                    Some(months) if months <= 360 => {
                        let simulated = simulated.unwrap_or(u32::MAX);
                        assert!(
                            months.abs_diff(simulated) <= 1,
                            "{balance} @ {rate}%, {payment}/mo: closed {months}, simulated {simulated}"
                        );
                    }
                    _ => assert_eq!(
                        simulated, None,
                        "{balance} @ {rate}% paying {payment} should never clear in 360 months"
                    ),
                }
            }
        }
    }
}

#[test]
fn test_known_single_debt_agrees() {
    let schedule = simulate(
        &[single(1000.0, 12.0, 100.0)],
        &SimulationConfig::new(360, PayoffPolicy::Independent),
    );
    assert_eq!(months_to_payoff(1000.0, 12.0, 100.0), Some(11));
    assert_eq!(schedule.months_to_debt_free(), Some(11));
}

#[test]
fn test_closed_form_interest_bounds_simulated_interest() {
    // Closed-form interest counts the unused part of the last payment, so it
    // can only overstate what the simulator accrues.
    let config = SimulationConfig::new(360, PayoffPolicy::Independent);
    let cases = [
        (5000.0, 19.99, 150.0),
        (1000.0, 12.0, 100.0),
        (25_000.0, 5.8, 280.0),
    ];
    for (balance, rate, payment) in cases {
        let closed = total_interest_paid(balance, rate, payment).unwrap_or(f64::INFINITY);
        let simulated = simulate(&[single(balance, rate, payment)], &config).total_interest();
        assert!(
            simulated <= closed + 0.01,
            "{balance} @ {rate}%: simulated {simulated} exceeds closed form {closed}"
        );
    }
}

#[test]
fn test_both_report_never_for_underwater_debt() {
    assert_eq!(months_to_payoff(1000.0, 24.0, 15.0), None);
    assert_eq!(total_interest_paid(1000.0, 24.0, 15.0), None);

    let schedule = simulate(
        &[single(1000.0, 24.0, 15.0)],
        &SimulationConfig::new(360, PayoffPolicy::Independent),
    );
    assert_eq!(schedule.months_to_debt_free(), None);
}
