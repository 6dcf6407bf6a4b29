use emi_core::amortization::{self, LoanInput, LoanResult};
use emi_core::EmiError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Helpers
// ===========================================================================

fn loan(principal: Decimal, rate: Decimal, years: Decimal) -> LoanInput {
    LoanInput {
        principal,
        annual_rate_percent: rate,
        term_years: years,
    }
}

/// A spread of realistic consumer and mortgage loans.
fn sample_loans() -> Vec<LoanInput> {
    vec![
        loan(dec!(100_000), dec!(5), dec!(10)),
        loan(dec!(50_000), dec!(0), dec!(5)),
        loan(dec!(10_000), dec!(12), dec!(1)),
        loan(dec!(1_000_000), dec!(20), dec!(30)),
        loan(dec!(10_000), dec!(0.1), dec!(1)),
        loan(dec!(350_000), dec!(3.75), dec!(25)),
        loan(dec!(7_500), dec!(18.9), dec!(3.5)),
        loan(dec!(0.01), dec!(5), dec!(2)),
    ]
}

fn compute(input: &LoanInput) -> LoanResult {
    amortization::compute_emi(input).unwrap()
}

// ===========================================================================
// Worked scenarios
// ===========================================================================

#[test]
fn test_ten_year_loan_at_five_percent() {
    let result = compute(&loan(dec!(100_000), dec!(5), dec!(10)));

    assert_eq!(result.schedule.len(), 120);
    assert!((result.monthly_payment - dec!(1060.66)).abs() < dec!(0.01));
    // 1060.655 * 120 = 127278.62
    assert!((result.total_payment - dec!(127279.2)).abs() < dec!(1));
    assert!((result.total_interest - dec!(27279.2)).abs() < dec!(1));
    assert_eq!(result.schedule[119].month, 120);
    assert_eq!(result.schedule[119].remaining_balance, Decimal::ZERO);
}

#[test]
fn test_interest_free_loan() {
    let result = compute(&loan(dec!(50_000), dec!(0), dec!(5)));

    assert_eq!(result.schedule.len(), 60);
    assert_eq!(result.monthly_payment, dec!(50_000) / dec!(60));
    assert!((result.monthly_payment - dec!(833.33)).abs() < dec!(0.01));
    for row in &result.schedule {
        assert_eq!(row.interest_portion, Decimal::ZERO, "month {}", row.month);
        assert_eq!(row.principal_portion, result.monthly_payment);
    }
}

#[test]
fn test_one_year_loan_first_month_interest() {
    let result = compute(&loan(dec!(10_000), dec!(12), dec!(1)));
    assert_eq!(result.schedule.len(), 12);
    assert_eq!(result.schedule[0].interest_portion, dec!(100));
}

#[test]
fn test_invalid_principal() {
    let err = amortization::compute_emi(&loan(dec!(-1), dec!(5), dec!(10))).unwrap_err();
    assert!(matches!(err, EmiError::InvalidPrincipal(_)), "got {err:?}");
    assert!(err.to_string().contains("principal"));
}

#[test]
fn test_invalid_term() {
    let err = amortization::compute_emi(&loan(dec!(100_000), dec!(5), dec!(0))).unwrap_err();
    assert!(matches!(err, EmiError::InvalidTerm(_)), "got {err:?}");
}

#[test]
fn test_invalid_rate() {
    let err = amortization::compute_emi(&loan(dec!(100_000), dec!(-5), dec!(10))).unwrap_err();
    assert!(matches!(err, EmiError::InvalidRate(_)), "got {err:?}");
}

#[test]
fn test_negative_term() {
    let err = amortization::compute_emi(&loan(dec!(100_000), dec!(5), dec!(-3))).unwrap_err();
    assert!(matches!(err, EmiError::InvalidTerm(_)), "got {err:?}");
}

// ===========================================================================
// Invariants over a spread of loans
// ===========================================================================

#[test]
fn test_schedule_length_matches_rounded_term() {
    for input in sample_loans() {
        let result = compute(&input);
        let expected = amortization::term_months(input.term_years).unwrap();
        assert_eq!(result.term_months, expected);
        assert_eq!(result.schedule.len(), expected as usize);
        for (i, row) in result.schedule.iter().enumerate() {
            assert_eq!(row.month, i as u32 + 1);
        }
    }
}

#[test]
fn test_portions_sum_to_installment() {
    for input in sample_loans() {
        let result = compute(&input);
        let tolerance = result.monthly_payment * dec!(0.000001);
        for row in &result.schedule {
            assert_eq!(row.installment, result.monthly_payment);
            let diff = (row.principal_portion + row.interest_portion - row.installment).abs();
            assert!(
                diff <= tolerance,
                "month {}: portions differ from installment by {diff}",
                row.month
            );
        }
    }
}

#[test]
fn test_balance_non_increasing_and_fully_repaid() {
    for input in sample_loans() {
        let result = compute(&input);
        let mut previous = input.principal;
        for row in &result.schedule {
            assert!(row.remaining_balance >= Decimal::ZERO);
            assert!(
                row.remaining_balance <= previous,
                "month {}: balance rose from {previous} to {}",
                row.month,
                row.remaining_balance
            );
            previous = row.remaining_balance;
        }
        assert_eq!(result.schedule.last().unwrap().remaining_balance, Decimal::ZERO);
    }
}

#[test]
fn test_totals_consistent() {
    for input in sample_loans() {
        let result = compute(&input);
        assert_eq!(
            result.total_payment,
            result.monthly_payment * Decimal::from(result.term_months)
        );
        assert_eq!(result.total_interest, result.total_payment - input.principal);
        assert_eq!(result.principal, input.principal);
    }
}

#[test]
fn test_principal_portions_repay_loan() {
    for input in sample_loans() {
        let result = compute(&input);
        let repaid: Decimal = result.schedule.iter().map(|r| r.principal_portion).sum();
        let tolerance = input.principal * dec!(0.000001);
        assert!(
            (repaid - input.principal).abs() <= tolerance,
            "repaid {repaid} vs principal {}",
            input.principal
        );
    }
}

#[test]
fn test_higher_rate_means_higher_payment() {
    let low = compute(&loan(dec!(200_000), dec!(3), dec!(20)));
    let high = compute(&loan(dec!(200_000), dec!(7), dec!(20)));
    assert!(high.monthly_payment > low.monthly_payment);
    assert!(high.total_interest > low.total_interest);
}

#[test]
fn test_calls_are_independent() {
    let input = loan(dec!(123_456.78), dec!(4.35), dec!(17));
    let a = compute(&input);
    let b = compute(&input);
    assert_eq!(a.monthly_payment, b.monthly_payment);
    assert_eq!(a.schedule, b.schedule);
}

// ===========================================================================
// Envelope
// ===========================================================================

#[test]
fn test_calculate_loan_serializes_snake_case() {
    let out = amortization::calculate_loan(&loan(dec!(10_000), dec!(12), dec!(1))).unwrap();
    let json = serde_json::to_value(&out).unwrap();

    assert!(json["result"]["monthly_payment"].is_string());
    assert_eq!(json["result"]["schedule"].as_array().unwrap().len(), 12);
    let first_interest: Decimal = json["result"]["schedule"][0]["interest_portion"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(first_interest, dec!(100));
    assert_eq!(json["result"]["term_months"], 12);
}

#[test]
fn test_loan_input_accepts_json_numbers_and_strings() {
    let input: LoanInput = serde_json::from_str(
        r#"{"principal": 100000, "annual_rate_percent": "5", "term_years": 10}"#,
    )
    .unwrap();
    assert_eq!(input.principal, dec!(100000));
    assert_eq!(input.annual_rate_percent, dec!(5));
    assert_eq!(input.term_years, dec!(10));
}

#[test]
fn test_loan_input_rejects_non_finite_values() {
    let cases = [
        r#"{"principal": "NaN", "annual_rate_percent": 5, "term_years": 10}"#,
        r#"{"principal": NaN, "annual_rate_percent": 5, "term_years": 10}"#,
        r#"{"principal": 100000, "annual_rate_percent": "inf", "term_years": 10}"#,
        r#"{"principal": 100000, "annual_rate_percent": 5, "term_years": "-inf"}"#,
        r#"{"principal": 1e400, "annual_rate_percent": 5, "term_years": 10}"#,
    ];
    for case in cases {
        assert!(
            serde_json::from_str::<LoanInput>(case).is_err(),
            "accepted non-finite input: {case}"
        );
    }
}

// ===========================================================================
// Precision envelope
// ===========================================================================

#[test]
fn test_500_year_loan_reports_precision_loss() {
    for principal in [dec!(1000), dec!(0.01)] {
        let err = amortization::compute_emi(&loan(principal, dec!(12), dec!(500))).unwrap_err();
        assert!(
            matches!(err, EmiError::PrecisionLoss { .. }),
            "principal {principal}: got {err:?}"
        );
        assert!(err.to_string().contains("Precision loss"));
    }
}

#[test]
fn test_closing_residual_within_tolerance_when_schedule_returned() {
    // Long but representable: every returned schedule repays the principal
    for input in [
        loan(dec!(1000), dec!(12), dec!(100)),
        loan(dec!(250000), dec!(30), dec!(40)),
    ] {
        let result = amortization::compute_emi(&input).unwrap();
        let repaid: Decimal = result.schedule.iter().map(|r| r.principal_portion).sum();
        assert!(
            (repaid - input.principal).abs() <= input.principal * dec!(0.000001),
            "repaid {repaid} of {}",
            input.principal
        );
    }
}
