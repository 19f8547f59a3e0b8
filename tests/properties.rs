use num_bigint::BigInt;
use proptest::prelude::*;
use scaled_amounts::numeric::{Money, Quantity};

// Integer reference for round half-up of `mantissa * 10^-scale` to `target` digits
fn round_half_up(mantissa: i128, scale: u32, target: u32) -> i128 {
    if scale <= target {
        return mantissa * 10i128.pow(target - scale);
    }
    div_half_up(mantissa, 10i128.pow(scale - target))
}

// Integer reference for `numerator / denominator` with ties away from zero
fn div_half_up(numerator: i128, denominator: i128) -> i128 {
    let quotient = numerator / denominator;
    let remainder = (numerator % denominator).abs();
    if remainder * 2 >= denominator.abs() {
        quotient + numerator.signum() * denominator.signum()
    } else {
        quotient
    }
}

fn fraction_digits(rendered: &str) -> usize {
    rendered.split('.').nth(1).map_or(0, str::len)
}

// Up to 36 significant digits, past any 96-bit decimal mantissa
fn raw_decimal() -> impl Strategy<Value = (i128, u32)> {
    let bound = 10i128.pow(35);
    (-bound..bound, 0u32..=20)
}

fn money() -> impl Strategy<Value = Money> {
    raw_decimal().prop_map(|(m, k)| Money::from_scaled(BigInt::from(m), u64::from(k)))
}

fn quantity() -> impl Strategy<Value = Quantity> {
    raw_decimal().prop_map(|(m, k)| Quantity::from_scaled(BigInt::from(m), u64::from(k)))
}

// Property 1: Construction rounds half-up to the fixed scale
proptest! {
    #[test]
    fn prop_money_rounds_half_up((m, k) in raw_decimal()) {
        let value = Money::from_scaled(BigInt::from(m), u64::from(k));
        prop_assert_eq!(value.units(), &BigInt::from(round_half_up(m, k, 2)));
    }

    #[test]
    fn prop_quantity_rounds_half_up((m, k) in raw_decimal()) {
        let value = Quantity::from_scaled(BigInt::from(m), u64::from(k));
        prop_assert_eq!(value.units(), &BigInt::from(round_half_up(m, k, 3)));
    }

    // Digit rule: keep the first two fraction digits, bump when the third is 5 or more
    #[test]
    fn prop_long_text_rounds_on_first_dropped_digit(
        negative in any::<bool>(),
        whole in "[0-9]{1,40}",
        fraction in "[0-9]{0,45}",
    ) {
        let sign = if negative { "-" } else { "" };
        let parsed: Money = format!("{sign}{whole}.{fraction}").parse().unwrap();

        let kept_digits = &fraction[..fraction.len().min(2)];
        let kept: Money = format!("{sign}{whole}.{kept_digits}").parse().unwrap();
        let cent = Money::from_scaled(BigInt::from(if negative { -1 } else { 1 }), 2);
        let expected = match fraction.as_bytes().get(2) {
            Some(digit) if *digit >= b'5' => &kept + &cent,
            _ => kept,
        };
        prop_assert_eq!(parsed, expected);
    }
}

// Property 2: Rendering always shows exactly the type's scale and parses back
proptest! {
    #[test]
    fn prop_rendering_has_fixed_fraction_digits(a in money(), q in quantity()) {
        let rendered_money = a.to_string();
        let rendered_quantity = q.to_string();
        prop_assert_eq!(fraction_digits(&rendered_money), 2);
        prop_assert_eq!(fraction_digits(&rendered_quantity), 3);
        prop_assert_eq!(rendered_money.parse::<Money>().unwrap(), a);
        prop_assert_eq!(rendered_quantity.parse::<Quantity>().unwrap(), q);
    }

    #[test]
    fn prop_float_construction_has_fixed_fraction_digits(x in -1.0e12f64..1.0e12f64) {
        prop_assert_eq!(fraction_digits(&Money::from_f64(x).unwrap().to_string()), 2);
        prop_assert_eq!(fraction_digits(&Quantity::from_f64(x).unwrap().to_string()), 3);
    }
}

// Property 3: Comparisons form a total order consistent with equality
proptest! {
    #[test]
    fn prop_comparison_totality(a in money(), b in money()) {
        let outcomes = [a < b, a == b, a > b];
        prop_assert_eq!(outcomes.iter().filter(|&&o| o).count(), 1);
        prop_assert_eq!(a <= b, a < b || a == b);
        prop_assert_eq!(a >= b, a > b || a == b);
    }
}

// Property 4: The receiver decides the result scale
proptest! {
    #[test]
    fn prop_cross_type_result_follows_receiver(a in money(), q in quantity()) {
        // Exact sum at three digits
        let exact: BigInt = a.units() * 10 + q.units();

        let as_money = &a + &q;
        prop_assert_eq!(&as_money, &Money::from_scaled(exact.clone(), 3));
        prop_assert_eq!(fraction_digits(&as_money.to_string()), 2);

        let as_quantity = &q + &a;
        prop_assert_eq!(&as_quantity, &Quantity::from_scaled(exact, 3));
        prop_assert_eq!(fraction_digits(&as_quantity.to_string()), 3);
    }

    #[test]
    fn prop_operations_leave_operands_unchanged(a in money(), q in quantity()) {
        let (before_a, before_q) = (a.to_string(), q.to_string());
        let _ = &a + &q;
        let _ = &a - &q;
        let _ = &a * &q;
        let _ = a.checked_div(&q);
        let _ = &q * &a;
        prop_assert_eq!(a.to_string(), before_a);
        prop_assert_eq!(q.to_string(), before_q);
    }
}

// Property 5: Division rounds the exact quotient half-up, once
proptest! {
    #[test]
    fn prop_money_by_quantity_division(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let dividend = Money::from_scaled(BigInt::from(a), 2);
        let divisor = Quantity::from_scaled(BigInt::from(b), 3);

        let quotient = dividend.checked_div(&divisor).unwrap();
        let expected = div_half_up(i128::from(a) * 1_000, i128::from(b));
        prop_assert_eq!(quotient.units(), &BigInt::from(expected));
    }

    #[test]
    fn prop_quantity_by_money_division(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let dividend = Quantity::from_scaled(BigInt::from(a), 3);
        let divisor = Money::from_scaled(BigInt::from(b), 2);

        let quotient = dividend.checked_div(&divisor).unwrap();
        let expected = div_half_up(i128::from(a) * 100, i128::from(b));
        prop_assert_eq!(quotient.units(), &BigInt::from(expected));
    }
}

// Property 6: Truncation drops the fraction toward zero
proptest! {
    #[test]
    fn prop_trunc_toward_zero(q in quantity()) {
        let whole = q.trunc();
        let rendered = q.to_string();
        let integer_part = rendered.split('.').next().unwrap_or_default();
        let expected = match integer_part {
            "-0" => "0.000".to_string(),
            digits => format!("{digits}.000"),
        };
        prop_assert_eq!(whole.to_string(), expected);
        prop_assert!(whole.abs() <= q.abs());
    }
}

// Property 7: Persisted bytes decode to an equal value
proptest! {
    #[test]
    fn prop_bytes_decode_to_equal_value(a in money(), q in quantity()) {
        prop_assert_eq!(Money::from_bytes(&a.to_bytes()).unwrap(), a);
        prop_assert_eq!(Quantity::from_bytes(&q.to_bytes()).unwrap(), q);
    }
}
