//! Big-O notation rendering.
//!
//! Summands are joined with ` + `, variables within a product with `·`.
//! Within one variable, factorial and exponential parts come first and are
//! also joined with `·`, while `n` and its logarithms share a space, so
//! the output reads `O(n log n)`, `O(2^n·n)`, `O(n·m)` or `O(n + k log k)`.

use num_traits::{One, Zero};
use ordo_numeric::{Exponent, Rational};
use std::fmt::{self, Write};

use crate::{Growth, Monomial, Profile, Variable};

const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// The expression without the surrounding `O(…)`.
pub(crate) fn notation(growth: &Growth) -> String {
    growth
        .terms()
        .iter()
        .map(monomial)
        .collect::<Vec<_>>()
        .join(" + ")
}

fn monomial(term: &Monomial) -> String {
    if term.is_constant() {
        return "1".to_string();
    }
    term.factors()
        .iter()
        .map(|(var, profile)| factor(var, profile))
        .collect::<Vec<_>>()
        .join("·")
}

/// Components of one variable, fastest first: `n!·2^n·n log n`.
fn factor(var: &Variable, profile: &Profile) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !profile.factorial_power().is_zero() {
        parts.push(factorial_part(var, profile.factorial_power()));
    }
    if !profile.base().is_one() {
        parts.push(format!("{}^{var}", grouped(profile.base())));
    }
    let mut polylog: Vec<String> = Vec::new();
    if !profile.degree().is_zero() {
        polylog.push(format!("{var}{}", power_suffix(profile.degree())));
    }
    if !profile.log_power().is_zero() {
        polylog.push(log_part(var, profile.log_power()));
    }
    if !polylog.is_empty() {
        parts.push(polylog.join(" "));
    }
    parts.join("·")
}

fn log_part(var: &Variable, power: &Rational) -> String {
    if power.is_one() {
        format!("log {var}")
    } else if let Some(k) = power.to_i64() {
        format!("log{} {var}", superscript(k))
    } else {
        format!("log^({power}) {var}")
    }
}

fn factorial_part(var: &Variable, power: &Rational) -> String {
    if power.is_one() {
        format!("{var}!")
    } else if let Some(k) = power.to_i64() {
        format!("({var}!){}", superscript(k))
    } else {
        format!("({var}!)^({power})")
    }
}

/// Suffix rendering `n^d`: nothing for 1, superscripts for integers,
/// `^(p/q)` for other rationals and two decimals for irrational degrees.
fn power_suffix(degree: &Exponent) -> String {
    match degree.as_rational() {
        Some(r) if r.is_one() => String::new(),
        Some(r) => match r.to_i64() {
            Some(k) => superscript(k),
            None => format!("^({r})"),
        },
        None => format!("^{:.2}", degree.approx()),
    }
}

fn grouped(value: &Rational) -> String {
    if value.is_integer() {
        value.to_string()
    } else {
        format!("({value})")
    }
}

fn superscript(value: i64) -> String {
    let mut out = String::new();
    if value < 0 {
        out.push('⁻');
    }
    for digit in value.unsigned_abs().to_string().chars() {
        let index = digit.to_digit(10).unwrap_or(0) as usize;
        out.push(SUPERSCRIPTS[index]);
    }
    out
}

impl fmt::Display for Growth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("O(")?;
        f.write_str(&notation(self))?;
        f.write_char(')')
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&monomial(self))
    }
}
