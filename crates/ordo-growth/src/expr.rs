//! Growth expressions: sums of products of elementary terms.
//!
//! `Growth` is the value every analysis step produces. Sums stand for
//! sequential composition and products for nested independent work.
//! Construction and arithmetic never reduce sums on their own; the
//! [`Comparator`](crate::Comparator) decides which summands survive.

use num_traits::{One, Zero};
use ordo_numeric::{Exponent, Rational};

use crate::{Comparator, Dominance, GrowthError, GrowthKind, GrowthTerm, Monomial, Profile, Variable};

/// A growth expression: a non-empty sum of [`Monomial`]s.
///
/// Equality is asymptotic: two expressions are equal when each is `O`
/// of the other, so `n² + n` equals `n²` and the order of summands does
/// not matter.
#[derive(Clone, Debug)]
pub struct Growth {
    terms: Vec<Monomial>,
}

impl Growth {
    /// The constant class `O(1)`.
    #[must_use]
    pub fn constant() -> Self {
        Self::from_monomial(Monomial::one())
    }

    /// `log var`.
    #[must_use]
    pub fn log(var: impl Into<Variable>) -> Self {
        Self::from_profile(var, Profile::logarithmic(Rational::one()).unwrap_or_default())
    }

    /// `var`.
    #[must_use]
    pub fn linear(var: impl Into<Variable>) -> Self {
        Self::from_profile(var, Profile::polynomial(Exponent::one()).unwrap_or_default())
    }

    /// `var²`.
    #[must_use]
    pub fn quadratic(var: impl Into<Variable>) -> Self {
        Self::from_profile(var, Profile::polynomial(Exponent::integer(2)).unwrap_or_default())
    }

    /// `var³`.
    #[must_use]
    pub fn cubic(var: impl Into<Variable>) -> Self {
        Self::from_profile(var, Profile::polynomial(Exponent::integer(3)).unwrap_or_default())
    }

    /// `var log var`.
    #[must_use]
    pub fn n_log_n(var: impl Into<Variable>) -> Self {
        let var = var.into();
        Self::linear(var.clone()).multiply(&Self::log(var))
    }

    /// `var!`.
    #[must_use]
    pub fn factorial(var: impl Into<Variable>) -> Self {
        Self::from_profile(var, Profile::factorial(Rational::one()).unwrap_or_default())
    }

    /// `log^power var`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NegativeLogPower`] for a negative power.
    pub fn log_power(var: impl Into<Variable>, power: impl Into<Rational>) -> Result<Self, GrowthError> {
        Ok(Self::from_profile(var, Profile::logarithmic(power.into())?))
    }

    /// `var^degree` for a rational degree.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NegativeDegree`] for a negative degree.
    pub fn poly(var: impl Into<Variable>, degree: impl Into<Rational>) -> Result<Self, GrowthError> {
        Self::poly_exponent(var, Exponent::from_rational(degree.into()))
    }

    /// `var^degree` for an exact real degree.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NegativeDegree`] for a negative degree.
    pub fn poly_exponent(var: impl Into<Variable>, degree: Exponent) -> Result<Self, GrowthError> {
        Ok(Self::from_profile(var, Profile::polynomial(degree)?))
    }

    /// `base^var`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidBase`] unless `base > 1`.
    pub fn exponential(var: impl Into<Variable>, base: impl Into<Rational>) -> Result<Self, GrowthError> {
        Ok(Self::from_profile(var, Profile::exponential(base.into())?))
    }

    /// `var^(log_b a)`, the leaf count of a divide-and-conquer recursion.
    ///
    /// Uses `n^(log_b a) = a^(log_b n)`; the degree is kept exact.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidBase`] unless `b > 1`, and
    /// [`GrowthError::NegativeDegree`] when `a < 1`.
    pub fn raise_to_log(
        var: impl Into<Variable>,
        a: &Rational,
        b: &Rational,
    ) -> Result<Self, GrowthError> {
        if *b <= Rational::one() {
            return Err(GrowthError::InvalidBase(b.clone()));
        }
        let degree = Exponent::log(a.clone(), b.clone())
            .ok_or_else(|| GrowthError::NegativeDegree(Exponent::from_rational(a.clone())))?;
        Self::poly_exponent(var, degree)
    }

    /// Builds an expression from one elementary term.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the term's parameters.
    pub fn from_term(term: GrowthTerm) -> Result<Self, GrowthError> {
        Ok(match term {
            GrowthTerm::Constant => Self::constant(),
            GrowthTerm::Logarithmic { var, power } => Self::from_profile(var, Profile::logarithmic(power)?),
            GrowthTerm::Polynomial { var, degree } => Self::from_profile(var, Profile::polynomial(degree)?),
            GrowthTerm::Exponential { var, base } => Self::from_profile(var, Profile::exponential(base)?),
            GrowthTerm::Factorial { var, power } => Self::from_profile(var, Profile::factorial(power)?),
        })
    }

    /// Wraps a single monomial.
    #[must_use]
    pub fn from_monomial(monomial: Monomial) -> Self {
        Self {
            terms: vec![monomial],
        }
    }

    /// Builds a sum from monomials; an empty list is the constant class.
    #[must_use]
    pub fn from_monomials(terms: impl IntoIterator<Item = Monomial>) -> Self {
        let terms: Vec<Monomial> = terms.into_iter().collect();
        if terms.is_empty() {
            Self::constant()
        } else {
            Self { terms }
        }
    }

    fn from_profile(var: impl Into<Variable>, profile: Profile) -> Self {
        Self::from_monomial(Monomial::single(var.into(), profile))
    }

    /// The summands.
    #[must_use]
    pub fn terms(&self) -> &[Monomial] {
        &self.terms
    }

    /// Returns true if every summand is constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(Monomial::is_constant)
    }

    /// The fastest-growing family present in any summand.
    #[must_use]
    pub fn kind(&self) -> GrowthKind {
        self.terms
            .iter()
            .map(Monomial::kind)
            .max()
            .unwrap_or(GrowthKind::Constant)
    }

    /// Distinct variables in first-seen order.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut seen: Vec<Variable> = Vec::new();
        for var in self.terms.iter().flat_map(Monomial::variables) {
            if !seen.contains(var) {
                seen.push(var.clone());
            }
        }
        seen
    }

    /// Returns true if the expression grows in `var`.
    #[must_use]
    pub fn depends_on(&self, var: &Variable) -> bool {
        self.terms.iter().any(|term| term.profile(var).is_some())
    }

    /// Sequential composition: the union of summands, unreduced.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut terms = self.terms.clone();
        terms.extend(other.terms.iter().cloned());
        Self { terms }
    }

    /// Multiplicative composition, distributed over both sums.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let terms = self
            .terms
            .iter()
            .flat_map(|lhs| other.terms.iter().map(move |rhs| lhs.multiply(rhs)))
            .collect();
        Self { terms }
    }

    /// Raises the expression to a non-negative rational power.
    ///
    /// `(f + g)^r` is taken as `f^r + g^r`, which is the same class.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::NegativePower`] for a negative power and
    /// propagates unsupported fractional powers of exponential bases.
    pub fn pow(&self, power: &Rational) -> Result<Self, GrowthError> {
        if power.is_negative() {
            return Err(GrowthError::NegativePower(power.clone()));
        }
        let terms = self
            .terms
            .iter()
            .map(|term| term.pow(power))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { terms })
    }

    /// The logarithm of the expression.
    ///
    /// `log(f·g) = log f + log g`, `log n^d = log n`, `log bⁿ = n`,
    /// `log n! = n log n`, and the logarithm of a sum is the sum of the
    /// logarithms of its summands.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::UnsupportedComposition`] for `log log n`,
    /// which has no representation in the supported families.
    pub fn logarithm(&self) -> Result<Self, GrowthError> {
        let mut terms = Vec::new();
        for monomial in &self.terms {
            for (var, profile) in monomial.factors() {
                let log = match profile.kind() {
                    GrowthKind::Factorial => Self::n_log_n(var.clone()),
                    GrowthKind::Exponential => Self::linear(var.clone()),
                    GrowthKind::Polynomial => Self::log(var.clone()),
                    GrowthKind::Logarithmic => {
                        return Err(GrowthError::UnsupportedComposition(format!("log log {var}")))
                    }
                    GrowthKind::Constant => continue,
                };
                terms.extend(log.terms);
            }
        }
        Ok(Self::from_monomials(terms))
    }

    /// Renames a variable, merging with existing occurrences of `to`.
    #[must_use]
    pub fn substitute(&self, from: &Variable, to: &Variable) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|term| term.substitute(from, to))
                .collect(),
        }
    }

    /// Substitutes `inner` for `var`: `f(g)`.
    ///
    /// Polynomial and logarithmic components compose through
    /// [`Growth::pow`] and [`Growth::logarithm`]. Exponential and
    /// factorial components only compose with a plain variable, since
    /// `2^(n log n)` and `(n²)!` lie outside the supported families.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::UnsupportedComposition`] when the result
    /// cannot be represented.
    pub fn compose(&self, var: &Variable, inner: &Self) -> Result<Self, GrowthError> {
        if let Some(renamed) = inner.as_plain_variable() {
            return Ok(self.substitute(var, &renamed));
        }

        let mut result: Option<Self> = None;
        for monomial in &self.terms {
            let rest = Self::from_monomial(monomial.without(var));
            let composed = match monomial.profile(var) {
                None => rest,
                Some(profile) => rest.multiply(&compose_profile(profile, var, inner)?),
            };
            result = Some(match result {
                None => composed,
                Some(acc) => acc.add(&composed),
            });
        }
        Ok(result.unwrap_or_else(Self::constant))
    }

    /// Returns `v` when the expression is exactly the variable `v`.
    fn as_plain_variable(&self) -> Option<Variable> {
        let [monomial] = self.terms.as_slice() else {
            return None;
        };
        let [(var, profile)] = monomial.factors() else {
            return None;
        };
        let linear = Profile::polynomial(Exponent::one()).ok()?;
        (*profile == linear).then(|| var.clone())
    }

    /// The bare notation without the surrounding `O(…)`.
    #[must_use]
    pub fn notation(&self) -> String {
        crate::display::notation(self)
    }
}

/// `profile(inner)` for the component kinds that compose.
fn compose_profile(profile: &Profile, var: &Variable, inner: &Growth) -> Result<Growth, GrowthError> {
    if !profile.is_polylog() {
        return Err(GrowthError::UnsupportedComposition(format!(
            "{} of a non-variable argument in {var}",
            profile.kind()
        )));
    }
    let degree = profile.degree().as_rational().ok_or_else(|| {
        GrowthError::UnsupportedComposition(format!("irrational power {} of an expression", profile.degree()))
    })?;

    let mut result = inner.pow(degree)?;
    if !profile.log_power().is_zero() {
        let log = inner.logarithm()?.pow(profile.log_power())?;
        result = result.multiply(&log);
    }
    Ok(result)
}

impl PartialEq for Growth {
    fn eq(&self, other: &Self) -> bool {
        Comparator::default().compare(self, other) == Dominance::Equal
    }
}

impl From<Monomial> for Growth {
    fn from(monomial: Monomial) -> Self {
        Self::from_monomial(monomial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    #[test]
    fn test_constructors() {
        assert!(Growth::constant().is_constant());
        assert_eq!(Growth::linear("n").kind(), GrowthKind::Polynomial);
        assert_eq!(Growth::factorial("n").kind(), GrowthKind::Factorial);
        assert!(Growth::poly("n", -1).is_err());
        assert!(Growth::exponential("n", 1).is_err());
        assert!(Growth::log_power("n", -2).is_err());
    }

    #[test]
    fn test_multiply_sums_degrees() {
        let product = Growth::linear("n").multiply(&Growth::quadratic("n"));
        assert_eq!(product, Growth::cubic("n"));
    }

    #[test]
    fn test_constant_factor_ignored() {
        // 3n² and n² are the same class; constants have no representation.
        let scaled = Growth::constant().multiply(&Growth::quadratic("n"));
        assert_eq!(scaled, Growth::quadratic("n"));
    }

    #[test]
    fn test_raise_to_log() {
        let four_halves = Growth::raise_to_log("n", &q(4, 1), &q(2, 1)).unwrap();
        assert_eq!(four_halves, Growth::quadratic("n"));

        let one = Growth::raise_to_log("n", &q(1, 1), &q(2, 1)).unwrap();
        assert!(one.is_constant());

        assert!(Growth::raise_to_log("n", &q(2, 1), &q(1, 1)).is_err());
    }

    #[test]
    fn test_logarithm() {
        assert_eq!(Growth::cubic("n").logarithm().unwrap(), Growth::log("n"));
        assert_eq!(
            Growth::exponential("n", 2).unwrap().logarithm().unwrap(),
            Growth::linear("n")
        );
        assert_eq!(
            Growth::factorial("n").logarithm().unwrap(),
            Growth::n_log_n("n")
        );
        assert!(Growth::constant().logarithm().unwrap().is_constant());
        assert!(Growth::log("n").logarithm().is_err());
    }

    #[test]
    fn test_pow() {
        let root = Growth::quadratic("n").pow(&q(1, 2)).unwrap();
        assert_eq!(root, Growth::linear("n"));
        assert!(Growth::linear("n").pow(&q(-1, 1)).is_err());
    }

    #[test]
    fn test_compose() {
        let n = Variable::new("n");
        // (n²)∘(m log m) = m² log² m
        let inner = Growth::n_log_n("m");
        let composed = Growth::quadratic("n").compose(&n, &inner).unwrap();
        let expected = Growth::quadratic("m").multiply(&Growth::log_power("m", 2).unwrap());
        assert_eq!(composed, expected);

        // log n ∘ n³ = log n
        let composed = Growth::log("n").compose(&n, &Growth::cubic("n")).unwrap();
        assert_eq!(composed, Growth::log("n"));

        // 2^n ∘ n² is outside the families
        let exp = Growth::exponential("n", 2).unwrap();
        assert!(exp.compose(&n, &Growth::quadratic("n")).is_err());

        // 2^n ∘ k renames
        let renamed = exp.compose(&n, &Growth::linear("k")).unwrap();
        assert_eq!(renamed, Growth::exponential("k", 2).unwrap());
    }

    #[test]
    fn test_variables_first_seen() {
        let expr = Growth::linear("n").add(&Growth::n_log_n("k")).add(&Growth::linear("n"));
        let names: Vec<_> = expr.variables().iter().map(|v| v.name().to_string()).collect();
        assert_eq!(names, vec!["n", "k"]);
        assert!(expr.depends_on(&Variable::new("k")));
        assert!(!expr.depends_on(&Variable::new("m")));
    }
}
