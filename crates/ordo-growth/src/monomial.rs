//! Products of growth profiles over distinct variables.

use ordo_numeric::Rational;
use smallvec::SmallVec;
use std::cmp::Ordering;

use crate::{Dominance, GrowthError, GrowthKind, GrowthTerm, Profile, Variable};

/// A product of per-variable profiles, e.g. `n² · log k`.
///
/// Factors keep the order in which their variables first appeared.
/// Each variable appears at most once and neutral profiles are never
/// stored, so the empty product is the constant class.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Monomial {
    factors: SmallVec<[(Variable, Profile); 2]>,
}

impl Monomial {
    /// The constant monomial.
    #[must_use]
    pub fn one() -> Self {
        Self::default()
    }

    /// A single-variable monomial.
    #[must_use]
    pub fn single(var: Variable, profile: Profile) -> Self {
        let mut monomial = Self::one();
        monomial.mul_factor(var, &profile);
        monomial
    }

    /// Returns true if the monomial grows like a constant.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.factors.is_empty()
    }

    /// The `(variable, profile)` factors.
    #[must_use]
    pub fn factors(&self) -> &[(Variable, Profile)] {
        &self.factors
    }

    /// The variables the monomial grows in.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.factors.iter().map(|(var, _)| var)
    }

    /// The profile of a variable, if it occurs.
    #[must_use]
    pub fn profile(&self, var: &Variable) -> Option<&Profile> {
        self.factors
            .iter()
            .find(|(candidate, _)| candidate == var)
            .map(|(_, profile)| profile)
    }

    /// The monomial with one variable removed.
    #[must_use]
    pub fn without(&self, var: &Variable) -> Self {
        Self {
            factors: self
                .factors
                .iter()
                .filter(|(candidate, _)| candidate != var)
                .cloned()
                .collect(),
        }
    }

    /// The fastest-growing family present.
    #[must_use]
    pub fn kind(&self) -> GrowthKind {
        self.factors
            .iter()
            .map(|(_, profile)| profile.kind())
            .max()
            .unwrap_or(GrowthKind::Constant)
    }

    /// Splits the product into elementary terms.
    #[must_use]
    pub fn terms(&self) -> Vec<GrowthTerm> {
        if self.is_constant() {
            return vec![GrowthTerm::Constant];
        }
        self.factors
            .iter()
            .flat_map(|(var, profile)| profile.terms(var))
            .collect()
    }

    /// Product of two monomials. Shared variables merge their profiles.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let mut product = self.clone();
        for (var, profile) in &other.factors {
            product.mul_factor(var.clone(), profile);
        }
        product
    }

    /// Raises every factor to a non-negative rational power.
    ///
    /// # Errors
    ///
    /// Propagates [`Profile::pow`] failures.
    pub fn pow(&self, power: &Rational) -> Result<Self, GrowthError> {
        let mut result = Self::one();
        for (var, profile) in &self.factors {
            result.mul_factor(var.clone(), &profile.pow(power)?);
        }
        Ok(result)
    }

    /// Renames `from` to `to`, merging with an existing `to` factor.
    #[must_use]
    pub fn substitute(&self, from: &Variable, to: &Variable) -> Self {
        let mut result = Self::one();
        for (var, profile) in &self.factors {
            let target = if var == from { to } else { var };
            result.mul_factor(target.clone(), profile);
        }
        result
    }

    /// Pointwise comparison over the union of variables.
    ///
    /// Absent variables count as neutral. The verdict is
    /// [`Dominance::Incomparable`] when some variable grows faster on each
    /// side, or when a degree comparison cannot be decided.
    #[must_use]
    pub fn compare_pointwise(&self, other: &Self) -> Dominance {
        let neutral = Profile::neutral();
        let mut slower = false;
        let mut faster = false;

        let variables = self
            .variables()
            .chain(other.variables().filter(|var| self.profile(var).is_none()));
        for var in variables {
            let lhs = self.profile(var).unwrap_or(&neutral);
            let rhs = other.profile(var).unwrap_or(&neutral);
            match lhs.cmp_growth(rhs) {
                Some(Ordering::Less) => slower = true,
                Some(Ordering::Greater) => faster = true,
                Some(Ordering::Equal) => {}
                None => return Dominance::Incomparable,
            }
        }

        match (slower, faster) {
            (false, false) => Dominance::Equal,
            (true, false) => Dominance::StrictlySlower,
            (false, true) => Dominance::StrictlyFaster,
            (true, true) => Dominance::Incomparable,
        }
    }

    fn mul_factor(&mut self, var: Variable, profile: &Profile) {
        if profile.is_neutral() {
            return;
        }
        match self.factors.iter().position(|(candidate, _)| *candidate == var) {
            Some(index) => {
                let merged = self.factors[index].1.multiply(profile);
                if merged.is_neutral() {
                    self.factors.remove(index);
                } else {
                    self.factors[index].1 = merged;
                }
            }
            None => self.factors.push((var, profile.clone())),
        }
    }
}
