//! Participation shares of each catalog recipe.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::catalog::{recipe_index, RECIPES, RECIPE_COUNT};

/// Participation percentages, one per catalog recipe.
///
/// Shares are not required to sum to 100. The capacity formula uses them as
/// given unless the caller opts into [`ProductMix::normalized`].
///
/// A deserialized mix follows the same rule as [`ProductMix::from_pairs`]:
/// recipes that are not named get a 0% share, and unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductMix {
    #[serde(default)]
    pub sapphire: f64,
    #[serde(default)]
    pub prevencia: f64,
    #[serde(default)]
    pub rock: f64,
    #[serde(default, rename = "superh", alias = "super_hidrofobico")]
    pub super_hidrofobico: f64,
}

impl Default for ProductMix {
    fn default() -> Self {
        Self::from_shares([
            RECIPES[0].participation,
            RECIPES[1].participation,
            RECIPES[2].participation,
            RECIPES[3].participation,
        ])
    }
}

impl ProductMix {
    /// Build a mix from shares given in catalog order.
    pub const fn from_shares(shares: [f64; RECIPE_COUNT]) -> Self {
        Self {
            sapphire: shares[0],
            prevencia: shares[1],
            rock: shares[2],
            super_hidrofobico: shares[3],
        }
    }

    /// Build a mix from `(recipe_name, percent)` pairs.
    ///
    /// Recipes that are not named get a 0% share. Naming a recipe twice is an error.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Result<Self> {
        let mut shares = [0.0; RECIPE_COUNT];
        let mut seen = [false; RECIPE_COUNT];
        for (name, percent) in pairs {
            let i = recipe_index(name)?;
            if seen[i] {
                return Err(Error::DuplicateMixEntry {
                    name: RECIPES[i].name.to_string(),
                });
            }
            seen[i] = true;
            shares[i] = *percent;
        }
        Ok(Self::from_shares(shares))
    }

    /// Shares in catalog order.
    pub const fn shares(&self) -> [f64; RECIPE_COUNT] {
        [
            self.sapphire,
            self.prevencia,
            self.rock,
            self.super_hidrofobico,
        ]
    }

    /// `(recipe_name, percent)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> {
        RECIPES
            .iter()
            .zip(self.shares())
            .map(|(recipe, share)| (recipe.name, share))
    }

    /// Sum of all shares, in percent.
    pub fn total(&self) -> f64 {
        self.shares().iter().sum()
    }

    /// Check every share is a finite percentage in [0, 100].
    pub fn validate(&self) -> Result<()> {
        for (name, share) in self.entries() {
            if !share.is_finite() || !(0.0..=100.0).contains(&share) {
                return Err(Error::invalid(format!(
                    "participation for {name} must be between 0 and 100, got {share}"
                )));
            }
        }
        Ok(())
    }

    /// Rescale the shares so they sum to 100, keeping their proportions.
    pub fn normalized(&self) -> Result<Self> {
        self.validate()?;
        let total = self.total();
        if total <= 0.0 {
            return Err(Error::invalid(
                "cannot normalize a product mix whose participations are all zero",
            ));
        }
        Ok(Self::from_shares(
            self.shares().map(|share| share * 100.0 / total),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mix_matches_catalog_defaults() {
        let mix = ProductMix::default();
        assert_eq!(mix.shares(), [50.24, 21.47, 4.25, 24.04]);
    }

    #[test]
    fn from_pairs_fills_missing_recipes_with_zero() {
        let mix = ProductMix::from_pairs(&[("Rock", 100.0)]).unwrap();
        assert_eq!(mix.shares(), [0.0, 0.0, 100.0, 0.0]);
    }

    #[test]
    fn from_pairs_rejects_duplicates_through_aliases() {
        let err = ProductMix::from_pairs(&[("SuperH", 10.0), ("Super Hidrofobico", 20.0)])
            .expect_err("same recipe twice");
        assert!(matches!(err, Error::DuplicateMixEntry { .. }));
    }

    #[test]
    fn normalized_mix_sums_to_one_hundred() {
        let mix = ProductMix::from_shares([10.0, 10.0, 0.0, 30.0]);
        let normalized = mix.normalized().unwrap();
        assert!((normalized.total() - 100.0).abs() < 1e-9);
        assert!((normalized.super_hidrofobico - 60.0).abs() < 1e-9);
    }

    #[test]
    fn normalizing_all_zero_mix_fails() {
        let err = ProductMix::from_shares([0.0; RECIPE_COUNT])
            .normalized()
            .expect_err("nothing to normalize");
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn validate_rejects_out_of_range_share() {
        assert!(ProductMix::from_shares([101.0, 0.0, 0.0, 0.0])
            .validate()
            .is_err());
        assert!(ProductMix::from_shares([f64::NAN, 0.0, 0.0, 0.0])
            .validate()
            .is_err());
    }

    #[test]
    fn deserializes_short_and_long_superh_keys() {
        let short: ProductMix = serde_json::from_str(r#"{"superh": 12.5}"#).unwrap();
        let long: ProductMix = serde_json::from_str(r#"{"super_hidrofobico": 12.5}"#).unwrap();
        assert_eq!(short.super_hidrofobico, 12.5);
        assert_eq!(long.super_hidrofobico, 12.5);
    }

    #[test]
    fn deserialized_mix_matches_named_pairs() {
        let parsed: ProductMix = serde_json::from_str(r#"{"rock": 100}"#).unwrap();
        assert_eq!(parsed, ProductMix::from_pairs(&[("Rock", 100.0)]).unwrap());
    }

    #[test]
    fn misspelled_mix_key_is_rejected() {
        let parsed: std::result::Result<ProductMix, _> =
            serde_json::from_str(r#"{"saphire": 10, "rock": 90}"#);
        assert!(parsed.is_err());
    }
}
