//! Price derivation
//!
//! Pure computation over a product's bill of materials and the catalog's
//! current rates. Nothing here touches the durable files, and identical
//! inputs always produce identical output.
//!
//! All arithmetic is exact decimal; nothing is rounded here. Display
//! rounding (two places) belongs to whoever renders the breakdown.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::core::store::Store;
use crate::entities::{LaborResource, Product, RawMaterial, TaxRate};

/// Which store a reference failed to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    Labor,
    Material,
    Tax,
}

impl std::fmt::Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefKind::Labor => write!(f, "labor resource"),
            RefKind::Material => write!(f, "raw material"),
            RefKind::Tax => write!(f, "tax rate"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PricingError {
    /// The product (or the caller's jurisdiction) names a record the
    /// catalog does not hold. Recoverable: fix the product's usage map or
    /// re-add the missing record, then price again.
    #[error("unknown {kind} '{name}'")]
    UnresolvedReference { kind: RefKind, name: String },

    #[error("profit percent must not be negative (got {0})")]
    NegativeProfit(Decimal),
}

/// Cost rollup for one product. `final_pricing` is present only when a
/// tax jurisdiction was supplied; without one the breakdown stops at
/// production cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub labor_cost: Decimal,
    pub material_cost: Decimal,
    pub total_cost: Decimal,
    #[serde(rename = "final", skip_serializing_if = "Option::is_none")]
    pub final_pricing: Option<FinalPricing>,
}

/// Profit and tax applied on top of the production cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalPricing {
    pub profit_percent: Decimal,
    pub tax_percent: Decimal,
    pub price_with_profit: Decimal,
    pub tax_amount: Decimal,
    pub final_price: Decimal,
}

/// Derive a price for `product` from the current catalog state.
///
/// Labor cost is the sum of `hours * hourly_cost` over the product's
/// labor usage, material cost the sum of `quantity * unit_cost` over its
/// material usage. With a jurisdiction, the profit margin is applied to
/// the total cost and the jurisdiction's tax on top of that.
pub fn price_product(
    product: &Product,
    labor: &Store<LaborResource>,
    materials: &Store<RawMaterial>,
    taxes: &Store<TaxRate>,
    jurisdiction: Option<&str>,
    profit_percent: Decimal,
) -> Result<PriceBreakdown, PricingError> {
    if profit_percent < Decimal::ZERO {
        return Err(PricingError::NegativeProfit(profit_percent));
    }

    let mut labor_cost = Decimal::ZERO;
    for (name, hours) in &product.labor_usage {
        let resource =
            labor
                .find_by_name(name)
                .ok_or_else(|| PricingError::UnresolvedReference {
                    kind: RefKind::Labor,
                    name: name.clone(),
                })?;
        labor_cost += resource.hourly_cost * *hours;
    }

    let mut material_cost = Decimal::ZERO;
    for (name, quantity) in &product.material_usage {
        let material =
            materials
                .find_by_name(name)
                .ok_or_else(|| PricingError::UnresolvedReference {
                    kind: RefKind::Material,
                    name: name.clone(),
                })?;
        material_cost += material.unit_cost * *quantity;
    }

    let total_cost = labor_cost + material_cost;

    let final_pricing = match jurisdiction {
        Some(state) => {
            let rate =
                taxes
                    .find_by_name(state)
                    .ok_or_else(|| PricingError::UnresolvedReference {
                        kind: RefKind::Tax,
                        name: state.to_string(),
                    })?;
            let price_with_profit =
                total_cost * (Decimal::ONE + profit_percent / Decimal::ONE_HUNDRED);
            let final_price =
                price_with_profit * (Decimal::ONE + rate.percent / Decimal::ONE_HUNDRED);
            Some(FinalPricing {
                profit_percent,
                tax_percent: rate.percent,
                price_with_profit,
                tax_amount: final_price - price_with_profit,
                final_price,
            })
        }
        None => None,
    };

    Ok(PriceBreakdown {
        labor_cost,
        material_cost,
        total_cost,
        final_pricing,
    })
}
