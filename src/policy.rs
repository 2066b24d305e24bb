//! Injected policy strategies for the report pipeline.
//!
//! Two decisions are deliberately kept out of the pipeline core and injected
//! by the caller:
//!
//! - [`RevenuePolicy`] — how much revenue one line item produces.
//! - [`BonusPolicy`] — what bonus a seller earns given its rank.
//!
//! Both are plain traits with zero-sized default implementations, so the
//! defaults add no runtime cost under static dispatch. Blanket impls make
//! any closure with the matching signature usable directly as a policy.

use crate::accumulate::SellerAccumulator;
use crate::types::{LineItem, Product};

// ============================================================================
// RevenuePolicy — per-item revenue (Accumulator stage)
// ============================================================================

/// Computes the revenue of a single line item.
///
/// # Contract
///
/// - **Input**: the line item and the matching product, or `None` when the
///   SKU is unknown. The product is informational; the default policy does
///   not need it.
/// - **Output**: a non-negative revenue amount. The policy owns discount and
///   rounding semantics — the Accumulator only adds the returned value to
///   the seller's running revenue.
/// - **Deterministic**: same input, same output (no internal randomness).
///
/// Panics inside a policy propagate uncaught; the pipeline does not sandbox
/// injected policies.
pub trait RevenuePolicy {
    /// Compute revenue for one line item.
    fn revenue(&self, item: &LineItem, product: Option<&Product>) -> f64;
}

/// Default revenue policy: `sale_price × quantity × (1 − discount/100)`.
///
/// Returns the unrounded value; rounding to cents happens once at the
/// projection boundary. Custom policies that round per item are free to do
/// so.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscountedRevenue;

impl RevenuePolicy for DiscountedRevenue {
    #[inline]
    fn revenue(&self, item: &LineItem, _product: Option<&Product>) -> f64 {
        item.sale_price * f64::from(item.quantity) * (1.0 - item.discount / 100.0)
    }
}

impl<F> RevenuePolicy for F
where
    F: Fn(&LineItem, Option<&Product>) -> f64,
{
    #[inline]
    fn revenue(&self, item: &LineItem, product: Option<&Product>) -> f64 {
        self(item, product)
    }
}

// ============================================================================
// BonusPolicy — per-rank bonus (Ranker stage)
// ============================================================================

/// Computes a seller's bonus from its rank and accumulated totals.
///
/// # Contract
///
/// - **Input**: the 0-based rank `index` after the profit-descending sort,
///   the `total` number of sellers, and the seller's frozen accumulator.
/// - **Output**: the bonus amount (unrounded; the Projector rounds).
pub trait BonusPolicy {
    /// Compute the bonus for the seller at `index` of `total`.
    fn bonus(&self, index: usize, total: usize, seller: &SellerAccumulator) -> f64;
}

/// Default tiered bonus policy.
///
/// Tiers, checked in order:
/// - a single seller earns 15% of profit (rank cannot reward or punish);
/// - rank 0 earns 15%;
/// - ranks 1 and 2 earn 10%;
/// - the last rank earns nothing;
/// - everyone else earns 5%.
///
/// The branch order matters for small sets: with 2 or 3 sellers the last
/// rank falls into the 10% tier before the zero tier is reached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredBonus;

impl BonusPolicy for TieredBonus {
    fn bonus(&self, index: usize, total: usize, seller: &SellerAccumulator) -> f64 {
        let profit = seller.profit;
        if total <= 1 {
            profit * 0.15
        } else if index == 0 {
            profit * 0.15
        } else if index == 1 || index == 2 {
            profit * 0.10
        } else if index == total - 1 {
            0.0
        } else {
            profit * 0.05
        }
    }
}

impl<F> BonusPolicy for F
where
    F: Fn(usize, usize, &SellerAccumulator) -> f64,
{
    #[inline]
    fn bonus(&self, index: usize, total: usize, seller: &SellerAccumulator) -> f64 {
        self(index, total, seller)
    }
}
