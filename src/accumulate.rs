//! Accumulator stage — fold purchase records into per-seller totals.
//!
//! One [`SellerAccumulator`] is allocated per input seller before the fold
//! begins (arena-style: a dense `Vec` plus an id → index map), then mutated
//! in place by every purchase record attributed to that seller. After the
//! fold the accumulators are frozen; the Ranker and Projector only read
//! them.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::policy::RevenuePolicy;
use crate::types::{Product, SalesInput, Seller};

// ============================================================================
// SkuTally — insertion-ordered SKU quantity counter
// ============================================================================

/// Cumulative per-SKU sold quantities for one seller.
///
/// Entries keep first-encounter order: the order a SKU first appeared across
/// the folded records. The Projector relies on this for stable tie-breaking
/// when quantities are equal.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkuTally {
    entries: Vec<(String, u64)>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl SkuTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of `sku`, initializing to 0 on first encounter.
    pub fn add(&mut self, sku: &str, quantity: u64) {
        if let Some(&i) = self.index.get(sku) {
            self.entries[i].1 += quantity;
        } else {
            self.index.insert(sku.to_string(), self.entries.len());
            self.entries.push((sku.to_string(), quantity));
        }
    }

    /// Cumulative quantity for `sku`, if it was ever sold.
    pub fn get(&self, sku: &str) -> Option<u64> {
        self.index.get(sku).map(|&i| self.entries[i].1)
    }

    /// Iterate `(sku, quantity)` pairs in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(sku, qty)| (sku.as_str(), *qty))
    }

    /// Number of distinct SKUs sold.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no SKU was ever sold.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// SellerAccumulator
// ============================================================================

/// Running totals for one seller, built during the fold.
#[derive(Debug, Clone, Serialize)]
pub struct SellerAccumulator {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub sku_quantities: SkuTally,
}

impl SellerAccumulator {
    /// Create a zero-initialized accumulator.
    pub fn new(seller_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            seller_id: seller_id.into(),
            name: name.into(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            sku_quantities: SkuTally::new(),
        }
    }

    fn from_seller(seller: &Seller) -> Self {
        Self::new(seller.id.clone(), seller.display_name())
    }
}

// ============================================================================
// Fold
// ============================================================================

/// Fold all purchase records into per-seller accumulators.
///
/// Returns one accumulator per input seller, in input seller order. Records
/// whose `seller_id` matches no seller are skipped entirely; items whose SKU
/// matches no product contribute revenue and quantity but zero cost. When
/// the input contains duplicate seller ids, each duplicate still gets its
/// own (zero-initialized) accumulator, but all records attribute to the
/// first occurrence.
pub fn accumulate<R: RevenuePolicy>(input: &SalesInput, revenue: &R) -> Vec<SellerAccumulator> {
    let mut accumulators: Vec<SellerAccumulator> = input
        .sellers
        .iter()
        .map(SellerAccumulator::from_seller)
        .collect();

    // Key: seller id → index into `accumulators`; first occurrence wins.
    let mut by_id: FxHashMap<&str, usize> =
        FxHashMap::with_capacity_and_hasher(input.sellers.len(), Default::default());
    for (i, seller) in input.sellers.iter().enumerate() {
        by_id.entry(seller.id.as_str()).or_insert(i);
    }

    let mut by_sku: FxHashMap<&str, &Product> =
        FxHashMap::with_capacity_and_hasher(input.products.len(), Default::default());
    for product in &input.products {
        by_sku.entry(product.sku.as_str()).or_insert(product);
    }

    for record in &input.purchases {
        let Some(&idx) = by_id.get(record.seller_id.as_str()) else {
            continue;
        };
        let acc = &mut accumulators[idx];
        acc.sales_count += 1;

        for item in &record.items {
            let product = by_sku.get(item.sku.as_str()).copied();
            let item_revenue = revenue.revenue(item, product);
            let cost = product
                .map(|p| p.purchase_price * f64::from(item.quantity))
                .unwrap_or(0.0);

            acc.revenue += item_revenue;
            acc.profit += item_revenue - cost;
            acc.sku_quantities.add(&item.sku, u64::from(item.quantity));
        }
    }

    accumulators
}
