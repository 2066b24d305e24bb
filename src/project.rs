//! Projector stage — reduce ranked sellers to the final report shape.
//!
//! Each seller's SKU tally collapses to an ordered top-N list (quantity
//! descending, first-encounter order breaking ties) and the monetary fields
//! are rounded to cents. Report entries come out in rank order.

use serde::{Deserialize, Serialize};

use crate::rank::RankedSeller;
use crate::types::round_to_cents;

/// One entry in a seller's top-products list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
}

/// The final per-seller report record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub bonus: f64,
    pub top_products: Vec<TopProduct>,
}

/// Project ranked sellers into report entries, keeping rank order.
///
/// `top_products` caps the per-seller product list (10 in the default
/// config).
pub fn project(ranked: Vec<RankedSeller>, top_products: usize) -> Vec<ReportEntry> {
    ranked
        .into_iter()
        .map(|seller| {
            let acc = seller.accumulator;

            let mut products: Vec<TopProduct> = acc
                .sku_quantities
                .iter()
                .map(|(sku, quantity)| TopProduct {
                    sku: sku.to_string(),
                    quantity,
                })
                .collect();
            // Stable sort: equal quantities keep first-encounter order.
            products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
            products.truncate(top_products);

            ReportEntry {
                seller_id: acc.seller_id,
                name: acc.name,
                revenue: round_to_cents(acc.revenue),
                profit: round_to_cents(acc.profit),
                sales_count: acc.sales_count,
                bonus: round_to_cents(seller.bonus),
                top_products: products,
            }
        })
        .collect()
}
