//! Core types for sales_rank
//!
//! This module defines the input data model (sellers, products, purchase
//! records), the pipeline configuration, and the shared monetary rounding
//! helper.

use crate::errors::{Result, SalesRankError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Monetary rounding
// ============================================================================

/// Round a monetary value to 2 decimal places.
///
/// Uses half-away-from-zero rounding (`f64::round` semantics): `1.005` with
/// an exact binary representation above the midpoint rounds to `1.01`, and
/// `-1.005` rounds symmetrically to `-1.01`. This is the single rounding
/// helper used at every rounding point in the crate; intermediate
/// accumulation stays unrounded so drift cannot build up across items.
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// Input records
// ============================================================================

/// A seller as supplied in the input bundle. Immutable source record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    /// Display name used in accumulators and report entries.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A product as supplied in the input bundle, keyed by SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// Cost price paid by the business for one unit.
    pub purchase_price: f64,
}

/// One line item within a purchase record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    pub quantity: u32,
    pub sale_price: f64,
    /// Discount percentage in the range 0–100.
    #[serde(default)]
    pub discount: f64,
}

/// A transaction attributed to one seller.
///
/// `total_amount` is carried through from the source system but never
/// substitutes for item-level revenue computation — the injected
/// [`RevenuePolicy`](crate::policy::RevenuePolicy) is canonical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    #[serde(default)]
    pub total_amount: f64,
    pub items: Vec<LineItem>,
}

/// A customer record. Present in some input bundles but unused by the core
/// pipeline; unrecognized fields are captured rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: String,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// The raw input bundle fed to the pipeline.
///
/// The three required collections are required fields: deserializing a
/// document without them fails with a descriptive error before validation
/// runs. Emptiness is checked by the
/// [`ValidationEngine`](crate::pipeline::validation::ValidationEngine).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesInput {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchases: Vec<PurchaseRecord>,

    /// Optional fourth collection, unused by the core pipeline.
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl SalesInput {
    /// Deserialize an input bundle from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the report pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRankConfig {
    /// Maximum number of entries in each seller's top-products list.
    pub top_products: usize,
}

impl Default for SalesRankConfig {
    fn default() -> Self {
        Self { top_products: 10 }
    }
}

impl SalesRankConfig {
    /// Set the top-products cap.
    pub fn with_top_products(mut self, top_products: usize) -> Self {
        self.top_products = top_products;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.top_products == 0 {
            return Err(SalesRankError::invalid_config(
                "top_products must be greater than 0",
            ));
        }
        Ok(())
    }
}
