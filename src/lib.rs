//! # sales_rank
//!
//! Per-seller retail sales aggregation and ranking.
//!
//! This library folds purchase records into per-seller performance
//! statistics — revenue, profit, sales count, top-selling products — then
//! ranks sellers by profit and assigns a tiered bonus. The whole computation
//! is a single-pass, single-threaded pipeline with four stages:
//!
//! 1. **Validate** — shape-check the input collections, collecting every
//!    diagnostic at once.
//! 2. **Accumulate** — fold purchase records into one accumulator per
//!    seller, using O(1) id/SKU lookup indexes.
//! 3. **Rank** — stable sort by profit descending and assign a bonus per
//!    rank via the injected [`BonusPolicy`].
//! 4. **Project** — reduce each seller's SKU tally to a top-N list and emit
//!    the rounded report entries.
//!
//! Revenue and bonus computation are injected policies; the defaults
//! ([`DiscountedRevenue`], [`TieredBonus`]) are zero-sized and any closure
//! with the matching signature works too.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use sales_rank::{generate_report, SalesInput};
//!
//! let input = SalesInput::from_json(json)?;
//! for entry in generate_report(&input)? {
//!     println!("{}: profit {} bonus {}", entry.name, entry.profit, entry.bonus);
//! }
//! ```

pub mod accumulate;
pub mod errors;
pub mod pipeline;
pub mod policy;
pub mod project;
pub mod rank;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SalesRankError};
pub use types::{
    round_to_cents, Customer, LineItem, Product, PurchaseRecord, SalesInput, SalesRankConfig,
    Seller,
};

// Re-export main functionality
pub use accumulate::{accumulate, SellerAccumulator, SkuTally};
pub use pipeline::error_code::ErrorCode;
pub use pipeline::errors::InputError;
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageReport};
pub use pipeline::runner::{generate_report, Pipeline, StandardPipeline};
pub use pipeline::validation::{ValidationEngine, ValidationReport};
pub use policy::{BonusPolicy, DiscountedRevenue, RevenuePolicy, TieredBonus};
pub use project::{project, ReportEntry, TopProduct};
pub use rank::{rank_sellers, RankedSeller};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
