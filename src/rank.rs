//! Ranker stage — order sellers by profit and assign bonuses.
//!
//! The sort is stable, so sellers with exactly equal profit keep their
//! input order. Rank is the 0-based position after sorting; the injected
//! [`BonusPolicy`] turns rank into a bonus amount.

use std::cmp::Ordering;

use serde::Serialize;

use crate::accumulate::SellerAccumulator;
use crate::policy::BonusPolicy;

/// A seller accumulator with its assigned bonus. Valid only after ranking.
#[derive(Debug, Clone, Serialize)]
pub struct RankedSeller {
    pub accumulator: SellerAccumulator,
    pub bonus: f64,
}

/// Sort accumulators by profit descending and assign a bonus per rank.
///
/// Equal profits keep input order (stable sort). A NaN profit from a
/// misbehaving policy compares as equal rather than panicking the sort.
pub fn rank_sellers<B: BonusPolicy>(
    mut accumulators: Vec<SellerAccumulator>,
    bonus: &B,
) -> Vec<RankedSeller> {
    accumulators.sort_by(|a, b| {
        b.profit
            .partial_cmp(&a.profit)
            .unwrap_or(Ordering::Equal)
    });

    let total = accumulators.len();
    accumulators
        .into_iter()
        .enumerate()
        .map(|(index, accumulator)| {
            let bonus = bonus.bonus(index, total, &accumulator);
            RankedSeller { accumulator, bonus }
        })
        .collect()
}
