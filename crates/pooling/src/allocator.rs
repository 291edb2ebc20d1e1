//! Greedy bilateral allocation

use chrono::Utc;
use uuid::Uuid;

use crate::error::{PoolError, PoolResult};
use crate::pool::{MemberBalance, Pool, PoolMember};

/// Redistribute surplus to deficits via greedy bilateral matching.
///
/// Members are partitioned into surpluses (`cbBefore > 0`) and deficits
/// (`cbBefore < 0`), each keeping its relative input order — declared order
/// is the tie-break between equal magnitudes. One cursor walks each side;
/// every step moves `min(surplus.cbAfter, -deficit.cbAfter)` from the
/// current surplus to the current deficit, advancing a cursor once its
/// member is drained (`<= 0`) or covered (`>= 0`). Zero-balance members are
/// never touched. If the surplus side runs out first, the remaining deficit
/// members keep a negative residual; that is valid output, not a failure.
pub fn allocate(members: &[MemberBalance]) -> Vec<PoolMember> {
    let mut allocation: Vec<PoolMember> = members
        .iter()
        .map(|m| PoolMember {
            ship_id: m.ship_id.clone(),
            cb_before: m.cb_before,
            cb_after: m.cb_before,
        })
        .collect();

    let surpluses: Vec<usize> = (0..allocation.len())
        .filter(|&i| allocation[i].cb_before > 0.0)
        .collect();
    let deficits: Vec<usize> = (0..allocation.len())
        .filter(|&i| allocation[i].cb_before < 0.0)
        .collect();

    let mut surplus_idx = 0;
    let mut deficit_idx = 0;
    while surplus_idx < surpluses.len() && deficit_idx < deficits.len() {
        let s = surpluses[surplus_idx];
        let d = deficits[deficit_idx];

        let transfer = allocation[s].cb_after.min(-allocation[d].cb_after);
        allocation[s].cb_after -= transfer;
        allocation[d].cb_after += transfer;

        if allocation[s].cb_after <= 0.0 {
            surplus_idx += 1;
        }
        if allocation[d].cb_after >= 0.0 {
            deficit_idx += 1;
        }
    }

    allocation
}

/// Owned, append-only history of created pools.
#[derive(Debug, Clone, Default)]
pub struct PoolRegistry {
    pools: Vec<Pool>,
}

impl PoolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// All pools ever created, oldest first.
    pub fn history(&self) -> &[Pool] {
        &self.pools
    }

    /// Create a pool for `year` from the declared member balances.
    ///
    /// Fails with [`PoolError::EmptyPool`] on an empty member list and with
    /// [`PoolError::NegativeTotal`] when the group as a whole is in deficit
    /// — pooling redistributes existing surplus, it cannot manufacture
    /// compliance. Validation fully precedes the append: a failed call
    /// leaves the history unchanged.
    pub fn create_pool(&mut self, year: i32, members: &[MemberBalance]) -> PoolResult<Pool> {
        if members.is_empty() {
            return Err(PoolError::EmptyPool);
        }
        let total_cb: f64 = members.iter().map(|m| m.cb_before).sum();
        if total_cb < 0.0 {
            return Err(PoolError::NegativeTotal { total: total_cb });
        }

        let pool = Pool {
            id: Uuid::new_v4(),
            year,
            total_cb,
            members: allocate(members),
            created_at: Utc::now(),
        };
        self.pools.push(pool.clone());
        tracing::info!(year, members = members.len(), total_cb, "pool created");
        Ok(pool)
    }
}
