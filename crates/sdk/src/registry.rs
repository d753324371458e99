//! Node registry: the configured network and per-node health.
//!
//! The registry answers one question for the engine: which node should the
//! next attempt go to? Nodes that recently failed are put into a capped
//! exponential backoff and skipped while alternatives exist.
//!
//! # Concurrency
//!
//! The node list is an immutable snapshot swapped wholesale by
//! [`NodeRegistry::set_network`]. Each node's health sits behind its own
//! lock, so concurrent execute calls only contend when they touch the same
//! node. Time is read from [`tokio::time::Instant`] so tests can pause it.

use std::{collections::HashSet, sync::Arc, time::Duration};

use hashgraph_types::{AccountId, NodeEndpoint};
use parking_lot::{Mutex, RwLock};
use rand::{
    SeedableRng,
    rngs::StdRng,
    seq::{IndexedRandom, SliceRandom},
};
use tokio::time::Instant;

use crate::{
    config::NodeBackoff,
    error::{Result, SdkError},
};

/// Stand-in for "never" when a backoff does not fit in an [`Instant`].
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// `now + duration`, clamped to a far-future instant instead of overflowing.
pub(crate) fn instant_after(now: Instant, duration: Duration) -> Instant {
    now.checked_add(duration).or_else(|| now.checked_add(FAR_FUTURE)).unwrap_or(now)
}

/// Snapshot of one node's health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeHealth {
    /// Failures since the last success.
    pub consecutive_failures: u32,
    /// When the node last failed.
    pub last_error_at: Option<Instant>,
    /// The node is skipped until this instant.
    pub backoff_until: Option<Instant>,
}

impl NodeHealth {
    fn is_healthy_at(&self, now: Instant) -> bool {
        self.backoff_until.is_none_or(|until| until <= now)
    }
}

#[derive(Debug)]
struct NodeSlot {
    endpoint: NodeEndpoint,
    health: Mutex<NodeHealth>,
}

impl NodeSlot {
    fn new(endpoint: NodeEndpoint) -> Self {
        Self { endpoint, health: Mutex::new(NodeHealth::default()) }
    }
}

/// The set of known network nodes and their health.
#[derive(Debug)]
pub struct NodeRegistry {
    nodes: RwLock<Arc<[Arc<NodeSlot>]>>,
    backoff: NodeBackoff,
    rng: Mutex<StdRng>,
}

impl NodeRegistry {
    /// Creates a registry.
    ///
    /// With a `seed`, the sequence of picks is reproducible for the same
    /// sequence of calls.
    #[must_use]
    pub fn new(endpoints: Vec<NodeEndpoint>, backoff: NodeBackoff, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let nodes: Vec<Arc<NodeSlot>> = endpoints.into_iter().map(|e| Arc::new(NodeSlot::new(e))).collect();
        Self { nodes: RwLock::new(nodes.into()), backoff, rng: Mutex::new(rng) }
    }

    fn snapshot(&self) -> Arc<[Arc<NodeSlot>]> {
        Arc::clone(&self.nodes.read())
    }

    fn slot(&self, account_id: AccountId) -> Option<Arc<NodeSlot>> {
        self.snapshot().iter().find(|slot| slot.endpoint.account_id() == account_id).cloned()
    }

    /// Number of configured nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.read().len()
    }

    /// Returns true if no nodes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All configured nodes, in configuration order.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeEndpoint> {
        self.snapshot().iter().map(|slot| slot.endpoint.clone()).collect()
    }

    /// Looks up a node by account id.
    #[must_use]
    pub fn node(&self, account_id: AccountId) -> Option<NodeEndpoint> {
        self.slot(account_id).map(|slot| slot.endpoint.clone())
    }

    /// Health snapshot for a node.
    #[must_use]
    pub fn health(&self, account_id: AccountId) -> Option<NodeHealth> {
        self.slot(account_id).map(|slot| *slot.health.lock())
    }

    /// Whether a node is known and not in backoff.
    #[must_use]
    pub fn is_healthy(&self, account_id: AccountId) -> bool {
        self.health(account_id).is_some_and(|h| h.is_healthy_at(Instant::now()))
    }

    /// Time left until a node's backoff expires; zero when healthy or unknown.
    #[must_use]
    pub fn backoff_remaining(&self, account_id: AccountId) -> Duration {
        self.health(account_id)
            .and_then(|h| h.backoff_until)
            .map_or(Duration::ZERO, |until| until.saturating_duration_since(Instant::now()))
    }

    /// Picks a node for the next attempt from the whole network.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::NoHealthyNodes`] if the registry is empty.
    pub fn pick_node(&self, excluding: &HashSet<AccountId>) -> Result<NodeEndpoint> {
        self.pick_node_among(None, excluding)
    }

    /// Picks a node for the next attempt.
    ///
    /// Candidates are the nodes in `allowed` (or every node when `None`).
    /// Among candidates not in backoff, one outside `excluding` is chosen at
    /// random; if every such node is excluded the exclusion is dropped. When
    /// every candidate is in backoff, the one whose backoff expires first is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::NoHealthyNodes`] if there are no candidates.
    pub fn pick_node_among(
        &self,
        allowed: Option<&[AccountId]>,
        excluding: &HashSet<AccountId>,
    ) -> Result<NodeEndpoint> {
        let snapshot = self.snapshot();
        let candidates: Vec<&Arc<NodeSlot>> = snapshot
            .iter()
            .filter(|slot| allowed.is_none_or(|ids| ids.contains(&slot.endpoint.account_id())))
            .collect();

        if candidates.is_empty() {
            return Err(SdkError::NoHealthyNodes);
        }

        let now = Instant::now();
        let healths: Vec<NodeHealth> = candidates.iter().map(|slot| *slot.health.lock()).collect();

        let healthy: Vec<&NodeEndpoint> = candidates
            .iter()
            .zip(&healths)
            .filter(|(_, health)| health.is_healthy_at(now))
            .map(|(slot, _)| &slot.endpoint)
            .collect();

        let preferred: Vec<&NodeEndpoint> =
            healthy.iter().copied().filter(|e| !excluding.contains(&e.account_id())).collect();

        let mut rng = self.rng.lock();
        if let Some(endpoint) = preferred.choose(&mut *rng) {
            return Ok((*endpoint).clone());
        }
        if let Some(endpoint) = healthy.choose(&mut *rng) {
            return Ok((*endpoint).clone());
        }
        drop(rng);

        candidates
            .iter()
            .zip(&healths)
            .min_by_key(|(_, health)| health.backoff_until)
            .map(|(slot, _)| slot.endpoint.clone())
            .ok_or(SdkError::NoHealthyNodes)
    }

    /// Picks up to `count` distinct nodes, healthy ones first, in random order.
    ///
    /// `None` selects every node.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::NoHealthyNodes`] if the registry is empty.
    pub fn pick_nodes(&self, count: Option<usize>) -> Result<Vec<NodeEndpoint>> {
        let snapshot = self.snapshot();
        if snapshot.is_empty() {
            return Err(SdkError::NoHealthyNodes);
        }

        let now = Instant::now();
        let (mut healthy, mut backed_off): (Vec<NodeEndpoint>, Vec<NodeEndpoint>) = (Vec::new(), Vec::new());
        for slot in snapshot.iter() {
            if slot.health.lock().is_healthy_at(now) {
                healthy.push(slot.endpoint.clone());
            } else {
                backed_off.push(slot.endpoint.clone());
            }
        }

        {
            let mut rng = self.rng.lock();
            healthy.shuffle(&mut *rng);
            backed_off.shuffle(&mut *rng);
        }

        healthy.extend(backed_off);
        healthy.truncate(count.unwrap_or(usize::MAX));
        Ok(healthy)
    }

    /// Marks an attempt against `account_id` as failed and backs the node off.
    ///
    /// Returns the backoff applied, or `None` if the node is unknown.
    pub fn record_failure(&self, account_id: AccountId) -> Option<Duration> {
        let slot = self.slot(account_id)?;
        let now = Instant::now();
        let mut health = slot.health.lock();
        health.consecutive_failures = health.consecutive_failures.saturating_add(1);
        let backoff = self.node_backoff(health.consecutive_failures);
        health.backoff_until = Some(instant_after(now, backoff));
        health.last_error_at = Some(now);
        Some(backoff)
    }

    /// Marks an attempt against `account_id` as successful.
    pub fn record_success(&self, account_id: AccountId) {
        if let Some(slot) = self.slot(account_id) {
            let mut health = slot.health.lock();
            health.consecutive_failures = 0;
            health.backoff_until = None;
        }
    }

    /// `min(max, base * 2^failures)`.
    fn node_backoff(&self, failures: u32) -> Duration {
        let factor = 2u32.saturating_pow(failures);
        self.backoff.base.saturating_mul(factor).min(self.backoff.max)
    }

    /// Replaces the network.
    ///
    /// Nodes whose account id and address are unchanged keep their health.
    pub fn set_network(&self, endpoints: Vec<NodeEndpoint>) {
        let current = self.snapshot();
        let next: Vec<Arc<NodeSlot>> = endpoints
            .into_iter()
            .map(|endpoint| {
                current
                    .iter()
                    .find(|slot| {
                        slot.endpoint.account_id() == endpoint.account_id()
                            && slot.endpoint.address() == endpoint.address()
                    })
                    .cloned()
                    .unwrap_or_else(|| Arc::new(NodeSlot::new(endpoint)))
            })
            .collect();

        tracing::debug!(nodes = next.len(), "Network updated");
        *self.nodes.write() = next.into();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn endpoints(nums: &[u64]) -> Vec<NodeEndpoint> {
        nums.iter()
            .map(|n| NodeEndpoint::new(format!("10.0.0.{n}:50211"), AccountId::from_num(*n)).unwrap())
            .collect()
    }

    fn registry(nums: &[u64]) -> NodeRegistry {
        let backoff = NodeBackoff { base: Duration::from_secs(1), max: Duration::from_secs(60) };
        NodeRegistry::new(endpoints(nums), backoff, Some(42))
    }

    fn id(n: u64) -> AccountId {
        AccountId::from_num(n)
    }

    #[test]
    fn test_empty_registry_has_no_nodes() {
        let registry = registry(&[]);
        assert!(registry.is_empty());
        assert!(matches!(registry.pick_node(&HashSet::new()), Err(SdkError::NoHealthyNodes)));
        assert!(matches!(registry.pick_nodes(None), Err(SdkError::NoHealthyNodes)));
    }

    #[test]
    fn test_pick_skips_excluded() {
        let registry = registry(&[3, 4, 5]);
        let excluding: HashSet<_> = [id(3)].into();
        for _ in 0..50 {
            let node = registry.pick_node(&excluding).unwrap();
            assert_ne!(node.account_id(), id(3));
        }
    }

    #[test]
    fn test_exclusion_dropped_when_no_alternative() {
        let registry = registry(&[3, 4]);
        let excluding: HashSet<_> = [id(3), id(4)].into();
        let node = registry.pick_node(&excluding).unwrap();
        assert!([id(3), id(4)].contains(&node.account_id()));
    }

    #[test]
    fn test_failed_node_is_skipped() {
        let registry = registry(&[3, 4, 5]);
        registry.record_failure(id(3));
        assert!(!registry.is_healthy(id(3)));
        for _ in 0..50 {
            let node = registry.pick_node(&HashSet::new()).unwrap();
            assert_ne!(node.account_id(), id(3));
        }
    }

    #[test]
    fn test_all_backed_off_picks_earliest_expiry() {
        let registry = registry(&[3, 4, 5]);
        // 4 fails once, the others twice: 4 has the shortest backoff.
        registry.record_failure(id(3));
        registry.record_failure(id(3));
        registry.record_failure(id(4));
        registry.record_failure(id(5));
        registry.record_failure(id(5));

        let node = registry.pick_node(&HashSet::new()).unwrap();
        assert_eq!(node.account_id(), id(4));
    }

    #[test]
    fn test_pick_among_restricts_candidates() {
        let registry = registry(&[3, 4, 5]);
        let allowed = [id(5)];
        for _ in 0..20 {
            let node = registry.pick_node_among(Some(&allowed), &HashSet::new()).unwrap();
            assert_eq!(node.account_id(), id(5));
        }

        let unknown = [id(99)];
        assert!(matches!(
            registry.pick_node_among(Some(&unknown), &HashSet::new()),
            Err(SdkError::NoHealthyNodes)
        ));
    }

    #[test]
    fn test_record_failure_backoff_is_capped_exponential() {
        let registry = registry(&[3]);
        assert_eq!(registry.record_failure(id(3)), Some(Duration::from_secs(2)));
        assert_eq!(registry.record_failure(id(3)), Some(Duration::from_secs(4)));
        assert_eq!(registry.record_failure(id(3)), Some(Duration::from_secs(8)));
        for _ in 0..40 {
            registry.record_failure(id(3));
        }
        assert_eq!(registry.record_failure(id(3)), Some(Duration::from_secs(60)));
        assert_eq!(registry.record_failure(id(99)), None);

        let health = registry.health(id(3)).unwrap();
        assert_eq!(health.consecutive_failures, 44);
        assert!(health.last_error_at.is_some());
    }

    #[test]
    fn test_record_success_resets() {
        let registry = registry(&[3]);
        for _ in 0..5 {
            registry.record_failure(id(3));
        }
        registry.record_success(id(3));
        let health = registry.health(id(3)).unwrap();
        assert_eq!(health.consecutive_failures, 0);
        assert_eq!(health.backoff_until, None);
        assert!(registry.is_healthy(id(3)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_expires() {
        let registry = registry(&[3]);
        registry.record_failure(id(3));
        assert_eq!(registry.backoff_remaining(id(3)), Duration::from_secs(2));

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert!(!registry.is_healthy(id(3)));
        assert_eq!(registry.backoff_remaining(id(3)), Duration::from_millis(500));

        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(registry.is_healthy(id(3)));
        assert_eq!(registry.backoff_remaining(id(3)), Duration::ZERO);
    }

    #[test]
    fn test_unbounded_backoff_does_not_overflow() {
        let backoff = NodeBackoff { base: Duration::from_secs(1), max: Duration::MAX };
        let registry = NodeRegistry::new(endpoints(&[3, 4]), backoff, Some(1));
        for _ in 0..70 {
            registry.record_failure(id(3));
        }
        assert!(!registry.is_healthy(id(3)));
        assert!(registry.backoff_remaining(id(3)) > Duration::from_secs(86_400));
        assert_eq!(registry.pick_node(&HashSet::new()).unwrap().account_id(), id(4));
    }

    #[test]
    fn test_seeded_picks_are_reproducible() {
        let a = registry(&[3, 4, 5, 6, 7]);
        let b = registry(&[3, 4, 5, 6, 7]);
        for _ in 0..20 {
            assert_eq!(
                a.pick_node(&HashSet::new()).unwrap().account_id(),
                b.pick_node(&HashSet::new()).unwrap().account_id()
            );
        }
    }

    #[test]
    fn test_pick_nodes_prefers_healthy() {
        let registry = registry(&[3, 4, 5]);
        registry.record_failure(id(4));

        let all = registry.pick_nodes(None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].account_id(), id(4));

        let two = registry.pick_nodes(Some(2)).unwrap();
        assert_eq!(two.len(), 2);
        assert!(two.iter().all(|n| n.account_id() != id(4)));
    }

    #[test]
    fn test_set_network_keeps_unchanged_health() {
        let registry = registry(&[3, 4]);
        registry.record_failure(id(3));
        registry.record_failure(id(4));

        let mut next = endpoints(&[3, 5]);
        next.push(NodeEndpoint::new("10.9.9.9:50211", id(4)).unwrap());
        registry.set_network(next);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.health(id(3)).unwrap().consecutive_failures, 1);
        // Address changed: fresh health.
        assert_eq!(registry.health(id(4)).unwrap().consecutive_failures, 0);
        assert_eq!(registry.node(id(4)).unwrap().address(), "10.9.9.9:50211");
        assert_eq!(registry.health(id(5)).unwrap().consecutive_failures, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_are_not_lost() {
        const TASKS: u32 = 8;
        const FAILURES_PER_TASK: u32 = 200;

        let registry = Arc::new(registry(&[3, 4]));
        registry.record_failure(id(3));
        registry.record_success(id(3));

        let mut handles = Vec::new();
        for task in 0..TASKS {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                for i in 0..FAILURES_PER_TASK {
                    registry.record_failure(id(3));
                    registry.record_success(id(4));
                    registry.pick_node(&HashSet::new()).unwrap();
                    if i % 50 == 0 {
                        // Same addresses for 3 and 4; 9 comes and goes.
                        let mut next = endpoints(&[3, 4]);
                        if task % 2 == 0 {
                            next.extend(endpoints(&[9]));
                        }
                        registry.set_network(next);
                    }
                    tokio::task::yield_now().await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let health = registry.health(id(3)).unwrap();
        assert_eq!(health.consecutive_failures, TASKS * FAILURES_PER_TASK);
        assert!(health.backoff_until.is_some());
        assert_eq!(registry.health(id(4)).unwrap().consecutive_failures, 0);

        // A success resets; only failures after it count.
        registry.record_success(id(3));
        let handles: Vec<_> = (0..TASKS)
            .map(|_| {
                let registry = Arc::clone(&registry);
                tokio::spawn(async move {
                    for _ in 0..FAILURES_PER_TASK / 4 {
                        registry.record_failure(id(3));
                        tokio::task::yield_now().await;
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(registry.health(id(3)).unwrap().consecutive_failures, TASKS * FAILURES_PER_TASK / 4);
    }

    proptest! {
        #[test]
        fn prop_pick_avoids_backed_off_nodes(
            failed in proptest::collection::vec(any::<bool>(), 1..8),
            seed in any::<u64>(),
        ) {
            let nums: Vec<u64> = (3..3 + failed.len() as u64).collect();
            let backoff = NodeBackoff { base: Duration::from_secs(10), max: Duration::from_secs(60) };
            let registry = NodeRegistry::new(endpoints(&nums), backoff, Some(seed));
            for (num, failed) in nums.iter().zip(&failed) {
                if *failed {
                    registry.record_failure(id(*num));
                }
            }

            let node = registry.pick_node(&HashSet::new()).unwrap();
            if failed.iter().all(|f| *f) {
                prop_assert!(!registry.is_healthy(node.account_id()));
            } else {
                prop_assert!(registry.is_healthy(node.account_id()));
            }
        }
    }
}
