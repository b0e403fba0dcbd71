//! Gatherable resource nodes.
//!
//! The [`ResourceField`] holds every live node keyed by [`NodeId`]. Nodes
//! lose health when gathered and are removed the moment it reaches zero,
//! handing their whole yield to the caller exactly once. Nodes do not
//! regenerate.

use std::collections::BTreeMap;

use frostvale_types::{FoodKind, NodeId, NodeKind, ResourceKind, ResourceNode, Vec2};
use tracing::debug;

// ---------------------------------------------------------------------------
// Node templates
// ---------------------------------------------------------------------------

/// Spawn parameters shared by every node of a kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTemplate {
    /// Starting health.
    pub health: f64,
    /// Resource credited on depletion.
    pub resource: ResourceKind,
    /// Amount credited on depletion.
    pub yield_amount: u32,
    /// Food subtype, for food nodes.
    pub food: Option<FoodKind>,
    /// Nodes scatter within this fraction of the world extent, centred.
    pub spread: f64,
}

/// Return the spawn template for `kind`.
pub const fn node_template(kind: NodeKind) -> NodeTemplate {
    match kind {
        NodeKind::Tree => NodeTemplate {
            health: 3.0,
            resource: ResourceKind::Wood,
            yield_amount: 3,
            food: None,
            spread: 0.8,
        },
        NodeKind::Rock => NodeTemplate {
            health: 4.0,
            resource: ResourceKind::Stone,
            yield_amount: 2,
            food: None,
            spread: 0.8,
        },
        NodeKind::BerryBush => NodeTemplate {
            health: 1.0,
            resource: ResourceKind::Food,
            yield_amount: 2,
            food: Some(FoodKind::Berries),
            spread: 0.7,
        },
        NodeKind::OreDeposit => NodeTemplate {
            health: 6.0,
            resource: ResourceKind::Iron,
            yield_amount: 2,
            food: None,
            spread: 0.7,
        },
    }
}

/// Build a fresh node of `kind` at `position` from its template.
pub const fn spawn_node(id: NodeId, kind: NodeKind, position: Vec2) -> ResourceNode {
    let template = node_template(kind);
    ResourceNode {
        id,
        kind,
        position,
        health: template.health,
        max_health: template.health,
        resource: template.resource,
        yield_amount: template.yield_amount,
        food: template.food,
    }
}

// ---------------------------------------------------------------------------
// ResourceField
// ---------------------------------------------------------------------------

/// What a gather hit did to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GatherOutcome {
    /// The node survived the hit.
    Damaged {
        /// The node hit.
        id: NodeId,
        /// Health left.
        remaining: f64,
    },
    /// The node was used up and removed.
    Depleted {
        /// The node removed.
        id: NodeId,
        /// Resource to credit.
        resource: ResourceKind,
        /// Amount to credit.
        amount: u32,
    },
}

/// All live resource nodes.
#[derive(Debug, Clone, Default)]
pub struct ResourceField {
    nodes: BTreeMap<NodeId, ResourceNode>,
}

impl ResourceField {
    /// An empty field.
    pub const fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }

    /// Add a node, replacing any node with the same id.
    pub fn insert(&mut self, node: ResourceNode) {
        self.nodes.insert(node.id, node);
    }

    /// Look up a node.
    pub fn get(&self, id: NodeId) -> Option<&ResourceNode> {
        self.nodes.get(&id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether every node has been used up.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Live nodes in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.values()
    }

    /// The closest node with health left that lies strictly within `radius`.
    ///
    /// Equal distances resolve to the lowest id.
    pub fn nearest_within(&self, position: Vec2, radius: f64) -> Option<&ResourceNode> {
        let mut best: Option<(&ResourceNode, f64)> = None;
        for node in self.nodes.values().filter(|n| n.health > 0.0) {
            let distance = node.position.distance(position);
            if distance >= radius {
                continue;
            }
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((node, distance)),
            }
        }
        best.map(|(node, _)| node)
    }

    /// Hit node `id` for `power` health.
    ///
    /// Returns `None` if no such node exists. On depletion the node is
    /// removed, so a second hit on the same id finds nothing.
    pub fn gather(&mut self, id: NodeId, power: f64) -> Option<GatherOutcome> {
        let node = self.nodes.get_mut(&id)?;
        node.health -= power;
        if node.health > 0.0 {
            debug!(node = %id, remaining = node.health, "Node damaged");
            return Some(GatherOutcome::Damaged {
                id,
                remaining: node.health,
            });
        }
        let node = self.nodes.remove(&id)?;
        debug!(node = %id, resource = %node.resource, amount = node.yield_amount, "Node depleted");
        Some(GatherOutcome::Depleted {
            id,
            resource: node.resource,
            amount: node.yield_amount,
        })
    }

    /// Gather from the nearest eligible node within `radius` of `position`.
    ///
    /// At most one node is touched.
    pub fn gather_nearest(
        &mut self,
        position: Vec2,
        radius: f64,
        power: f64,
    ) -> Option<GatherOutcome> {
        let id = self.nearest_within(position, radius)?.id;
        self.gather(id, power)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn field_with(nodes: &[(u64, NodeKind, f64, f64)]) -> ResourceField {
        let mut field = ResourceField::new();
        for (id, kind, x, z) in nodes {
            field.insert(spawn_node(NodeId::new(*id), *kind, Vec2::new(*x, *z)));
        }
        field
    }

    #[test]
    fn templates_match_stock_values() {
        let tree = node_template(NodeKind::Tree);
        assert!((tree.health - 3.0).abs() < f64::EPSILON);
        assert_eq!(tree.resource, ResourceKind::Wood);
        assert_eq!(tree.yield_amount, 3);
        let bush = node_template(NodeKind::BerryBush);
        assert_eq!(bush.food, Some(FoodKind::Berries));
        assert_eq!(bush.yield_amount, 2);
        assert_eq!(node_template(NodeKind::OreDeposit).resource, ResourceKind::Iron);
    }

    #[test]
    fn tree_depletes_after_three_bare_handed_hits() {
        let mut field = field_with(&[(1, NodeKind::Tree, 2.0, 0.0)]);
        for remaining in [2.0, 1.0] {
            let outcome = field.gather_nearest(Vec2::ZERO, 4.0, 1.0);
            assert!(matches!(
                outcome,
                Some(GatherOutcome::Damaged { remaining: r, .. }) if (r - remaining).abs() < 1e-9
            ));
        }
        let outcome = field.gather_nearest(Vec2::ZERO, 4.0, 1.0);
        assert_eq!(
            outcome,
            Some(GatherOutcome::Depleted {
                id: NodeId::new(1),
                resource: ResourceKind::Wood,
                amount: 3,
            })
        );
        assert!(field.is_empty());
        assert_eq!(field.gather_nearest(Vec2::ZERO, 4.0, 1.0), None);
    }

    #[test]
    fn out_of_range_node_is_ignored() {
        let mut field = field_with(&[(1, NodeKind::Rock, 4.0, 0.0)]);
        assert_eq!(field.gather_nearest(Vec2::ZERO, 4.0, 1.0), None);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn nearest_node_wins() {
        let field = field_with(&[
            (1, NodeKind::Tree, 3.0, 0.0),
            (2, NodeKind::Rock, 0.0, 1.5),
            (3, NodeKind::BerryBush, -2.0, 0.0),
        ]);
        let nearest = field.nearest_within(Vec2::ZERO, 4.0).map(|n| n.id);
        assert_eq!(nearest, Some(NodeId::new(2)));
    }

    #[test]
    fn equal_distance_resolves_to_lowest_id() {
        let field = field_with(&[
            (7, NodeKind::Tree, 0.0, 2.0),
            (3, NodeKind::Rock, 2.0, 0.0),
            (5, NodeKind::Rock, -2.0, 0.0),
        ]);
        let nearest = field.nearest_within(Vec2::ZERO, 4.0).map(|n| n.id);
        assert_eq!(nearest, Some(NodeId::new(3)));
    }

    #[test]
    fn one_hit_touches_one_node() {
        let mut field = field_with(&[(1, NodeKind::Tree, 1.0, 0.0), (2, NodeKind::Tree, 1.5, 0.0)]);
        field.gather_nearest(Vec2::ZERO, 4.0, 1.0);
        let healths: Vec<f64> = field.iter().map(|n| n.health).collect();
        assert!((healths.first().copied().unwrap() - 2.0).abs() < 1e-9);
        assert!((healths.get(1).copied().unwrap() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn overkill_credits_yield_once() {
        let mut field = field_with(&[(4, NodeKind::BerryBush, 0.0, 1.0)]);
        let outcome = field.gather(NodeId::new(4), 3.0);
        assert!(matches!(outcome, Some(GatherOutcome::Depleted { amount: 2, .. })));
        assert_eq!(field.gather(NodeId::new(4), 3.0), None);
    }
}
