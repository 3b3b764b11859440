//! World store for agents and tactics.
//!
//! Owns the authoritative entity lists plus the spatial indexes derived from
//! them. Iteration order is insertion order, which is also the draw order
//! and the tie-break order for hit testing. Identifiers are issued from a
//! monotonic counter per entity kind and are never reused within a session.

use crate::geometry::Vec2;
use crate::spatial_index::SpatialIndex;
use crate::types::{Agent, AgentId, Tactic, TacticId};
use tracing::debug;

struct AgentSlot {
    id: AgentId,
    agent: Agent,
}

struct TacticSlot {
    id: TacticId,
    tactic: Tactic,
}

/// Authoritative store for everything drawn on the map.
#[derive(Default)]
pub struct World {
    agents: Vec<AgentSlot>,
    tactics: Vec<TacticSlot>,
    next_agent_id: u64,
    next_tactic_id: u64,
    agent_index: SpatialIndex,
    tactic_index: SpatialIndex,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Agents
    // ========================================================================

    pub fn add_agent(&mut self, agent: Agent) -> AgentId {
        let id = AgentId::new(self.next_agent_id);
        self.next_agent_id += 1;
        self.agent_index.insert(id.raw(), agent.pos);
        debug!(?id, name = %agent.name, "agent added");
        self.agents.push(AgentSlot { id, agent });
        id
    }

    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &slot.agent)
    }

    /// Mutable access for name, color and status changes. Position changes
    /// must go through [`World::move_agent`] so the spatial index stays
    /// consistent.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents
            .iter_mut()
            .find(|slot| slot.id == id)
            .map(|slot| &mut slot.agent)
    }

    /// Reposition an agent and update the spatial index.
    /// Returns false if the agent no longer exists.
    pub fn move_agent(&mut self, id: AgentId, pos: Vec2) -> bool {
        let Some(slot) = self.agents.iter_mut().find(|slot| slot.id == id) else {
            return false;
        };
        slot.agent.pos = pos;
        self.agent_index.insert(id.raw(), pos);
        true
    }

    pub fn remove_agent(&mut self, id: AgentId) -> Option<Agent> {
        let idx = self.agents.iter().position(|slot| slot.id == id)?;
        self.agent_index.remove(id.raw());
        debug!(?id, "agent removed");
        Some(self.agents.remove(idx).agent)
    }

    /// Agents in insertion order.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, &Agent)> {
        self.agents.iter().map(|slot| (slot.id, &slot.agent))
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Broad-phase query: agents whose center lies within the world-space
    /// rect. Order is unspecified.
    pub fn agents_within(&self, min: Vec2, max: Vec2) -> Vec<AgentId> {
        self.agent_index
            .query_rect(min, max)
            .into_iter()
            .map(AgentId::new)
            .collect()
    }

    // ========================================================================
    // Tactics
    // ========================================================================

    pub fn add_tactic(&mut self, tactic: Tactic) -> TacticId {
        let id = TacticId::new(self.next_tactic_id);
        self.next_tactic_id += 1;
        self.tactic_index.insert(id.raw(), tactic.pos);
        debug!(?id, name = %tactic.name, "tactic added");
        self.tactics.push(TacticSlot { id, tactic });
        id
    }

    pub fn tactic(&self, id: TacticId) -> Option<&Tactic> {
        self.tactics
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| &slot.tactic)
    }

    /// Mutable access for name and color changes. Position changes must go
    /// through [`World::move_tactic`] so the spatial index stays consistent.
    pub fn tactic_mut(&mut self, id: TacticId) -> Option<&mut Tactic> {
        self.tactics
            .iter_mut()
            .find(|slot| slot.id == id)
            .map(|slot| &mut slot.tactic)
    }

    /// Reposition a tactic and update the spatial index.
    /// Returns false if the tactic no longer exists.
    pub fn move_tactic(&mut self, id: TacticId, pos: Vec2) -> bool {
        let Some(slot) = self.tactics.iter_mut().find(|slot| slot.id == id) else {
            return false;
        };
        slot.tactic.pos = pos;
        self.tactic_index.insert(id.raw(), pos);
        true
    }

    pub fn remove_tactic(&mut self, id: TacticId) -> Option<Tactic> {
        let idx = self.tactics.iter().position(|slot| slot.id == id)?;
        self.tactic_index.remove(id.raw());
        debug!(?id, "tactic removed");
        Some(self.tactics.remove(idx).tactic)
    }

    /// Tactics in insertion order.
    pub fn tactics(&self) -> impl Iterator<Item = (TacticId, &Tactic)> {
        self.tactics.iter().map(|slot| (slot.id, &slot.tactic))
    }

    pub fn tactic_count(&self) -> usize {
        self.tactics.len()
    }

    /// Broad-phase query: tactics whose center lies within the world-space
    /// rect. Order is unspecified.
    pub fn tactics_within(&self, min: Vec2, max: Vec2) -> Vec<TacticId> {
        self.tactic_index
            .query_rect(min, max)
            .into_iter()
            .map(TacticId::new)
            .collect()
    }

    /// Broad-phase query: tactics within `reach` of `center`, per axis.
    pub fn tactics_around(&self, center: Vec2, reach: f32) -> Vec<TacticId> {
        self.tactic_index
            .query_around(center, reach)
            .into_iter()
            .map(TacticId::new)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty() && self.tactics.is_empty()
    }
}
