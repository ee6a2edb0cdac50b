use std::collections::BTreeMap;

use super::{Body, ID};

/**
 * BodyStore keeps bodies in insertion order, ids map to the index of the body.
 * Bodies are never removed so indices stay valid.
 */
#[derive(Default, Clone, Debug)]
pub(crate) struct BodyStore {
    bodies: Vec<Body>,   // insertion order, also the collision pair order
    map: BTreeMap<ID, usize>,
}

impl BodyStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            map: BTreeMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.bodies.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub(crate) fn push(&mut self, body: Body) {
        self.map.insert(body.id(), self.bodies.len());
        self.bodies.push(body);
    }

    pub(crate) fn get(&self, id: ID) -> Option<&Body> {
        self.map.get(&id).map(|&index| &self.bodies[index])
    }

    pub(crate) fn get_mut(&mut self, id: ID) -> Option<&mut Body> {
        self.map.get(&id).map(|&index| &mut self.bodies[index])
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

/// Mutable access to two distinct bodies of a slice, `i` must be lower than `j`.
pub(crate) fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
