use std::{collections::BTreeMap, rc::Rc};

use crate::math::{
    kind::{self, Kind},
    vector::Vector,
};

/// Named vector contributing to the integration of a body.
///
/// A temporary entry is consumed after one integration pass, that is how an
/// instantaneous push like a jump is modelled.
#[derive(Debug)]
pub struct Entry<K: Kind> {
    id: Rc<str>,
    vector: Vector<K>,
    is_temporary: bool,
}

impl<K: Kind> Clone for Entry<K> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            vector: self.vector,
            is_temporary: self.is_temporary,
        }
    }
}

impl<K: Kind> Entry<K> {
    pub fn new<'a>(id: impl Into<&'a str>, vector: impl Into<Vector<K>>) -> Self {
        let id = id.into();
        let id = Rc::from(id);
        Self {
            id,
            vector: vector.into(),
            is_temporary: false,
        }
    }

    pub fn temporary<'a>(id: impl Into<&'a str>, vector: impl Into<Vector<K>>) -> Self {
        let mut entry = Self::new(id, vector);
        entry.is_temporary = true;
        entry
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get_vector(&self) -> Vector<K> {
        self.vector
    }

    pub fn set_vector(&mut self, mut reducer: impl FnMut(Vector<K>) -> Vector<K>) {
        self.vector = reducer(self.vector)
    }

    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }

    pub fn set_temporary(&mut self, is_temporary: bool) {
        self.is_temporary = is_temporary
    }
}

/// Set of named vectors of one kind, summed by the integrator.
///
/// Entries are keyed by id, adding an entry with an existing id replaces it. This is
/// how a driver maps input to forces, e.g. `"move"` is replaced on every key press.
#[derive(Debug)]
pub struct VectorGroup<K: Kind> {
    entries: BTreeMap<Rc<str>, Entry<K>>,
}

impl<K: Kind> Default for VectorGroup<K> {
    fn default() -> Self {
        Self {
            entries: Default::default(),
        }
    }
}

impl<K: Kind> Clone for VectorGroup<K> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

pub type ForceEntry = Entry<kind::Force>;

pub type ForceGroup = VectorGroup<kind::Force>;

pub type AccelerationEntry = Entry<kind::Acceleration>;

pub type AccelerationGroup = VectorGroup<kind::Acceleration>;

impl<K: Kind> VectorGroup<K> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add(&mut self, entry: Entry<K>) {
        self.entries.insert(entry.id.clone(), entry);
    }

    // shortcut for a permanent entry
    pub fn insert<'a>(&mut self, id: impl Into<&'a str>, vector: impl Into<Vector<K>>) {
        self.add(Entry::new(id, vector));
    }

    pub fn get(&self, id: &str) -> Option<&Entry<K>> {
        self.entries.get(id)
    }

    pub fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entry<K>> {
        self.entries.get_mut(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Entry<K>> {
        self.entries.remove(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn sum(&self) -> Vector<K> {
        self.entries.values().map(Entry::get_vector).sum()
    }

    // drop every temporary entry, called once they took part in an integration pass
    pub fn retain_permanent(&mut self) {
        self.entries.retain(|_, entry| !entry.is_temporary());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry<K>)> {
        self.entries.iter().map(|(id, entry)| (&**id, entry))
    }
}

impl<K: Kind> FromIterator<Entry<K>> for VectorGroup<K> {
    fn from_iter<T: IntoIterator<Item = Entry<K>>>(iter: T) -> Self {
        let mut group = Self::new();
        iter.into_iter().for_each(|entry| group.add(entry));
        group
    }
}
