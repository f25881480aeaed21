use std::collections::BTreeMap;

use crate::models::Id;

/// Records of one entity kind keyed by id, with a private id counter.
///
/// Ids are handed out from 1 upwards and never reused, so id order is also
/// insertion order and every iterator below yields rows in that order.
#[derive(Debug)]
pub struct Table<T> {
    rows: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    /// Assigns the next id, builds the record with it and stores it.
    pub fn insert_with(&mut self, build: impl FnOnce(Id) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert(build(id))
    }

    pub fn get(&self, id: Id) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: Id) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub fn remove(&mut self, id: Id) -> Option<T> {
        self.rows.remove(&id)
    }

    pub fn contains(&self, id: Id) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// First row (lowest id) matching `predicate`, with its id.
    pub fn find_entry(&self, predicate: impl Fn(&T) -> bool) -> Option<(Id, &T)> {
        self.rows
            .iter()
            .find(|(_, row)| predicate(row))
            .map(|(id, row)| (*id, row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl<T: Clone> Table<T> {
    /// Clones every row matching `predicate`, in insertion order.
    pub fn filter_cloned(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }
}
