// src/db/repository.rs

use crate::db::store::{Collection, Record};

/// O "banco" de um módulo: guarda a coleção atual e troca por uma nova a
/// cada mutação. A coleção inicial é injetada pelo construtor.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    current: Collection<T>,
}

impl<T: Record + Clone> InMemoryRepository<T> {
    pub fn new(initial: Vec<T>) -> Self {
        Self {
            current: Collection::new(initial),
        }
    }

    pub fn snapshot(&self) -> &Collection<T> {
        &self.current
    }

    pub fn list(&self) -> &[T] {
        self.current.as_slice()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.current.find(id)
    }

    pub fn insert(&mut self, record: T) -> T {
        self.current = self.current.with_appended(record.clone());
        record
    }

    /// Substitui o registro por `f(atual)`. `None` quando o id não existe.
    pub fn update_with<F>(&mut self, id: &str, f: F) -> Option<T>
    where
        F: FnOnce(&T) -> T,
    {
        if !self.current.contains(id) {
            return None;
        }
        self.current = self.current.with_replaced(id, f);
        self.current.find(id).cloned()
    }

    /// `true` se algum registro foi removido.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.current.contains(id) {
            return false;
        }
        self.current = self.current.without(id);
        true
    }

    pub fn replace_all(&mut self, records: Vec<T>) {
        self.current = Collection::new(records);
    }

    pub fn clear(&mut self) {
        self.current = Collection::default();
    }
}
