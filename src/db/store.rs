// src/db/store.rs

/// Um registro identificado por um id opaco, único dentro da sua coleção.
pub trait Record {
    fn id(&self) -> &str;
}

/// Lista ordenada de registros de um tipo.
///
/// Toda mutação devolve uma coleção nova; a original nunca é alterada.
/// A ordem de inserção é a ordem de exibição.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T: Record + Clone> Collection<T> {
    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Nova coleção com o registro no final.
    pub fn with_appended(&self, record: T) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Nova coleção com o registro `id` substituído por `f(atual)`.
    /// Id inexistente devolve uma cópia idêntica.
    pub fn with_replaced<F>(&self, id: &str, f: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        let mut f = Some(f);
        let records = self
            .records
            .iter()
            .map(|r| {
                if r.id() == id {
                    if let Some(f) = f.take() {
                        return f(r);
                    }
                }
                r.clone()
            })
            .collect();
        Self { records }
    }

    /// Nova coleção sem o registro `id`, preservando a ordem dos demais.
    pub fn without(&self, id: &str) -> Self {
        let records = self
            .records
            .iter()
            .filter(|r| r.id() != id)
            .cloned()
            .collect();
        Self { records }
    }
}

impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
