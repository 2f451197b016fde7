use crate::error::{MatrixError, Result};
use std::collections::HashMap;

/// Ordered list of unique column names, with a name to position lookup.
///
/// The lookup is a cache derived from `names` and is rebuilt after every
/// change; it is never updated independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl Header {
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(MatrixError::EmptyHeader);
        }
        let index = build_index(&names)?;
        Ok(Self { names, index })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false once constructed, kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Resolves a column name, failing with `ColumnNotFound`.
    pub fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| MatrixError::column_not_found(name))
    }

    /// Resolves every name in order, failing on the first unknown one.
    pub fn require_all<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<usize>> {
        names.iter().map(|name| self.require(name.as_ref())).collect()
    }

    pub(crate) fn push(&mut self, name: String) -> Result<()> {
        if self.contains(&name) {
            return Err(MatrixError::duplicate_header(&name));
        }
        self.index.insert(name.clone(), self.names.len());
        self.names.push(name);
        Ok(())
    }

    /// Keeps the columns whose `keep` flag is set. Callers guarantee at least
    /// one column survives.
    pub(crate) fn retain(&mut self, keep: &[bool]) {
        let mut position = 0;
        self.names.retain(|_| {
            let kept = keep[position];
            position += 1;
            kept
        });
        self.reindex();
    }

    pub(crate) fn remove(&mut self, position: usize) -> String {
        let removed = self.names.remove(position);
        self.reindex();
        removed
    }

    fn reindex(&mut self) {
        self.index = self
            .names
            .iter()
            .enumerate()
            .map(|(position, name)| (name.clone(), position))
            .collect();
    }
}

fn build_index(names: &[String]) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(names.len());
    for (position, name) in names.iter().enumerate() {
        if index.insert(name.clone(), position).is_some() {
            return Err(MatrixError::duplicate_header(name));
        }
    }
    Ok(index)
}
