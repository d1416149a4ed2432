use std::collections::BTreeMap;

use crate::foundation::core::SequenceId;
use crate::project::sequence::Sequence;

/// Top-level owner of every sequence in an editing session.
///
/// An explicitly owned context value: callers create one, thread it through
/// their operations, and replace it wholesale to open a different project.
/// Sequence ids are assigned monotonically and never reused within one
/// `Project` value, even across removals.
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    title: String,
    sequences: BTreeMap<SequenceId, Sequence>,
    next_sequence_id: u32,
}

impl Project {
    /// Create an empty project.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sequences: BTreeMap::new(),
            next_sequence_id: 0,
        }
    }

    /// Project title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rename the project.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Add `sequence` under the next unused id and return that id.
    pub fn add_sequence(&mut self, sequence: Sequence) -> SequenceId {
        let id = SequenceId(self.next_sequence_id);
        self.next_sequence_id += 1;
        self.sequences.insert(id, sequence);
        id
    }

    /// Remove the sequence under `id`. The id is never handed out again.
    pub fn remove_sequence(&mut self, id: SequenceId) -> Option<Sequence> {
        self.sequences.remove(&id)
    }

    /// Look up a sequence by id.
    pub fn sequence(&self, id: SequenceId) -> Option<&Sequence> {
        self.sequences.get(&id)
    }

    /// Mutable lookup by id.
    pub fn sequence_mut(&mut self, id: SequenceId) -> Option<&mut Sequence> {
        self.sequences.get_mut(&id)
    }

    /// All sequences, ordered by id.
    pub fn sequences(&self) -> &BTreeMap<SequenceId, Sequence> {
        &self.sequences
    }

    /// Reinstate a sequence under an explicit id, bumping the id counter
    /// past it. Used when rebuilding a project from persisted data.
    pub(crate) fn restore_sequence(&mut self, id: SequenceId, sequence: Sequence) {
        self.sequences.insert(id, sequence);
        self.next_sequence_id = self.next_sequence_id.max(id.0.saturating_add(1));
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new("Untitled Project")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/graph.rs"]
mod tests;
