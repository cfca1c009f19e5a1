//! Append-only log of operation records.

use lc_ir::{Name, Operation, RegisterRef};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::RegisterRegistry;

/// Position of a record in the operation log.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpId(usize);

impl OpId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Ordered operation records, with a per-target index.
///
/// Records are never removed or modified. `all_targeting` yields the records
/// for one register in definition order without scanning the whole log.
/// Records whose target is a literal stay in the log but are not indexed:
/// literals evaluate to themselves, so those records are never folded.
#[derive(Default, Debug)]
pub struct OperationStore {
    ops: Vec<Operation>,
    by_target: FxHashMap<Name, SmallVec<[OpId; 4]>>,
}

impl OperationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and declare its named target and source in `registry`.
    pub fn append(&mut self, op: Operation, registry: &mut RegisterRegistry) -> OpId {
        let id = OpId(self.ops.len());
        self.ops.push(op);
        if let RegisterRef::Named(target) = op.target {
            self.by_target.entry(target).or_default().push(id);
        }
        registry.declare_ref(op.target);
        registry.declare_ref(op.source);
        id
    }

    /// Records targeting `name`, in definition order.
    pub fn all_targeting(&self, name: Name) -> impl Iterator<Item = &Operation> + '_ {
        self.by_target
            .get(&name)
            .into_iter()
            .flatten()
            .filter_map(|id| self.ops.get(id.index()))
    }

    /// Every record, in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Operation> + '_ {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
