use crate::containers::KeyedVec;
use crate::engine::domain::Domain;
use crate::engine::variables::VarId;
use crate::parsnip_assert_simple;

/// A full snapshot of one variable's domain, taken before the domain was first narrowed within a
/// search level.
#[derive(Clone, Debug)]
pub(crate) struct SavedDomain {
    var_id: VarId,
    domain: Domain,
}

/// The stack of domain snapshots, delimited per search level.
///
/// Every level of the search pushes a frame; the first narrowing of a variable's domain within
/// that level records a snapshot into the frame, and subsequent narrowings of the same variable
/// at the same level do not. Restoring a frame overwrites the live domains with the snapshots,
/// which makes restoration idempotent: a frame can be replayed once per candidate value of the
/// level without accumulating state.
#[derive(Clone, Debug, Default)]
pub(crate) struct DomainTrail {
    /// At index i is the position in `saved` where the i-th frame starts.
    frame_delimiter: Vec<usize>,
    saved: Vec<SavedDomain>,
}

impl DomainTrail {
    pub(crate) fn push_frame(&mut self) {
        self.frame_delimiter.push(self.saved.len());
    }

    /// Discards the top frame together with its snapshots.
    pub(crate) fn pop_frame(&mut self) {
        let start = self
            .frame_delimiter
            .pop()
            .expect("there is no frame to pop");
        self.saved.truncate(start);
    }

    /// Records a snapshot of `domain` in the top frame unless the frame already holds one for
    /// `var_id`.
    pub(crate) fn record_once(&mut self, var_id: VarId, domain: &Domain) {
        parsnip_assert_simple!(
            !self.frame_delimiter.is_empty(),
            "domains can only be narrowed within a search level"
        );
        let start = *self.frame_delimiter.last().expect("checked above");
        if self.saved[start..].iter().any(|saved| saved.var_id == var_id) {
            return;
        }
        self.saved.push(SavedDomain {
            var_id,
            domain: domain.clone(),
        });
    }

    /// Overwrites the live domains with every snapshot of the top frame.
    pub(crate) fn restore_into(&self, domains: &mut KeyedVec<VarId, Domain>) {
        let start = *self
            .frame_delimiter
            .last()
            .expect("there is no frame to restore");
        for saved in &self.saved[start..] {
            domains[saved.var_id] = saved.domain.clone();
        }
    }

    /// The number of active frames.
    pub(crate) fn depth(&self) -> usize {
        self.frame_delimiter.len()
    }

    pub(crate) fn clear(&mut self) {
        self.frame_delimiter.clear();
        self.saved.clear();
    }
}
