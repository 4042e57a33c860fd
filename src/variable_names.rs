use crate::containers::HashMap;
use crate::engine::variables::VarId;

/// The user-provided names of the model's variables. Variables are not required to be named;
/// nameless variables display through their id.
#[derive(Debug, Default, Clone)]
pub(crate) struct VariableNames {
    names: HashMap<VarId, String>,
}

impl VariableNames {
    /// Get the name associated with the variable, if it has one.
    pub(crate) fn get_name(&self, vid: VarId) -> Option<&str> {
        self.names.get(&vid).map(|name| name.as_str())
    }

    /// Associates a name with the variable. Overrides an existing name, should there be one.
    pub(crate) fn add(&mut self, vid: VarId, name: String) {
        let _ = self.names.insert(vid, name);
    }
}
