//! Containers used by the solver.
mod keyed_vec;

pub use keyed_vec::KeyedVec;
pub use keyed_vec::StorageKey;

use fnv::FnvBuildHasher;

/// A [`std::collections::HashMap`] with the FNV hasher; the keys hashed by the solver are small
/// dense ids for which FNV outperforms the default hasher.
pub type HashMap<K, V, Hasher = FnvBuildHasher> = std::collections::HashMap<K, V, Hasher>;

/// A [`std::collections::HashSet`] with the FNV hasher.
pub type HashSet<K, Hasher = FnvBuildHasher> = std::collections::HashSet<K, Hasher>;
