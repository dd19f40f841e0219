pub mod equality_policy;
pub mod name_policy;
pub mod natural_sort;
pub mod sync_options;

pub use equality_policy::{EqualityPolicy, IdentityKey};
pub use name_policy::NamePolicy;
pub use natural_sort::{natural_cmp, natural_sort};
pub use sync_options::SyncOptions;
