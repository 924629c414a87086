//! ID type wrappers for type safety.

pub mod office_id;

pub use office_id::OfficeId;
