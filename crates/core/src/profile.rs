//! Profile trait: the read-only contract shared by identity records.

/// Common accessor interface over an identity record.
///
/// Code written against `Profile` (generic or via `&dyn Profile`) accepts
/// every record type implementing it, and the shared accessors return the
/// same results regardless of the concrete type behind the contract.
pub trait Profile {
    /// Returns the record's name.
    fn name(&self) -> &str;

    /// Returns the record's age.
    ///
    /// Signed: the value is stored exactly as constructed, with no range
    /// checking anywhere in the domain.
    fn age(&self) -> i32;
}
