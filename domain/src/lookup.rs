//! Name lookup shared by every Get operation.

use tracing::debug;

use crate::{CoreError, Named};

/// Linear scan in insertion order; the first exact, case-sensitive match wins.
pub fn find_by_name<'a, T: Named>(records: &'a [T], name: &str) -> Result<&'a T, CoreError> {
    records
        .iter()
        .find(|r| r.name() == name)
        .ok_or_else(|| not_found::<T>(name))
}

/// Mutable variant of [`find_by_name`].
pub fn find_by_name_mut<'a, T: Named>(
    records: &'a mut [T],
    name: &str,
) -> Result<&'a mut T, CoreError> {
    records
        .iter_mut()
        .find(|r| r.name() == name)
        .ok_or_else(|| not_found::<T>(name))
}

fn not_found<T: Named>(name: &str) -> CoreError {
    let kind = T::KIND;
    debug!(%kind, name, "lookup miss");
    CoreError::NotFound {
        kind,
        name: name.to_string(),
    }
}
