/// Number of slots allocated by a freshly created [`DynamicArray`](crate::DynamicArray).
pub const DEFAULT_CAPACITY: usize = 16;

pub(crate) const GROWTH_FACTOR: usize = 2;

/// Returns the capacity to grow to so that at least `required` slots are available.
///
/// Starting from `current` (never less than [`DEFAULT_CAPACITY`]) the capacity is
/// multiplied by [`GROWTH_FACTOR`] until it fits; when that would overflow `required`
/// itself is returned. The result is never smaller than `current` nor than `required`.
pub(crate) fn grown_capacity(current: usize, required: usize) -> usize {
    let mut capacity = current.max(DEFAULT_CAPACITY);

    while capacity < required {
        capacity = match capacity.checked_mul(GROWTH_FACTOR) {
            Some(next) => next,
            None => return required,
        };
    }

    capacity
}
