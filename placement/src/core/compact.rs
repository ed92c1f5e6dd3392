//! Order-preserving removal shared by the offer list and candidate slots.

/// Remove the first element matching `pred`, shifting every later element one
/// position earlier. Relative order of the remaining elements is unchanged.
pub fn remove_first<T>(items: &mut Vec<T>, pred: impl FnMut(&T) -> bool) -> Option<T> {
    let index = items.iter().position(pred)?;
    Some(items.remove(index))
}
