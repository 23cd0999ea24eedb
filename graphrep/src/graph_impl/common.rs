/// Position of the first element equal to `item`, found by a linear scan.
pub(crate) fn position_of<T: PartialEq>(items: &[T], item: &T) -> Option<usize> {
  items.iter().position(|candidate| candidate == item)
}

/// Removes the first element equal to `item` and keeps the order of the rest.
/// Returns `false` if there was no such element.
pub(crate) fn remove_first<T: PartialEq>(items: &mut Vec<T>, item: &T) -> bool {
  match position_of(items, item) {
    Some(index) => {
      items.remove(index);
      true
    }
    None => false,
  }
}

/// Appends `item` unless an equal element is already present.
pub(crate) fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) -> bool {
  if items.contains(&item) {
    return false;
  }
  items.push(item);
  true
}
