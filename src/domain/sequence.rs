//! First-match helpers over slices.

/// Apply `f` to the first item satisfying `predicate`.
pub fn first_then_apply<T, U, P, F>(items: &[T], predicate: P, f: F) -> Option<U>
where
    P: Fn(&T) -> bool,
    F: FnOnce(&T) -> U,
{
    items.iter().find(|&item| predicate(item)).map(f)
}

/// Lowercased copy of the first string satisfying `predicate`.
pub fn first_then_lower_case<S, P>(items: &[S], predicate: P) -> Option<String>
where
    S: AsRef<str>,
    P: Fn(&str) -> bool,
{
    first_then_apply(items, |s| predicate(s.as_ref()), |s| s.as_ref().to_lowercase())
}
