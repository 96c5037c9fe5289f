use std::collections::HashSet;

/// Hands out type names that are unique within one compilation unit.
///
/// A requested name that is already taken gets the smallest free integer
/// suffix, starting at `1`: `User`, `User1`, `User2`, ...
#[derive(Clone, Debug, Default)]
pub struct NameAllocator {
    taken: HashSet<String>,
}
impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, base_name: &str) -> String {
        if self.taken.insert(base_name.to_string()) {
            return base_name.to_string();
        }

        let mut suffix: usize = 1;
        loop {
            let candidate = format!("{base_name}{suffix}");
            if self.taken.insert(candidate.clone()) {
                log::trace!(
                    "Type name `{base_name}` is taken; using `{candidate}`.",
                );
                return candidate;
            }
            suffix += 1;
        }
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.taken.contains(name)
    }

    /// Marks `name` as taken without handing it out (e.g. the root `Data`
    /// type or a fragment type emitted elsewhere).
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.taken.insert(name.into());
    }
}
