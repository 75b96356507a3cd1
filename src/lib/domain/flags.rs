//! Ordered, duplicate free collections of compiler flags

use indexmap::IndexSet;

use crate::domain::commands::arguments::Argument;

/// The flags passed to the compiler for one build configuration.
///
/// Flags are opaque strings. A flag contributed more than once, by the same or by
/// different source lists, is kept only at the position of its first occurrence, so
/// the order the compiler sees is the order the tables were layered in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlagSet(IndexSet<Argument>);

impl FlagSet {
    /// Layers `base` and every list in `extensions`, in that order
    pub fn compose<'a, B, E>(base: B, extensions: E) -> Self
    where
        B: IntoIterator<Item = &'a str>,
        E: IntoIterator,
        E::Item: IntoIterator<Item = &'a str>,
    {
        let mut flags = Self::default();
        flags.extend(base);
        for extension in extensions {
            flags.extend(extension);
        }
        flags
    }

    /// A new [`FlagSet`] that holds `self` followed by the unseen flags of `extension`
    pub fn layered<'a>(&self, extension: impl IntoIterator<Item = &'a str>) -> Self {
        let mut flags = self.clone();
        flags.extend(extension);
        flags
    }

    fn extend<'a>(&mut self, flags: impl IntoIterator<Item = &'a str>) {
        for flag in flags {
            if !self.0.contains(flag) {
                self.0.insert(Argument::from(flag));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, flag: &str) -> bool {
        self.0.contains(flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a FlagSet {
    type Item = &'a Argument;
    type IntoIter = indexmap::set::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strs(flags: &FlagSet) -> Vec<&str> {
        flags.iter().map(|f| f.value.as_str()).collect()
    }

    #[test]
    fn test_compose_preserves_first_occurrence_order() {
        let flags = FlagSet::compose(["A", "B"], [["B", "C"]]);
        assert_eq!(as_strs(&flags), ["A", "B", "C"]);
    }

    #[test]
    fn test_compose_drops_repeats_inside_a_single_list() {
        let flags = FlagSet::compose(["-vet", "-vet-style", "-vet", "-vet-style"], Vec::<Vec<&str>>::new());
        assert_eq!(as_strs(&flags), ["-vet", "-vet-style"]);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let once = FlagSet::compose(["A", "B"], [vec!["B", "C"]]);
        let twice = FlagSet::compose(["A", "B"], [vec!["B", "C"], vec!["A", "B", "C"]]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_layered_keeps_the_base_untouched() {
        let debug = FlagSet::compose(["-vet", "-debug"], Vec::<Vec<&str>>::new());
        let asan = debug.layered(["-debug", "-sanitize:address"]);

        assert_eq!(as_strs(&debug), ["-vet", "-debug"]);
        assert_eq!(as_strs(&asan), ["-vet", "-debug", "-sanitize:address"]);
        assert!(asan.contains("-sanitize:address"));
        assert!(!debug.contains("-sanitize:address"));
    }
}
