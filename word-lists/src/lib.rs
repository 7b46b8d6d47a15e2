mod prelude;
mod error;
mod lang;
mod source;
mod norvig;
mod datamuse;
mod extract;
mod convert;
mod json_list;
mod picker;

pub use crate::{
    error::*,
    lang::*,
    source::*,
    norvig::*,
    datamuse::*,
    extract::*,
    convert::*,
    json_list::*,
    picker::*,
};

pub trait HackTraitSortedContains<T> {
    /// Like `contains()` but optimized for sorted arrays.
    fn sorted_contains(&self, item: T) -> bool;
}

impl<T: Ord> HackTraitSortedContains<T> for Vec<T> {
    fn sorted_contains(&self, item: T) -> bool {
        self.binary_search(&item).is_ok()
    }
}

impl<T: Ord> HackTraitSortedContains<T> for [T] {
    fn sorted_contains(&self, item: T) -> bool {
        self.binary_search(&item).is_ok()
    }
}

impl HackTraitSortedContains<&str> for Vec<String> {
    fn sorted_contains(&self, item: &str) -> bool {
        self.binary_search_by(|w| w.as_str().cmp(item)).is_ok()
    }
}
