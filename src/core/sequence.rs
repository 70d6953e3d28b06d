//! Ordered list wrapper with chainable transforms
//!
//! Operations come in two families and the signatures say which is which:
//!
//! - In place: [`Sequence::prefix`], [`Sequence::suffix`],
//!   [`Sequence::surround`] and [`Sequence::walk`] take `&mut self`, rewrite
//!   the receiver's items and return `&mut Self`.
//! - Pure: [`Sequence::map`], [`Sequence::filter`] and [`Sequence::take`]
//!   take `&self` and return a new `Sequence`, leaving the receiver alone.
//!
//! Formatting ([`Sequence::stringify`], [`Sequence::human`]) never mutates and
//! returns `None` for an empty sequence.
//!
//! ```
//! use dotlist::Sequence;
//!
//! let mut names = Sequence::new(vec!["ann".to_string(), "bob".to_string(), "cy".to_string()]);
//! names.surround("'");
//! assert_eq!(names.human(" or").as_deref(), Some("'ann', 'bob' or 'cy'"));
//! ```

use crate::core::argument::IntegerArgument;
use crate::core::value::Render;
use crate::error::Result;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Options for [`Sequence::stringify_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringifyOptions {
    /// Placed between items
    pub delimiter: String,
    /// Added before every item
    pub prefix: String,
    /// Added after every item
    pub suffix: String,
}

impl Default for StringifyOptions {
    fn default() -> Self {
        Self {
            delimiter: ", ".to_string(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

/// Options for [`Sequence::human_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HumanOptions {
    /// Placed before the last item, followed by a space
    pub ending: String,
}

impl Default for HumanOptions {
    fn default() -> Self {
        Self {
            ending: " and".to_string(),
        }
    }
}

/// An ordered, 0-indexed list of items
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Same as [`Sequence::new`]
    pub fn create(items: Vec<T>) -> Self {
        Self::new(items)
    }

    /// The live items
    pub fn get_list(&self) -> &[T] {
        &self.items
    }

    pub fn into_list(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Item at `index`.
    ///
    /// `index` must carry an integer; anything else is an `InvalidArgument`.
    /// Out-of-range and negative indices give `Ok(None)`.
    pub fn get<I: IntegerArgument>(&self, index: I) -> Result<Option<&T>> {
        let index = index.to_integer("Sequence::get")?;
        Ok(usize::try_from(index)
            .ok()
            .and_then(|index| self.items.get(index)))
    }

    /// New sequence of `callback(item)` for every item, in order
    pub fn map<U, F>(&self, callback: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence::new(self.items.iter().map(callback).collect())
    }

    /// Call `callback(item, index)` on every item in place
    pub fn walk<F>(&mut self, mut callback: F) -> &mut Self
    where
        F: FnMut(&mut T, usize),
    {
        for (index, item) in self.items.iter_mut().enumerate() {
            callback(item, index);
        }
        self
    }
}

impl<T: Clone> Sequence<T> {
    /// New sequence of the items `predicate` accepts, in order
    pub fn filter<F>(&self, mut predicate: F) -> Sequence<T>
    where
        F: FnMut(&T) -> bool,
    {
        let kept: Vec<T> = self
            .items
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect();
        trace!("filter kept {} of {} items", kept.len(), self.items.len());
        Sequence::new(kept)
    }

    /// New sequence of the first `amount` items, or of all but the last
    /// `-amount` items when `amount` is negative. Clamps to the length.
    pub fn take<I: IntegerArgument>(&self, amount: I) -> Result<Sequence<T>> {
        let amount = amount.to_integer("Sequence::take")?;
        let len = self.items.len();
        let magnitude = usize::try_from(amount.unsigned_abs()).unwrap_or(usize::MAX);
        let end = if amount >= 0 {
            magnitude.min(len)
        } else {
            len.saturating_sub(magnitude)
        };
        trace!("take({}) keeps {} of {} items", amount, end, len);
        Ok(Sequence::new(self.items[..end].to_vec()))
    }
}

impl<T: Render + From<String>> Sequence<T> {
    /// Prepend `s` to every item in place
    pub fn prefix(&mut self, s: &str) -> &mut Self {
        self.rewrite(|item| format!("{}{}", s, item))
    }

    /// Append `s` to every item in place
    pub fn suffix(&mut self, s: &str) -> &mut Self {
        self.rewrite(|item| format!("{}{}", item, s))
    }

    /// Put `s` on both sides of every item in place
    pub fn surround(&mut self, s: &str) -> &mut Self {
        self.rewrite(|item| format!("{}{}{}", s, item, s))
    }

    fn rewrite<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&str) -> String,
    {
        for item in &mut self.items {
            *item = T::from(f(&item.render()));
        }
        self
    }
}

impl<T: Render> Sequence<T> {
    /// Join `prefix + item + suffix` for every item with `delimiter`
    pub fn stringify(&self, delimiter: &str, prefix: &str, suffix: &str) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let parts: Vec<String> = self
            .items
            .iter()
            .map(|item| format!("{}{}{}", prefix, item.render(), suffix))
            .collect();
        Some(parts.join(delimiter))
    }

    pub fn stringify_with(&self, options: &StringifyOptions) -> Option<String> {
        self.stringify(&options.delimiter, &options.prefix, &options.suffix)
    }

    /// Join with `", "` and put `ending` before the last item:
    /// `["a", "b", "c"]` becomes `"a, b and c"`.
    ///
    /// The last separator is found by searching the joined text for the last
    /// `", "`, so an item that itself contains `", "` moves the split point.
    pub fn human(&self, ending: &str) -> Option<String> {
        let last = self.items.last()?;
        let joined = self
            .items
            .iter()
            .map(|item| item.render())
            .collect::<Vec<_>>()
            .join(", ");

        match joined.rfind(", ") {
            Some(pos) => Some(format!("{}{} {}", &joined[..pos], ending, last.render())),
            None => Some(joined),
        }
    }

    pub fn human_with(&self, options: &HumanOptions) -> Option<String> {
        self.human(&options.ending)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Render> Render for Sequence<T> {
    fn render(&self) -> String {
        self.stringify_with(&StringifyOptions::default())
            .unwrap_or_default()
    }
}

impl<T: Render> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DotListError;
    use serde_yaml::Value;

    fn strings(items: &[&str]) -> Sequence<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get() {
        let seq = strings(&["a", "b"]);
        assert_eq!(seq.get(1).unwrap(), Some(&"b".to_string()));
        assert_eq!(seq.get(2).unwrap(), None);
        assert_eq!(seq.get(-1).unwrap(), None);
        assert_eq!(Sequence::<String>::default().get(0).unwrap(), None);
    }

    #[test]
    fn test_get_rejects_non_integers() {
        let seq = Sequence::new(vec![1]);
        let err = seq.get("x").unwrap_err();
        assert!(matches!(err, DotListError::InvalidArgument { .. }));
        assert!(seq.get(0.0).is_err());
        assert_eq!(seq.get(Value::from(0)).unwrap(), Some(&1));
    }

    #[test]
    fn test_prefix_mutates_receiver() {
        let mut seq = strings(&["a", "b"]);
        let returned: *const Sequence<String> = seq.prefix(">");
        assert!(std::ptr::eq(returned, &seq));
        assert_eq!(seq.get_list(), &[">a", ">b"]);
    }

    #[test]
    fn test_suffix_and_surround_chain() {
        let mut seq = strings(&["x", "y"]);
        seq.suffix(";").surround("|");
        assert_eq!(seq.get_list(), &["|x;|", "|y;|"]);
    }

    #[test]
    fn test_prefix_on_yaml_values() {
        let mut seq = Sequence::new(vec![Value::from(1), Value::from("b")]);
        seq.prefix("#");
        assert_eq!(seq.get_list(), &[Value::from("#1"), Value::from("#b")]);
    }

    #[test]
    fn test_stringify() {
        let seq = strings(&["a", "b", "c"]);
        assert_eq!(seq.stringify(",", "[", "]").as_deref(), Some("[a],[b],[c]"));
        assert_eq!(seq.stringify_with(&StringifyOptions::default()).as_deref(), Some("a, b, c"));
        assert_eq!(seq.get_list(), &["a", "b", "c"]);
    }

    #[test]
    fn test_stringify_keeps_item_trailing_delimiter_chars() {
        let seq = strings(&["a,", "b "]);
        assert_eq!(seq.stringify(", ", "", "").as_deref(), Some("a,, b "));
    }

    #[test]
    fn test_empty_formatting() {
        let seq = Sequence::<String>::default();
        assert_eq!(seq.stringify(", ", "", ""), None);
        assert_eq!(seq.human(" and"), None);
        assert_eq!(seq.to_string(), "");
    }

    #[test]
    fn test_display_uses_defaults() {
        assert_eq!(Sequence::new(vec![1, 2, 3]).to_string(), "1, 2, 3");
    }

    #[test]
    fn test_human() {
        let options = HumanOptions::default();
        assert_eq!(
            strings(&["a", "b", "c", "d"]).human_with(&options).as_deref(),
            Some("a, b, c and d")
        );
        assert_eq!(strings(&["a", "b"]).human(" or").as_deref(), Some("a or b"));
        assert_eq!(strings(&["a"]).human_with(&options).as_deref(), Some("a"));
    }

    #[test]
    fn test_human_searches_joined_text() {
        let seq = strings(&["x, y"]);
        assert_eq!(seq.human(" and").as_deref(), Some("x and x, y"));

        let seq = strings(&["a", "b, c"]);
        assert_eq!(seq.human(" and").as_deref(), Some("a, b and b, c"));
    }

    #[test]
    fn test_map_is_pure() {
        let seq = Sequence::new(vec![1, 2, 3]);
        let doubled = seq.map(|x| x * 2);
        assert_eq!(doubled.get_list(), &[2, 4, 6]);
        assert_eq!(seq.get_list(), &[1, 2, 3]);

        let lengths = strings(&["ab", "c"]).map(|s| s.len());
        assert_eq!(lengths.into_list(), vec![2, 1]);
    }

    #[test]
    fn test_walk_in_place_with_index() {
        let mut seq = strings(&["a", "b"]);
        seq.walk(|item, index| item.push_str(&index.to_string()));
        assert_eq!(seq.get_list(), &["a0", "b1"]);
    }

    #[test]
    fn test_filter_reindexes() {
        let seq = Sequence::new(vec![1, 2, 3, 4]);
        let even = seq.filter(|x| x % 2 == 0);
        assert_eq!(even.get_list(), &[2, 4]);
        assert_eq!(even.get(0).unwrap(), Some(&2));
        assert_eq!(even.get(1).unwrap(), Some(&4));
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_take() {
        let seq = Sequence::new(vec![1, 2, 3, 4, 5]);
        assert_eq!(seq.take(2).unwrap().get_list(), &[1, 2]);
        assert_eq!(seq.take(-2).unwrap().get_list(), &[1, 2, 3]);
        assert_eq!(seq.take(0).unwrap().get_list(), &[] as &[i32]);
        assert_eq!(seq.take(10).unwrap().get_list(), &[1, 2, 3, 4, 5]);
        assert!(seq.take(-10).unwrap().is_empty());
        assert!(seq.take(i64::MIN).unwrap().is_empty());
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn test_take_rejects_non_integers() {
        let seq = Sequence::new(vec![1, 2]);
        assert!(seq.take("2").unwrap_err().is_programmer_error());
        assert!(seq.take(1.5).is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let seq: Sequence<String> = serde_yaml::from_str("[a, b]").unwrap();
        assert_eq!(seq, strings(&["a", "b"]));
        assert_eq!(serde_yaml::to_string(&seq).unwrap(), "- a\n- b\n");
    }
}
