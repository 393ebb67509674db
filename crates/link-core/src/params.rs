//! # Query Parameters
//!
//! Ordered multi-map of query parameter name to value.
//! Repeated names keep their insertion order, and `sort` is stable so the
//! rendered query string is canonical.

use std::collections::HashMap;
use url::Url;

/// Where a name first appears, and how many pairs carry it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    first: usize,
    count: usize,
}

/// Ordered collection of query parameter pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
    index: HashMap<String, Slot>,
}

impl QueryParams {
    /// Create a new, empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single-valued parameter.
    ///
    /// Replaces the first existing value in place and removes any later
    /// values under the same name; appends when the name is new.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.index.get(&name).copied() {
            Some(Slot { first, count }) => {
                self.pairs[first].1 = value;
                if count > 1 {
                    let mut position = 0;
                    self.pairs.retain(|(n, _)| {
                        let keep = position <= first || *n != name;
                        position += 1;
                        keep
                    });
                    self.reindex();
                }
            }
            None => self.push(name, value),
        }
    }

    /// Set when the value is present and non-empty.
    pub fn set_opt(&mut self, name: impl Into<String>, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.set(name, value);
        }
    }

    /// Append a value, keeping any existing values under the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.push(name.into(), value.into());
    }

    fn push(&mut self, name: String, value: String) {
        let position = self.pairs.len();
        self.index
            .entry(name.clone())
            .and_modify(|slot| slot.count += 1)
            .or_insert(Slot {
                first: position,
                count: 1,
            });
        self.pairs.push((name, value));
    }

    /// Rebuild name positions after pairs move.
    fn reindex(&mut self) {
        self.index.clear();
        for (position, (name, _)) in self.pairs.iter().enumerate() {
            self.index
                .entry(name.clone())
                .and_modify(|slot| slot.count += 1)
                .or_insert(Slot {
                    first: position,
                    count: 1,
                });
        }
    }

    /// First value for a name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|slot| self.pairs[slot.first].1.as_str())
    }

    /// All values for a name, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Parameter names in order, one entry per pair.
    pub fn names(&self) -> Vec<&str> {
        self.pairs.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Stable sort by name.
    ///
    /// Names compare by UTF-16 code units, the order browsers'
    /// `URLSearchParams.sort()` uses, so checkout sees the same ordering.
    pub fn sort(&mut self) {
        self.pairs
            .sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
        self.reindex();
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Render onto `base` as an `application/x-www-form-urlencoded` query.
    pub fn apply_to(&self, base: &mut Url) {
        base.query_pairs_mut().clear().extend_pairs(self.iter());
    }

    /// Return the collected pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::QueryParams;
    use url::Url;

    #[test]
    fn test_set_replaces_in_place() {
        let mut params = QueryParams::new();
        params.set("a", "1");
        params.set("b", "2");
        params.append("a", "3");
        params.set("a", "4");

        assert_eq!(params.names(), vec!["a", "b"]);
        assert_eq!(params.get_all("a"), vec!["4"]);
    }

    #[test]
    fn test_set_after_sort_targets_moved_pair() {
        let mut params = QueryParams::new();
        params.set("v", "3");
        params.set("1.sku", "a");
        params.sort();
        params.set("v", "4");

        assert_eq!(params.names(), vec!["1.sku", "v"]);
        assert_eq!(params.get("v"), Some("4"));
        assert_eq!(params.get("1.sku"), Some("a"));
    }

    #[test]
    fn test_many_products_keep_distinct_names() {
        let mut params = QueryParams::new();
        for product in 1..=500 {
            params.set(format!("{}.sku", product), product.to_string());
            params.set(format!("{}.shop", product), "ge");
        }
        params.set("250.sku", "replaced");

        assert_eq!(params.len(), 1000);
        assert_eq!(params.get("250.sku"), Some("replaced"));
        assert_eq!(params.get("500.shop"), Some("ge"));
    }

    #[test]
    fn test_set_opt_skips_empty() {
        let mut params = QueryParams::new();
        params.set_opt("poNumber", None);
        params.set_opt("poNumber", Some(""));
        assert!(params.is_empty());

        params.set_opt("poNumber", Some("123"));
        assert_eq!(params.get("poNumber"), Some("123"));
    }

    #[test]
    fn test_append_keeps_order() {
        let mut params = QueryParams::new();
        params.append("1.addonId", "addon1");
        params.append("1.addonId", "addon2");
        assert_eq!(params.get("1.addonId"), Some("addon1"));
        assert_eq!(params.get_all("1.addonId"), vec!["addon1", "addon2"]);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut params = QueryParams::new();
        params.append("v", "3");
        params.append("1.option", "b,2");
        params.append("1.addonId", "x");
        params.append("1.option", "a,1");
        params.sort();

        assert_eq!(params.names(), vec!["1.addonId", "1.option", "1.option", "v"]);
        assert_eq!(params.get_all("1.option"), vec!["b,2", "a,1"]);
    }

    #[test]
    fn test_sort_uses_utf16_order() {
        // U+FF21 sorts before U+1F600 by UTF-8 bytes but after it by UTF-16 units
        let mut params = QueryParams::new();
        params.append("\u{FF21}", "fullwidth");
        params.append("\u{1F600}", "emoji");
        params.sort();
        assert_eq!(params.names(), vec!["\u{1F600}", "\u{FF21}"]);
    }

    #[test]
    fn test_apply_to_form_encodes() {
        let mut params = QueryParams::new();
        params.append("addressSearch", "123 Main St, Anytown");
        params.append("first%2F%40product.sku", "123");

        let mut url = Url::parse("https://checkout.sibipro.com/").unwrap();
        params.apply_to(&mut url);

        assert_eq!(
            url.as_str(),
            "https://checkout.sibipro.com/?addressSearch=123+Main+St%2C+Anytown&first%252F%2540product.sku=123"
        );
    }
}
