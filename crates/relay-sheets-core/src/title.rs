//! Title-to-column index

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Mapping from header text to 0-based column index
///
/// Built once per write call from the ordered title list; placement of row
/// values happens by name through this mapping rather than by position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleOrder {
    titles: Vec<String>,
    index: HashMap<String, u16>,
}

impl TitleOrder {
    /// Build the index from an ordered sequence of titles.
    ///
    /// Each title gets its position as column index. A repeated title is a
    /// configuration error: placement by name would be ambiguous.
    pub fn build<I, S>(titles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let titles: Vec<String> = titles.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(titles.len());

        for (i, title) in titles.iter().enumerate() {
            if index.insert(title.clone(), i as u16).is_some() {
                return Err(Error::DuplicateTitle(title.clone()));
            }
        }

        Ok(Self { titles, index })
    }

    /// Resolve a title to its column index, failing for unknown titles
    pub fn column(&self, title: &str) -> Result<u16> {
        self.index
            .get(title)
            .copied()
            .ok_or_else(|| Error::UnknownColumn(title.to_string()))
    }

    /// Resolve a title to its column index if present
    pub fn get(&self, title: &str) -> Option<u16> {
        self.index.get(title).copied()
    }

    /// The titles in column order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of titles
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Check if there are no titles
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn titles_map_to_their_positions() {
        let order = TitleOrder::build(["name", "age", "city"]).unwrap();

        assert_eq!(order.column("name").unwrap(), 0);
        assert_eq!(order.column("age").unwrap(), 1);
        assert_eq!(order.column("city").unwrap(), 2);
        assert_eq!(order.titles(), &["name", "age", "city"]);
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn duplicate_titles_are_a_configuration_error() {
        match TitleOrder::build(["name", "age", "name"]) {
            Err(Error::DuplicateTitle(t)) => assert_eq!(t, "name"),
            other => panic!("expected DuplicateTitle, got {other:?}"),
        }
    }

    #[test]
    fn unknown_titles_are_rejected() {
        let order = TitleOrder::build(["name"]).unwrap();

        assert_eq!(order.get("height"), None);
        match order.column("height") {
            Err(Error::UnknownColumn(t)) => assert_eq!(t, "height"),
            other => panic!("expected UnknownColumn, got {other:?}"),
        }
    }

    #[test]
    fn empty_title_list_is_allowed() {
        let order = TitleOrder::build(Vec::<String>::new()).unwrap();
        assert!(order.is_empty());
    }
}
