use std::slice::Iter;
use std::vec::IntoIter;

/// Header is single `Name: Value` field of a message.
/// Name is compared byte by byte, so `Subject` and `subject` are different headers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<N, V> From<(N, V)> for Header
    where N: Into<String>, V: Into<String>
{
    fn from((name, value): (N, V)) -> Self {
        Header::new(name, value)
    }
}

/// HeaderList keeps headers in order they were added or parsed.
/// Headers with the same name are not merged, each occurrence is stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[derive(From, Into)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct HeaderList {
    container: Vec<Header>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self {
            container: Vec::new(),
        }
    }

    #[inline]
    pub fn container(&self) -> &[Header] {
        &self.container
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Header> {
        self.container.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.container.iter().any(|h| h.name == name)
    }

    /// get returns value of first header with given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.container.iter()
            .find(|h| h.name == name)
            .map(|h| h.value.as_str())
    }

    /// get_all returns values of all headers with given name in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item=&'a str> + 'a {
        self.container.iter()
            .filter(move |h| h.name == name)
            .map(|h| h.value.as_str())
    }

    #[inline]
    pub fn push(&mut self, header: Header) {
        self.container.push(header);
    }

    #[inline]
    pub(crate) fn last_mut(&mut self) -> Option<&mut Header> {
        self.container.last_mut()
    }

    #[inline]
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Header> {
        self.container.iter_mut()
    }

    /// set appends new header.
    /// If replace is set value of first header with given name is overwritten in place instead.
    /// When there is no such header it's appended anyway.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>, replace: bool) {
        let name = name.into();
        let value = value.into();
        if replace {
            if let Some(h) = self.container.iter_mut().find(|h| h.name == name) {
                h.value = value;
                return;
            }
        }
        self.container.push(Header { name, value });
    }

    /// remove drops every header with given name and returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.container.len();
        self.container.retain(|h| h.name != name);
        before - self.container.len()
    }
}

impl IntoIterator for HeaderList {
    type Item = Header;
    type IntoIter = IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.container.into_iter()
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a Header;
    type IntoIter = Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.container.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn list(headers: &[(&str, &str)]) -> HeaderList {
        headers.iter().cloned().map(Header::from).collect::<Vec<_>>().into()
    }

    #[test]
    fn test_can_lookup_headers() {
        let l = list(&[
            ("Via", "first.example.com"),
            ("Host", "www.example.com"),
            ("Via", "second.example.com"),
            ("X-Empty", ""),
        ]);
        assert!(l.contains("Via"));
        assert!(!l.contains("via"));
        assert_eq!(l.get("Via"), Some("first.example.com"));
        assert_eq!(l.get("X-Empty"), Some(""));
        assert_eq!(l.get("X-Missing"), None);
        assert_eq!(l.get_all("Via").collect::<Vec<_>>(), vec!["first.example.com", "second.example.com"]);
    }

    #[test]
    fn test_set_appends_or_replaces() {
        let mut l = HeaderList::new();
        l.set("Via", "a", false);
        l.set("Host", "h", false);
        l.set("Via", "b", false);
        assert_eq!(l, list(&[("Via", "a"), ("Host", "h"), ("Via", "b")]));

        l.set("Via", "c", true);
        assert_eq!(l, list(&[("Via", "c"), ("Host", "h"), ("Via", "b")]));

        l.set("X-New", "n", true);
        assert_eq!(l, list(&[("Via", "c"), ("Host", "h"), ("Via", "b"), ("X-New", "n")]));
    }

    #[test]
    fn test_remove_drops_all_occurrences() {
        let mut l = list(&[("Via", "a"), ("Host", "h"), ("Via", "b"), ("Date", "d")]);
        assert_eq!(l.remove("Via"), 2);
        assert_eq!(l, list(&[("Host", "h"), ("Date", "d")]));
        assert_eq!(l.remove("Via"), 0);
    }
}
