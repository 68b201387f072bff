use std::fmt;

/// Capability interface over an ordered list of `name=value` header parameters.
///
/// Name lookups are ASCII case-insensitive. Implementations decide how entries are stored; the
/// quality value helpers only go through these methods.
pub trait Parameters {
    /// Returns the value of the first parameter named `name`.
    fn find(&self, name: &str) -> Option<&str>;

    /// Replaces the value of the first parameter named `name`.
    ///
    /// Returns false, leaving the list unchanged, if there is no such parameter.
    fn replace(&mut self, name: &str, value: String) -> bool;

    /// Appends a parameter after all existing ones.
    fn add(&mut self, name: &str, value: String);

    /// Removes the first parameter named `name`, returning its value.
    fn remove(&mut self, name: &str) -> Option<String>;
}

/// A single header parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub value: String,
}

impl Param {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Param {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Ordered list of header parameters, e.g. the `; charset=utf-8; q=0.5` tail of a header item.
///
/// # Examples
/// ```
/// use actix_header::{Parameters, ParamList};
///
/// let mut params = ParamList::new();
/// params.add("charset", "utf-8".to_owned());
/// params.add("Q", "0.5".to_owned());
///
/// assert_eq!(params.find("q"), Some("0.5"));
/// assert_eq!(params.to_string(), "charset=utf-8; Q=0.5");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList(Vec<Param>);

impl ParamList {
    pub fn new() -> Self {
        ParamList(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Param> {
        self.0.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl Parameters for ParamList {
    fn find(&self, name: &str) -> Option<&str> {
        self.position(name).map(|idx| self.0[idx].value.as_str())
    }

    fn replace(&mut self, name: &str, value: String) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.0[idx].value = value;
                true
            }
            None => false,
        }
    }

    fn add(&mut self, name: &str, value: String) {
        self.0.push(Param::new(name, value));
    }

    fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|idx| self.0.remove(idx).value)
    }
}

/// Plain `(name, value)` vectors satisfy the capability too.
impl Parameters for Vec<(String, String)> {
    fn find(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn replace(&mut self, name: &str, value: String) -> bool {
        match self.iter_mut().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some((_, v)) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    fn add(&mut self, name: &str, value: String) {
        self.push((name.to_owned(), value));
    }

    fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(Vec::remove(self, idx).1)
    }
}

impl FromIterator<Param> for ParamList {
    fn from_iter<I: IntoIterator<Item = Param>>(iter: I) -> Self {
        ParamList(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ParamList {
    type Item = &'a Param;
    type IntoIter = std::slice::Iter<'a, Param>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ParamList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();

        if let Some(param) = iter.next() {
            fmt::Display::fmt(param, f)?;
        }

        for param in iter {
            f.write_str("; ")?;
            fmt::Display::fmt(param, f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> ParamList {
        vec![
            Param::new("charset", "utf-8"),
            Param::new("Q", "0.5"),
            Param::new("q", "0.1"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn find_is_case_insensitive() {
        let params = list();
        assert_eq!(params.find("CHARSET"), Some("utf-8"));
        assert_eq!(params.find("q"), Some("0.5"));
        assert_eq!(params.find("level"), None);
    }

    #[test]
    fn replace_first_match() {
        let mut params = list();
        assert!(params.replace("q", "1.0".to_owned()));
        assert!(!params.replace("level", "1".to_owned()));
        assert_eq!(params.to_string(), "charset=utf-8; Q=1.0; q=0.1");
    }

    #[test]
    fn remove_first_match() {
        let mut params = list();
        assert_eq!(params.remove("q"), Some("0.5".to_owned()));
        assert_eq!(params.remove("q"), Some("0.1".to_owned()));
        assert_eq!(params.remove("q"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn tuple_vec() {
        let mut params = vec![("a".to_owned(), "1".to_owned())];
        params.add("B", "2".to_owned());
        assert_eq!(Parameters::find(&params, "b"), Some("2"));
        assert!(params.replace("A", "3".to_owned()));
        assert_eq!(Parameters::remove(&mut params, "a"), Some("3".to_owned()));
        assert_eq!(params, vec![("B".to_owned(), "2".to_owned())]);
    }
}
