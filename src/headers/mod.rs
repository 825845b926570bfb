//! Ordered, multi-valued protocol header container.
//!
//! This module provides a low-level abstraction for handling protocol headers
//! such as the header block of an HTTP-like message. It supports adding,
//! setting, retrieving and merging headers, as well as parsing a wire-format
//! header block and serializing one back ([`Headers::parse_block`],
//! [`Headers::stringify`]).
//!
//! Headers are stored ordered by name under a comparison chosen once at
//! construction time: case-sensitive byte order, or ASCII case-insensitive
//! order as used for wire protocols. Within one name, values keep their
//! insertion order and may repeat.
//!
//! Both header names and values are raw strings, without validation or
//! restrictions on which headers are allowed. A name or value may also be
//! absent (`None`); an absent name orders before every present name and is a
//! legal key. This abstraction does not enforce any protocol semantics or
//! constraints; higher-level types are responsible for applying their own
//! rules by wrapping or constraining access to this structure.
//!
//! The container performs no internal synchronization. Callers sharing one
//! instance across threads must provide their own mutual exclusion.

use std::cmp::Ordering;

mod wire;

/// An ordered map from header name to one or more header values.
///
/// Every operation is total: absent names are reported as `None`, never as an
/// error, and `None` names and values are accepted everywhere.
#[derive(Debug, Clone)]
pub struct Headers {
    case_sensitive: bool,
    // Kept sorted under `compare`; every lookup is a binary search.
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    name: Option<String>,
    values: Vec<Option<String>>,
}

impl Headers {
    /// Creates an empty container with case-sensitive name ordering.
    pub fn new() -> Self {
        Self::with_case(true)
    }

    /// Creates an empty container with the given name ordering.
    ///
    /// The choice is fixed for the lifetime of the container and applies to
    /// every lookup, insertion and iteration.
    pub fn with_case(case_sensitive: bool) -> Self {
        Headers {
            case_sensitive,
            entries: Vec::new(),
        }
    }

    /// Creates an empty container with ASCII case-insensitive name ordering,
    /// the convention for wire-format headers.
    pub fn case_insensitive() -> Self {
        Self::with_case(false)
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Appends `value` to the values of `name`, creating the entry if absent.
    ///
    /// Prior values for `name` are preserved in insertion order.
    pub fn add<'a>(&mut self, name: impl Into<Option<&'a str>>, value: impl Into<Option<&'a str>>) {
        let name = name.into();
        let value = value.into().map(str::to_string);
        match self.position(name) {
            Ok(i) => self.entries[i].values.push(value),
            Err(i) => self.entries.insert(
                i,
                Entry {
                    name: name.map(str::to_string),
                    values: vec![value],
                },
            ),
        }
    }

    /// Sets `value` as the sole value of `name`, discarding any prior values.
    pub fn set<'a>(&mut self, name: impl Into<Option<&'a str>>, value: impl Into<Option<&'a str>>) {
        let name = name.into();
        let value = value.into().map(str::to_string);
        match self.position(name) {
            Ok(i) => self.entries[i].values = vec![value],
            Err(i) => self.entries.insert(
                i,
                Entry {
                    name: name.map(str::to_string),
                    values: vec![value],
                },
            ),
        }
    }

    /// Returns the first value stored for `name`.
    ///
    /// `None` means the name is absent or its first value is a null value;
    /// [`get`](Self::get) tells the two apart.
    pub fn get_first<'a>(&self, name: impl Into<Option<&'a str>>) -> Option<&str> {
        self.get(name)?.first()?.as_deref()
    }

    /// Returns all values stored for `name`, in insertion order.
    pub fn get<'a>(&self, name: impl Into<Option<&'a str>>) -> Option<&[Option<String>]> {
        match self.position(name.into()) {
            Ok(i) => Some(self.entries[i].values.as_slice()),
            Err(_) => None,
        }
    }

    pub fn contains_name<'a>(&self, name: impl Into<Option<&'a str>>) -> bool {
        self.position(name.into()).is_ok()
    }

    /// Removes `name` and returns its values, if present.
    pub fn remove<'a>(&mut self, name: impl Into<Option<&'a str>>) -> Option<Vec<Option<String>>> {
        match self.position(name.into()) {
            Ok(i) => Some(self.entries.remove(i).values),
            Err(_) => None,
        }
    }

    /// Appends every (name, value) pair of `other` to this container.
    ///
    /// Entries are taken in `other`'s order and each value sequence in order,
    /// as if by repeated [`add`](Self::add): values from `other` land after
    /// any pre-existing values for the same name. This is a merge, not a
    /// replace.
    pub fn put_all(&mut self, other: &Headers) {
        for entry in &other.entries {
            for value in &entry.values {
                self.add(entry.name.as_deref(), value.as_deref());
            }
        }
    }

    /// Iterates entries in comparator order over names.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, &[Option<String>])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_deref(), e.values.as_slice()))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, name: Option<&str>) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|e| self.compare(e.name.as_deref(), name))
    }

    // An absent name orders before every present name in both modes.
    fn compare(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) if self.case_sensitive => a.cmp(b),
            (Some(a), Some(b)) => cmp_ignore_ascii_case(a, b),
        }
    }
}

impl Default for Headers {
    /// Equivalent to [`Headers::new`]: case-sensitive name ordering.
    fn default() -> Self {
        Self::new()
    }
}

fn cmp_ignore_ascii_case(lhs: &str, rhs: &str) -> Ordering {
    let lhs = lhs.bytes().map(|b| b.to_ascii_lowercase());
    let rhs = rhs.bytes().map(|b| b.to_ascii_lowercase());
    lhs.cmp(rhs)
}
