/// An attribute set on an element, with a name and value:
/// `name="value"`
///
/// The value is stored in its rendered string form and written verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: String,
    value: String,
}
impl Attribute {
    /// Create a new attribute. Any displayable value is accepted.
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }

    /// Returns the name of the attribute.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the attribute.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, r#"{}="{}""#, self.name, self.value)
    }
}

/// An ordered list of attributes, rendered space separated:
/// `k1="v1" k2="v2"`
///
/// Duplicates are kept and rendered in the order supplied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes(Vec<Attribute>);
impl Attributes {
    /// Create an attribute list from the given attributes.
    pub fn new(entries: impl IntoIterator<Item = Attribute>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Get an attribute by name.
    ///
    /// Searches the attributes in reverse order, so the last attribute with the same name is returned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.0.iter().rev().find(|a| a.name == name)
    }

    /// Returns the attributes in order.
    #[must_use]
    pub fn entries(&self) -> &[Attribute] {
        &self.0
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if there are no attributes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, attribute: Attribute) {
        self.0.push(attribute);
    }
}
impl std::fmt::Display for Attributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, attribute) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{attribute}")?;
        }
        Ok(())
    }
}
impl From<Vec<Attribute>> for Attributes {
    fn from(entries: Vec<Attribute>) -> Self {
        Self(entries)
    }
}
impl<const N: usize> From<[Attribute; N]> for Attributes {
    fn from(entries: [Attribute; N]) -> Self {
        Self::new(entries)
    }
}
impl FromIterator<Attribute> for Attributes {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Self::new(iter)
    }
}
