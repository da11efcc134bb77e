use std::borrow::{Borrow, Cow};
use std::fmt;

/// A name object. Names are compared by their text without the leading `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CosName(Cow<'static, str>);

impl CosName {
    // ── Well-known names used by the form layer ──────────────────────────

    /// Field type.
    pub const FT: CosName = CosName::from_static("FT");
    /// Choice field type value.
    pub const CH: CosName = CosName::from_static("Ch");
    /// Partial field name.
    pub const T: CosName = CosName::from_static("T");
    /// Field flags bit field.
    pub const FF: CosName = CosName::from_static("Ff");
    /// Option list of a choice field.
    pub const OPT: CosName = CosName::from_static("Opt");
    /// Current value.
    pub const V: CosName = CosName::from_static("V");
    /// Default value.
    pub const DV: CosName = CosName::from_static("DV");
    /// Top index of a scrollable list box.
    pub const TI: CosName = CosName::from_static("TI");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CosName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

impl AsRef<str> for CosName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `IndexMap<CosName, _>` be queried with a plain `&str`.
impl Borrow<str> for CosName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CosName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for CosName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_names_compare_equal() {
        assert_eq!(CosName::OPT, CosName::new("Opt"));
        assert_eq!(CosName::OPT.to_string(), "/Opt");
        assert_ne!(CosName::V, CosName::DV);
    }
}
