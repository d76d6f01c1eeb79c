//! Multi-field roster filter.
//!
//! Six independent criteria, all ANDed. An empty text criterion or an
//! [`Selection::All`] choice never excludes a record.

use std::str::FromStr;

use scout_model::{Scout, Shift};

/// Exact-match choice with an "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    /// Like [`Selection::admits`], but an absent value only passes `All`.
    pub fn admits_optional(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Self::All, _) => true,
            (Self::Only(expected), Some(value)) => expected == value,
            (Self::Only(_), None) => false,
        }
    }
}

impl<T> FromStr for Selection<T>
where
    T: FromStr,
{
    type Err = T::Err;

    /// `all` (any case) or an empty string selects everything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_sentinel(s) {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl From<String> for Selection<String> {
    fn from(value: String) -> Self {
        if is_sentinel(&value) {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

fn is_sentinel(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("all")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoutFilter {
    /// Case-insensitive substring of the clan name.
    pub clan: String,
    /// Exact language code.
    pub language: Selection<String>,
    /// Exact map name.
    pub location: Selection<String>,
    pub shift: Selection<Shift>,
    /// Case-insensitive substring of the boss role.
    pub role: String,
    /// Case-insensitive substring of nickname, map or clan.
    pub search: String,
}

impl ScoutFilter {
    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.clan.is_empty()
            && self.language.is_all()
            && self.location.is_all()
            && self.shift.is_all()
            && self.role.is_empty()
            && self.search.is_empty()
    }

    pub fn matches(&self, scout: &Scout) -> bool {
        let clan = contains_ignore_case(&scout.clan, &self.clan);
        let language = self.language.admits(&scout.language);
        let location = self.location.admits(&scout.location);
        let shift = self.shift.admits_optional(scout.shift.as_ref());
        let role = contains_ignore_case(&scout.role, &self.role);
        let search = self.search.is_empty()
            || contains_ignore_case(&scout.nickname, &self.search)
            || contains_ignore_case(&scout.location, &self.search)
            || contains_ignore_case(&scout.clan, &self.search);
        clan && language && location && shift && role && search
    }

    /// Matching records, in input order.
    pub fn apply<'a>(&self, scouts: &'a [Scout]) -> Vec<&'a Scout> {
        scouts.iter().filter(|scout| self.matches(scout)).collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
