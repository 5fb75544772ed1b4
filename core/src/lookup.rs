//! Name-or-id resolution.
//!
//! Users may refer to an object either by its numeric id or by its name.
//! The [`Catalog`] is supplied by the caller, typically an API client.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrId<'a> {
    Id(&'a str),
    Name(&'a str),
}

impl<'a> NameOrId<'a> {
    /// All-digit strings are ids, anything else is a name.
    pub fn parse(s: &'a str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            Self::Id(s)
        } else {
            Self::Name(s)
        }
    }
}

pub trait Catalog {
    type Item;
    type Error;

    fn by_id(&self, id: &str) -> Result<Option<Self::Item>, Self::Error>;

    /// Results may be listing summaries, see [`Catalog::reload`].
    fn by_name(&self, name: &str) -> Result<Vec<Self::Item>, Self::Error>;

    /// Fetches the full object for a listing entry.
    fn reload(&self, item: Self::Item) -> Result<Self::Item, Self::Error>;
}

/// Loads an object by id, or the first object with the given name.
pub fn find<C: Catalog>(catalog: &C, name_or_id: &str) -> Result<Option<C::Item>, C::Error> {
    match NameOrId::parse(name_or_id) {
        NameOrId::Id(id) => catalog.by_id(id),
        NameOrId::Name(name) => catalog
            .by_name(name)?
            .into_iter()
            .next()
            .map(|item| catalog.reload(item))
            .transpose(),
    }
}
