/// One page of a cursor-paginated collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPage<T> {
    pub items: Vec<T>,
    /// Opaque token requesting the following page. Meaningless once
    /// `is_last` is set.
    pub next_cursor: String,
    pub is_last: bool,
}

impl<T> DataPage<T> {
    pub fn new(
        items: Vec<T>,
        next_cursor: impl Into<String>,
        is_last: bool,
    ) -> Self {
        Self {
            items,
            next_cursor: next_cursor.into(),
            is_last,
        }
    }

    /// A final page; there is nothing to continue from.
    pub fn last(items: Vec<T>) -> Self {
        Self::new(items, String::new(), true)
    }

    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> DataPage<U> {
        DataPage {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            is_last: self.is_last,
        }
    }

    pub fn try_map_items<U, E>(
        self,
        f: impl FnMut(T) -> Result<U, E>,
    ) -> Result<DataPage<U>, E> {
        Ok(DataPage {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            next_cursor: self.next_cursor,
            is_last: self.is_last,
        })
    }
}
