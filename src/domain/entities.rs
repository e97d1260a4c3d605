//! Domain entities of the notice board.

/// Behaviour shared by every entity exposed through the CRUD contract.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Store-assigned identifier, `None` until persisted.
    fn id(&self) -> Option<i64>;

    /// Drops every store-assigned value so the entity can be inserted fresh.
    fn into_new(self) -> Self;

    /// Overwrites the mutable fields of `self` with those of `changes`.
    /// Identifier and creation metadata stay untouched.
    fn apply_changes(&mut self, changes: Self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    /// RFC 3339 timestamp set by the store on insert
    pub creation_date: Option<String>,
    pub author: Option<Author>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub id: Option<i64>,
    pub title: String,
    /// Owned notices, ordered by id
    pub notices: Vec<Notice>,
}

impl Entity for Author {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn into_new(self) -> Self {
        Self { id: None, ..self }
    }

    fn apply_changes(&mut self, changes: Self) {
        self.first_name = changes.first_name;
        self.last_name = changes.last_name;
    }
}

impl Entity for Notice {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn into_new(self) -> Self {
        Self {
            id: None,
            creation_date: None,
            ..self
        }
    }

    fn apply_changes(&mut self, changes: Self) {
        self.title = changes.title;
        self.description = changes.description;
    }
}

impl Entity for Board {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn into_new(self) -> Self {
        Self {
            id: None,
            title: self.title,
            notices: self.notices.into_iter().map(Notice::into_new).collect(),
        }
    }

    fn apply_changes(&mut self, changes: Self) {
        self.title = changes.title;
    }
}
