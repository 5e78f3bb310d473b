/// A single to-do item.
///
/// Ids are assigned by the store on insert (SQLite AUTOINCREMENT) and are
/// never reused, not even after the table is cleared. The completion flag is
/// persisted as 0/1 in the `completa` column.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Task {
    pub id: i64,
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "completa")]
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, name: String, completed: bool) -> Self {
        Self {
            id,
            name,
            completed,
        }
    }
}
