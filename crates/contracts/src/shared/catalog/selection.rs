use super::filter::DisplayRow;
use super::row::EntityRow;

/// Выбранная строка таблицы: корень или его перевод.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowSelection {
    /// id of the displayed (top-level) row
    pub root_id: i64,
    pub child: Option<i64>,
}

impl RowSelection {
    pub fn root(root_id: i64) -> Self {
        Self {
            root_id,
            child: None,
        }
    }

    pub fn translation(root_id: i64, child_id: i64) -> Self {
        Self {
            root_id,
            child: Some(child_id),
        }
    }

    /// Stable key used by the table to mark the selected row
    pub fn row_key(&self) -> String {
        match self.child {
            Some(child_id) => child_key(self.root_id, child_id),
            None => root_key(self.root_id),
        }
    }

    /// Id whose models are looked up: the translation when one is selected
    pub fn lookup_id(&self) -> i64 {
        self.child.unwrap_or(self.root_id)
    }

    /// Resolves the selected row among the displayed ones
    pub fn resolve<'a, X>(&self, rows: &'a [DisplayRow<X>]) -> Option<&'a EntityRow<X>> {
        let root = rows.iter().map(DisplayRow::row).find(|r| r.id == self.root_id)?;
        match self.child {
            None => Some(root),
            Some(child_id) => root.children.iter().find(|c| c.id == child_id),
        }
    }
}

pub fn root_key(id: i64) -> String {
    format!("root-{}", id)
}

pub fn child_key(parent_id: i64, id: i64) -> String {
    format!("child-{}-{}", parent_id, id)
}
