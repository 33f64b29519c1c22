use crate::domain::task::Task;
use crate::error::{Result, TaskboardError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout entry for one column, with the tasks it starts out holding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl ColumnConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks<I, S>(mut self, tasks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tasks = tasks.into_iter().map(Into::into).collect();
        self
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Dashboard".to_string(),
            columns: vec![
                ColumnConfig::new("To Do").with_tasks(["Gather stakeholder feedback"]),
                ColumnConfig::new("In Progress").with_tasks(["Write requirements"]),
                ColumnConfig::new("QA").with_tasks([
                    "Resourcing",
                    "Design prototype",
                    "Write automation tests",
                ]),
                ColumnConfig::new("Done"),
            ],
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON board layout
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON board layout from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Checks that the layout describes at least one named column
    pub fn validate(&self) -> Result<()> {
        if self.columns.is_empty() {
            return Err(TaskboardError::ConfigError(
                "board must have at least one column".to_string(),
            ));
        }

        if let Some(index) = self.columns.iter().position(|c| c.name.trim().is_empty()) {
            return Err(TaskboardError::ConfigError(format!(
                "column {} has an empty name",
                index
            )));
        }

        Ok(())
    }
}

/// A named, ordered list of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: u32,
    pub display_name: String,
    pub tasks: Vec<Task>,
}

impl Column {
    pub fn new(id: u32, display_name: String) -> Self {
        Self {
            id,
            display_name,
            tasks: Vec::new(),
        }
    }

    /// Rewrites every task id to match its index
    pub fn reindex(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.id = index;
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds the task currently holding the given positional id
    pub fn task(&self, position: usize) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == position)
    }

    pub fn is_densely_indexed(&self) -> bool {
        self.tasks.iter().enumerate().all(|(index, task)| task.id == index)
    }
}

/// Task board state
///
/// Columns are fixed when the board is built; only their task lists change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Board {
    /// Builds a board, giving columns ids in layout order
    pub fn new(config: BoardConfig) -> Self {
        let columns = config
            .columns
            .into_iter()
            .zip(0u32..)
            .map(|(column_config, id)| {
                let mut column = Column::new(id, column_config.name);
                column.tasks = column_config
                    .tasks
                    .into_iter()
                    .enumerate()
                    .map(|(position, description)| Task::new(position, description))
                    .collect();
                column
            })
            .collect();

        Self {
            name: config.name,
            columns,
        }
    }

    pub fn column(&self, id: u32) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn column_mut(&mut self, id: u32) -> Option<&mut Column> {
        self.columns.iter_mut().find(|column| column.id == id)
    }

    /// Finds a column by its display name
    pub fn column_named(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.display_name == name)
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Checks that every task id equals its index in every column
    pub fn is_densely_indexed(&self) -> bool {
        self.columns.iter().all(Column::is_densely_indexed)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
