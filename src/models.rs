//! Task model types for the to-do list.

use serde::{Deserialize, Serialize};

/// Task priority labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Priority {
    /// High priority.
    High,
    /// Medium priority (default).
    #[default]
    Medium,
    /// Low priority.
    Low,
}

impl Priority {
    /// All priorities in menu order.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Parse a priority from a label, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the label is not one of High, Medium, or Low.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, InvalidPriority> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(InvalidPriority(s.to_string())),
        }
    }

    /// Get the label of the priority as it appears in the stored file.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    // Stored files may carry labels this version never wrote. Anything
    // unrecognized reads as Medium rather than failing the whole document.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Self::from_str(&label).unwrap_or_default())
    }
}

/// Error when an invalid priority label is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPriority(pub String);

impl std::fmt::Display for InvalidPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid priority: '{}' (must be one of: High, Medium, Low)", self.0)
    }
}

impl std::error::Error for InvalidPriority {}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, unique within one stored list. Zero means the
    /// task came from a file that predates ids; the store assigns a real
    /// one on load.
    #[serde(default)]
    pub id: u64,
    /// What needs doing. Front ends reject empty text before it gets here.
    pub description: String,
    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
    /// Urgency label.
    #[serde(default)]
    pub priority: Priority,
}
