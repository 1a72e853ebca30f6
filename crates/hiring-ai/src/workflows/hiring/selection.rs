use serde::{Deserialize, Serialize};

/// Ordered set of selected candidate names with a fixed number of seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSelection {
    capacity: usize,
    members: Vec<String>,
}

impl TeamSelection {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    pub fn remaining_slots(&self) -> usize {
        self.capacity.saturating_sub(self.members.len())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.iter().any(|member| member == name)
    }

    /// One-based seat number of a member, in selection order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|member| member == name)
            .map(|idx| idx + 1)
    }

    pub fn select(&mut self, name: impl Into<String>) -> Result<(), SelectionError> {
        let name = name.into();
        if self.contains(&name) {
            return Err(SelectionError::AlreadySelected(name));
        }
        if self.is_full() {
            return Err(SelectionError::TeamFull {
                capacity: self.capacity,
            });
        }
        self.members.push(name);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<(), SelectionError> {
        match self.members.iter().position(|member| member == name) {
            Some(idx) => {
                self.members.remove(idx);
                Ok(())
            }
            None => Err(SelectionError::NotSelected(name.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("team is full ({capacity} seats)")]
    TeamFull { capacity: usize },
    #[error("{0} is already on the team")]
    AlreadySelected(String),
    #[error("{0} is not on the team")]
    NotSelected(String),
}
