//! Budget state repository for JSON storage
//!
//! Holds the single budget document (`salary`, `mandatoryExpenses`,
//! `daysData`) and mirrors it to `budget.json`.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::BudgetError;
use crate::models::BudgetState;

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

/// Repository for budget state persistence
pub struct BudgetRepository {
    path: PathBuf,
    state: RwLock<Option<BudgetState>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(None),
        }
    }

    /// Load the state from disk; a missing file means no budget yet
    pub fn load(&self) -> Result<(), BudgetError> {
        let loaded: Option<BudgetState> = read_json(&self.path)?;

        let mut state = self
            .state
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *state = loaded;

        Ok(())
    }

    /// Save the state to disk (no-op when there is nothing to save)
    pub fn save(&self) -> Result<(), BudgetError> {
        let state = self
            .state
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        match state.as_ref() {
            Some(s) => write_json_atomic(&self.path, s),
            None => Ok(()),
        }
    }

    /// Get a copy of the current state
    pub fn get(&self) -> Result<Option<BudgetState>, BudgetError> {
        let state = self
            .state
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(state.clone())
    }

    /// Replace the current state
    pub fn set(&self, new_state: BudgetState) -> Result<(), BudgetError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *state = Some(new_state);
        Ok(())
    }

    /// Forget the state in memory and delete the file
    pub fn clear(&self) -> Result<bool, BudgetError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let had_state = state.take().is_some();
        let had_file = remove_if_exists(&self.path)?;
        Ok(had_state || had_file)
    }

    /// Whether a budget is currently held
    pub fn is_initialized(&self) -> Result<bool, BudgetError> {
        Ok(self.get()?.is_some())
    }
}
