//! Board management methods - create, select, rename, delete, and slicers

use super::error::{DashboardError, DashboardResult};
use super::Dashboard;
use crate::board::Board;
use crate::constants::DEFAULT_BOARD_NAME;
use crate::data::FilterSet;
use tracing::info;

impl Dashboard {
    // ==================== Board CRUD ====================

    /// Create a board and make it the active one. Returns its id.
    pub fn create_board(&mut self, name: &str) -> String {
        let name = if name.trim().is_empty() {
            DEFAULT_BOARD_NAME.to_string()
        } else {
            name.trim().to_string()
        };

        let board = Board::new(name);
        let id = board.id.clone();
        info!(id = %id, name = %board.name, "Created board");
        self.boards.push(board);
        self.active_board = Some(id.clone());
        id
    }

    /// Rename a board. A blank name leaves the board unchanged.
    pub fn rename_board(&mut self, board_id: &str, name: &str) -> DashboardResult<()> {
        let board = self.find_board_mut(board_id)?;
        if !name.trim().is_empty() {
            board.name = name.trim().to_string();
        }
        Ok(())
    }

    /// Delete a board, clearing the active selection if it pointed at it.
    pub fn delete_board(&mut self, board_id: &str) -> DashboardResult<Board> {
        let index = self
            .boards
            .iter()
            .position(|b| b.id == board_id)
            .ok_or_else(|| DashboardError::BoardNotFound(board_id.to_string()))?;

        let board = self.boards.remove(index);
        if self.active_board.as_deref() == Some(board_id) {
            self.active_board = None;
        }
        info!(id = %board.id, name = %board.name, "Deleted board");
        Ok(board)
    }

    pub fn board(&self, board_id: &str) -> Option<&Board> {
        self.find_board(board_id).ok()
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn select_board(&mut self, board_id: &str) -> DashboardResult<()> {
        self.find_board(board_id)?;
        self.active_board = Some(board_id.to_string());
        Ok(())
    }

    /// Show no board (e.g. back to the dataset overview)
    pub fn deselect_board(&mut self) {
        self.active_board = None;
    }

    pub fn active_board(&self) -> Option<&Board> {
        self.active_board
            .as_deref()
            .and_then(|id| self.board(id))
    }

    // ==================== Slicers ====================

    /// Toggle a global slicer value. Returns whether it is selected afterwards.
    pub fn toggle_global_filter(&mut self, column: &str, value: &str) -> bool {
        self.global_filters.toggle(column, value)
    }

    pub fn clear_global_filters(&mut self) {
        self.global_filters.clear();
    }

    pub fn global_filters(&self) -> &FilterSet {
        &self.global_filters
    }

    /// Toggle a slicer value local to one board
    pub fn toggle_board_filter(
        &mut self,
        board_id: &str,
        column: &str,
        value: &str,
    ) -> DashboardResult<bool> {
        let board = self.find_board_mut(board_id)?;
        Ok(board.filters.toggle(column, value))
    }

    pub fn clear_board_filters(&mut self, board_id: &str) -> DashboardResult<()> {
        self.find_board_mut(board_id)?.filters.clear();
        Ok(())
    }
}
