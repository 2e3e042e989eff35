//! Unit tests for sheetboard.
