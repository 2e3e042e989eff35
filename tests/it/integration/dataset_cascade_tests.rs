//! Dataset Deletion Cascade Tests

use crate::helpers::{assert_layout_consistent, sales_dashboard};
use sheetboard::types::{ChartType, WidgetDraft};
use sheetboard::DashboardError;

#[test]
fn test_delete_dataset_removes_its_widgets_everywhere() {
    let (mut dashboard, sales, targets) = sales_dashboard();
    let first = dashboard.create_board("First");
    let second = dashboard.create_board("Second");

    let sales_a = dashboard
        .add_widget(&first, WidgetDraft::chart(&sales, ChartType::Bar, "Region", "Amount"))
        .unwrap();
    let targets_a = dashboard
        .add_widget(&first, WidgetDraft::chart(&targets, ChartType::Bar, "Region", "Target"))
        .unwrap();
    let sales_b = dashboard
        .add_widget(&second, WidgetDraft::chart(&sales, ChartType::Pie, "Product", "Amount"))
        .unwrap();

    let removed = dashboard.delete_dataset(&sales).unwrap();
    assert_eq!(removed, 2);
    assert!(dashboard.dataset(&sales).is_none());
    assert_eq!(dashboard.datasets().len(), 1);

    let first_board = dashboard.board(&first).unwrap();
    assert!(first_board.widget(&sales_a).is_none());
    assert!(first_board.widget(&targets_a).is_some());
    assert!(first_board.layout_item(&sales_a).is_none());

    let second_board = dashboard.board(&second).unwrap();
    assert!(second_board.widget(&sales_b).is_none());
    assert!(second_board.layout.is_empty());

    assert_layout_consistent(&dashboard);
}

#[test]
fn test_delete_unused_dataset_leaves_boards_alone() {
    let (mut dashboard, sales, targets) = sales_dashboard();
    let board = dashboard.create_board("Sales");
    dashboard
        .add_widget(&board, WidgetDraft::chart(&sales, ChartType::Bar, "Region", "Amount"))
        .unwrap();

    assert_eq!(dashboard.delete_dataset(&targets).unwrap(), 0);
    assert_eq!(dashboard.board(&board).unwrap().widget_count(), 1);
}

#[test]
fn test_delete_unknown_dataset_errors() {
    let (mut dashboard, _, _) = sales_dashboard();
    assert!(matches!(
        dashboard.delete_dataset("missing"),
        Err(DashboardError::DatasetNotFound(_))
    ));
    assert_eq!(dashboard.datasets().len(), 2);
}

#[test]
fn test_common_columns_follow_deletion() {
    let (mut dashboard, sales, _) = sales_dashboard();
    assert_eq!(dashboard.global_common_columns(), vec!["Region"]);

    dashboard.delete_dataset(&sales).unwrap();
    assert_eq!(dashboard.global_common_columns(), vec!["Region", "Target"]);
}
