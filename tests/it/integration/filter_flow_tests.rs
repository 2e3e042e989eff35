//! Slicer Filter Flow Tests
//!
//! Global and board filters flowing into widget data.

use crate::helpers::sales_dashboard;
use sheetboard::types::{ChartType, WidgetDraft};
use sheetboard::{Dashboard, WidgetData};

fn chart_points(dashboard: &Dashboard, board: &str, widget: &str) -> Vec<(String, f64)> {
    match dashboard.widget_data(board, widget).unwrap() {
        WidgetData::Chart(data) => data.points.into_iter().map(|p| (p.name, p.value)).collect(),
        WidgetData::Timeline(_) => panic!("expected chart data"),
    }
}

fn setup() -> (Dashboard, String, String, String) {
    let (mut dashboard, sales, targets) = sales_dashboard();
    let board = dashboard.create_board("Sales");
    let by_region = dashboard
        .add_widget(&board, WidgetDraft::chart(&sales, ChartType::Bar, "Region", "Amount"))
        .unwrap();
    let by_target = dashboard
        .add_widget(&board, WidgetDraft::chart(&targets, ChartType::Bar, "Region", "Target"))
        .unwrap();
    (dashboard, board, by_region, by_target)
}

#[test]
fn test_unfiltered_widget_data() {
    let (dashboard, board, by_region, _) = setup();
    assert_eq!(
        chart_points(&dashboard, &board, &by_region),
        vec![
            ("North".to_string(), 25.0),
            ("South".to_string(), 20.0),
            ("East".to_string(), 7.5),
        ]
    );
}

#[test]
fn test_global_filter_applies_to_every_dataset() {
    let (mut dashboard, board, by_region, by_target) = setup();
    assert!(dashboard.toggle_global_filter("Region", "North"));

    assert_eq!(
        chart_points(&dashboard, &board, &by_region),
        vec![("North".to_string(), 25.0)]
    );
    assert_eq!(
        chart_points(&dashboard, &board, &by_target),
        vec![("North".to_string(), 30.0)]
    );

    dashboard.clear_global_filters();
    assert_eq!(chart_points(&dashboard, &board, &by_region).len(), 3);
}

#[test]
fn test_board_filter_combines_with_global() {
    let (mut dashboard, board, by_region, by_target) = setup();
    dashboard.toggle_global_filter("Region", "North");
    dashboard.toggle_global_filter("Region", "South");
    dashboard.toggle_board_filter(&board, "Product", "Coffee").unwrap();

    assert_eq!(
        chart_points(&dashboard, &board, &by_region),
        vec![("South".to_string(), 20.0), ("North".to_string(), 15.0)]
    );
    // Targets have no Product column, so the board filter does not hide them
    assert_eq!(chart_points(&dashboard, &board, &by_target).len(), 2);

    dashboard.clear_board_filters(&board).unwrap();
    assert_eq!(chart_points(&dashboard, &board, &by_region).len(), 2);
}

#[test]
fn test_board_filters_stay_on_their_board() {
    let (mut dashboard, board, _, _) = setup();
    let sales = dashboard.datasets()[0].id.clone();
    let other = dashboard.create_board("Other");
    let widget = dashboard
        .add_widget(&other, WidgetDraft::chart(&sales, ChartType::Bar, "Region", "Amount"))
        .unwrap();

    dashboard.toggle_board_filter(&board, "Region", "East").unwrap();
    assert_eq!(chart_points(&dashboard, &other, &widget).len(), 3);
}

#[test]
fn test_slicer_columns_and_values() {
    let (dashboard, board, _, _) = setup();
    assert_eq!(dashboard.global_common_columns(), vec!["Region"]);
    assert_eq!(dashboard.board_common_columns(&board).unwrap(), vec!["Region"]);
    assert_eq!(
        dashboard.slicer_values("Region"),
        vec!["North", "South", "East"]
    );
    assert_eq!(
        dashboard.board_slicer_values(&board, "Product").unwrap(),
        vec!["Tea", "Coffee"]
    );
}

#[test]
fn test_filtered_rows_respect_both_layers() {
    let (mut dashboard, board, _, _) = setup();
    let sales = dashboard.datasets()[0].id.clone();
    dashboard.toggle_global_filter("Region", "North");
    dashboard.toggle_board_filter(&board, "Product", "Tea").unwrap();

    let rows = dashboard.filtered_rows(&board, &sales).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Amount"].to_string(), "10");
}
