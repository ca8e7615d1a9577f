#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::{TestCtx, frames, sample_data, sample_types};
use ffgz_business::types_table::TypeTableState;
use ffgz_business::types_table::controller::loaded_types;
use kittest::Queryable;

#[tokio::test]
async fn test_startup_renders_formatted_types() {
    let mut ctx = TestCtx::new_app(sample_types(), sample_data()).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert_eq!(loaded_types(&harness.state().state.ctx).len(), 2);
    assert!(harness.query_by_label("GZ-10").is_some());
    assert!(harness.query_by_label("1.5000e+6").is_some());
    assert!(harness.query_by_label("1.0000e-7").is_some());
    assert!(harness.query_by_label("12.5").is_some());
    assert!(harness.query_by_label("320").is_some());
}

#[tokio::test]
async fn test_delete_mode_toolbar() {
    let mut ctx = TestCtx::new_app(sample_types(), sample_data()).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    assert!(harness.query_by_label("Select all").is_none());

    harness.get_by_label("Delete").click();
    frames(harness, 4);
    assert!(harness.query_by_label("Select all").is_some());
    assert!(harness.query_by_label("Exit delete mode").is_some());

    harness.get_by_label("Delete").click();
    frames(harness, 4);
    assert!(harness.query_by_label("Select records to delete").is_some());
    assert!(
        harness
            .state()
            .state
            .ctx
            .state::<TypeTableState>()
            .delete_mode
            .is_active()
    );

    harness.get_by_label("OK").click();
    frames(harness, 4);
    assert!(harness.query_by_label("Select records to delete").is_none());

    harness.get_by_label("Exit delete mode").click();
    frames(harness, 4);
    assert!(harness.query_by_label("Select all").is_none());
}

#[tokio::test]
async fn test_select_all_checks_every_row() {
    let mut ctx = TestCtx::new_app(sample_types(), sample_data()).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    harness.get_by_label("Delete").click();
    frames(harness, 4);
    harness.get_by_label("Select all").click();
    frames(harness, 4);

    let state = harness.state().state.ctx.state::<TypeTableState>();
    assert!(state.delete_mode.all_visible_checked(&[0, 1]));
    assert!(harness.query_by_label("Exit delete mode").is_none());
}

#[tokio::test]
async fn test_add_dialog_opens_and_cancels() {
    let mut ctx = TestCtx::new_app(sample_types(), sample_data()).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    harness.get_by_label("Add type").click();
    frames(harness, 4);
    assert!(harness.query_by_label("Bulk import").is_some());
    assert!(harness.query_by_label("Supports .xlsx / .csv files").is_some());

    harness.get_by_label("Cancel").click();
    frames(harness, 4);
    assert!(harness.query_by_label("Bulk import").is_none());
    assert!(!harness.state().state.ctx.state::<TypeTableState>().add.open);
}

#[tokio::test]
async fn test_saving_empty_add_dialog_shows_notice() {
    let mut ctx = TestCtx::new_app(sample_types(), sample_data()).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    harness.get_by_label("Add type").click();
    frames(harness, 4);
    harness.get_by_label("Save").click();
    frames(harness, 4);

    assert!(harness.query_by_label("Nothing to save").is_some());
    assert_eq!(harness.state().state.ctx.queued_commands(), 0);
}

#[tokio::test]
async fn test_notice_is_modal_and_closes_on_escape() {
    let mut ctx = TestCtx::new_app(sample_types(), sample_data()).await;
    ctx.settle().await;
    let harness = ctx.harness_mut();

    harness.get_by_label("Add type").click();
    frames(harness, 4);
    harness.get_by_label("Save").click();
    frames(harness, 4);
    assert!(harness.query_by_label("Nothing to save").is_some());

    harness.key_press(egui::Key::Escape);
    frames(harness, 4);

    assert!(harness.query_by_label("Nothing to save").is_none());
    let table = harness.state().state.ctx.state::<TypeTableState>();
    assert!(table.notice.is_none());
    assert!(table.add.open);
}
