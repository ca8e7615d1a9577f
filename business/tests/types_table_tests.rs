//! Type table workflows against a mock FFGZ server.

#![cfg(not(target_arch = "wasm32"))]

mod common;

use common::{TestContext, type_json};
use ffgz_business::model::TypeRecord;
use ffgz_business::table::{ImportStatus, NoticeKind};
use ffgz_business::types_table::TypeTableState;
use ffgz_business::types_table::controller::{
    self, MSG_MODEL_REQUIRED, MSG_NOTHING_TO_SAVE, MSG_SELECT_TO_DELETE, loaded_types,
};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

async fn loaded(records: serde_json::Value) -> TestContext {
    let mut t = TestContext::new().await;
    t.mock_types(records).await;
    controller::load_types(&mut t.ctx);
    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);
    t
}

fn three_types() -> serde_json::Value {
    json!([
        type_json(1, "GZ-10", 100.0),
        type_json(2, "GZ-20", 200.0),
        type_json(3, "GZ-30", 300.0)
    ])
}

fn table(t: &TestContext) -> &TypeTableState {
    t.ctx.state::<TypeTableState>()
}

#[tokio::test]
async fn initial_load_fills_the_table() {
    let t = loaded(three_types()).await;

    let records = loaded_types(&t.ctx);
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].model, "GZ-20");
    assert_eq!(records[1].kx, Some(1.2e7));
    assert!(table(&t).notice.is_none());
}

#[tokio::test]
async fn search_sends_trimmed_keyword() {
    let mut t = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/types"))
        .and(query_param("q", "GZ-2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([type_json(2, "GZ-20", 200.0)])),
        )
        .expect(1)
        .mount(&t.mock_server)
        .await;

    t.ctx.state_mut::<TypeTableState>().search = "  GZ-2 ".to_owned();
    controller::search_types(&mut t.ctx);
    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);

    assert_eq!(loaded_types(&t.ctx).len(), 1);
}

#[tokio::test]
async fn slow_earlier_search_does_not_replace_newer_results() {
    let mut t = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/types"))
        .and(query_param("q", "OLD"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([type_json(1, "OLD-1", 100.0)]))
                .set_delay(Duration::from_millis(400)),
        )
        .expect(1)
        .mount(&t.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/types"))
        .and(query_param("q", "NEW"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([type_json(2, "NEW-2", 200.0)])),
        )
        .expect(1)
        .mount(&t.mock_server)
        .await;

    t.ctx.state_mut::<TypeTableState>().search = "OLD".to_owned();
    controller::search_types(&mut t.ctx);
    t.ctx.flush_commands();
    t.ctx.state_mut::<TypeTableState>().search = "NEW".to_owned();
    controller::search_types(&mut t.ctx);
    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);

    let models: Vec<&str> = loaded_types(&t.ctx)
        .iter()
        .map(|r| r.model.as_str())
        .collect();
    assert_eq!(models, vec!["NEW-2"]);
    assert!(table(&t).notice.is_none());
}

#[tokio::test]
async fn checks_made_during_a_reload_are_cleared_when_it_lands() {
    let mut t = loaded(three_types()).await;
    controller::press_delete(&mut t.ctx);

    controller::load_types(&mut t.ctx);
    controller::toggle_row(&mut t.ctx, 0);
    assert!(table(&t).delete_mode.is_checked(0));

    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);

    let state = table(&t);
    assert!(state.delete_mode.is_active());
    assert!(!state.delete_mode.is_checked(0));
}

#[tokio::test]
async fn failed_load_shows_error_and_keeps_rows() {
    let mut t = loaded(three_types()).await;
    t.mock_server.reset().await;
    Mock::given(method("GET"))
        .and(path("/api/types"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&t.mock_server)
        .await;

    controller::load_types(&mut t.ctx);
    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);

    assert_eq!(loaded_types(&t.ctx).len(), 3);
    let notice = table(&t).notice.clone().expect("notice shown");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Failed to load type list");
}

#[tokio::test]
async fn bulk_save_skips_rows_without_model() {
    let mut t = TestContext::new().await;
    t.mock_types(three_types()).await;
    Mock::given(method("POST"))
        .and(path("/api/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "id": 9})))
        .expect(3)
        .mount(&t.mock_server)
        .await;

    let staged = vec![
        TypeRecord::from_cells(&["GZ-10", "100"]),
        TypeRecord::from_cells(&["", "5"]),
        TypeRecord::from_cells(&["GZ-20", "200"]),
        TypeRecord::from_cells(&["GZ-30", "300"]),
    ];
    controller::open_add(&mut t.ctx);
    t.ctx.state_mut::<TypeTableState>().add.staged = staged;
    controller::save_add(&mut t.ctx);
    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);

    let state = table(&t);
    assert!(!state.add.open);
    assert!(state.add.staged.is_empty());
    assert_eq!(
        state.notice.as_ref().map(|n| n.message.as_str()),
        Some("Saved 3 of 3 records")
    );
    assert_eq!(loaded_types(&t.ctx).len(), 3);
}

#[tokio::test]
async fn bulk_save_with_every_create_failing_skips_reload() {
    let mut t = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/api/types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(three_types()))
        .expect(0)
        .mount(&t.mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/types"))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&t.mock_server)
        .await;

    controller::open_add(&mut t.ctx);
    t.ctx.state_mut::<TypeTableState>().add.staged = vec![
        TypeRecord::from_cells(&["GZ-10", "100"]),
        TypeRecord::from_cells(&["GZ-20", "200"]),
    ];
    controller::save_add(&mut t.ctx);
    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);

    assert_eq!(
        table(&t).notice.as_ref().map(|n| n.message.as_str()),
        Some("Saved 0 of 2 records, 2 failed")
    );
    assert!(loaded_types(&t.ctx).is_empty());
}

#[tokio::test]
async fn save_with_nothing_filled_never_calls_server() {
    let mut t = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path("/api/types"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&t.mock_server)
        .await;

    controller::open_add(&mut t.ctx);
    controller::save_add(&mut t.ctx);

    assert_eq!(t.ctx.queued_commands(), 0);
    assert_eq!(
        table(&t).notice.as_ref().map(|n| n.message.as_str()),
        Some(MSG_NOTHING_TO_SAVE)
    );
}

#[tokio::test]
async fn staged_csv_import_drops_chinese_header() {
    let mut t = TestContext::new().await;
    let csv = "\u{feff}型号,载荷,阻尼,动刚度X,动刚度Y,动刚度Z\r\nGZ-10,100,0.05,1.2e7,,\r\nGZ-20,\"1,200\",0.1,,,\r\n";

    controller::open_add(&mut t.ctx);
    controller::stage_import_file(&mut t.ctx, "types.csv", csv.as_bytes());

    let add = &table(&t).add;
    assert_eq!(add.staged.len(), 2);
    assert_eq!(add.staged[0].model, "GZ-10");
    assert_eq!(add.staged[1].load, Some(1200.0));
    assert_eq!(
        add.status,
        ImportStatus::Parsed {
            file: "types.csv".to_owned(),
            count: 2
        }
    );
    assert_eq!(t.ctx.queued_commands(), 0);
}

#[tokio::test]
async fn rejected_file_keeps_staged_rows() {
    let mut t = TestContext::new().await;
    controller::open_add(&mut t.ctx);
    controller::stage_import_file(&mut t.ctx, "a.csv", b"GZ-10,1,2\n");
    controller::stage_import_file(&mut t.ctx, "a.txt", b"GZ-99,1,2\n");

    let add = &table(&t).add;
    assert_eq!(add.staged.len(), 1);
    assert!(add.status.is_error());
}

#[tokio::test]
async fn edit_with_empty_model_is_rejected_locally() {
    let mut t = loaded(three_types()).await;
    Mock::given(method("PUT"))
        .and(path("/api/types/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(0)
        .mount(&t.mock_server)
        .await;

    controller::open_edit(&mut t.ctx, 0);
    if let Some(edit) = t.ctx.state_mut::<TypeTableState>().edit.as_mut() {
        edit.form.model = "   ".to_owned();
    }
    controller::save_edit(&mut t.ctx);
    t.flush_and_wait().await;

    let state = table(&t);
    assert!(state.edit.is_some());
    assert_eq!(
        state.notice.as_ref().map(|n| n.message.as_str()),
        Some(MSG_MODEL_REQUIRED)
    );
}

#[tokio::test]
async fn edit_prefills_displayed_text_and_saves() {
    let mut t = loaded(three_types()).await;
    Mock::given(method("PUT"))
        .and(path("/api/types/2"))
        .and(body_json(json!({
            "model": "GZ-21",
            "load": 250.0,
            "damp": 0.05,
            "kx": 1.2e7,
            "ky": null,
            "kz": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&t.mock_server)
        .await;

    controller::open_edit(&mut t.ctx, 1);
    {
        let edit = t
            .ctx
            .state_mut::<TypeTableState>()
            .edit
            .as_mut()
            .expect("dialog open");
        assert_eq!(edit.id, 2);
        assert_eq!(edit.form.kx, "1.2000e+7");
        edit.form.model = "GZ-21".to_owned();
        edit.form.load = "250".to_owned();
    }
    controller::save_edit(&mut t.ctx);
    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);

    assert!(table(&t).edit.is_none());
    assert!(table(&t).notice.is_none());
}

#[tokio::test]
async fn failed_update_keeps_dialog_and_input() {
    let mut t = loaded(three_types()).await;
    Mock::given(method("PUT"))
        .and(path("/api/types/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&t.mock_server)
        .await;

    controller::open_edit(&mut t.ctx, 0);
    if let Some(edit) = t.ctx.state_mut::<TypeTableState>().edit.as_mut() {
        edit.form.damp = "0.2".to_owned();
    }
    controller::save_edit(&mut t.ctx);
    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);

    let state = table(&t);
    let edit = state.edit.as_ref().expect("dialog stays open");
    assert_eq!(edit.form.damp, "0.2");
    assert_eq!(edit.saving, None);
    assert_eq!(
        state.notice.as_ref().map(|n| n.message.as_str()),
        Some("Failed to update type")
    );
}

#[tokio::test]
async fn delete_without_selection_warns() {
    let mut t = loaded(three_types()).await;

    controller::press_delete(&mut t.ctx);
    assert!(table(&t).delete_mode.is_active());

    controller::press_delete(&mut t.ctx);
    let state = table(&t);
    assert!(state.delete_mode.is_active());
    assert!(state.pending_delete.is_none());
    assert_eq!(
        state.notice.as_ref().map(|n| n.message.as_str()),
        Some(MSG_SELECT_TO_DELETE)
    );
    assert_eq!(loaded_types(&t.ctx).len(), 3);
}

#[tokio::test]
async fn confirmed_delete_removes_selected_and_exits_mode() {
    let mut t = loaded(three_types()).await;
    Mock::given(method("POST"))
        .and(path("/api/types/bulk_delete"))
        .and(body_json(json!({"ids": [1, 3]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "deleted": 2})))
        .expect(1)
        .mount(&t.mock_server)
        .await;

    controller::press_delete(&mut t.ctx);
    controller::toggle_row(&mut t.ctx, 0);
    controller::toggle_row(&mut t.ctx, 2);
    controller::press_delete(&mut t.ctx);

    let pending = table(&t).pending_delete.clone().expect("confirmation shown");
    assert_eq!(pending.ids, vec![1, 3]);
    assert_eq!(pending.lines[0], "Model: GZ-10  Load: 100  Damp: 0.05");
    assert_eq!(pending.prompt("types"), "Delete the following 2 types?");

    controller::confirm_delete(&mut t.ctx);
    t.flush_and_wait().await;
    controller::poll(&mut t.ctx);

    let state = table(&t);
    assert!(!state.delete_mode.is_active());
    assert!(!state.is_deleting());
    assert!(state.notice.is_none());
}

#[tokio::test]
async fn delete_prompt_lists_only_rows_with_ids() {
    let mut t = loaded(json!([
        type_json(1, "GZ-10", 100.0),
        {"id": null, "model": "GZ-X", "load": 5.0},
        type_json(3, "GZ-30", 300.0)
    ]))
    .await;

    controller::press_delete(&mut t.ctx);
    controller::set_all_checked(&mut t.ctx, true);
    controller::press_delete(&mut t.ctx);

    let pending = table(&t).pending_delete.clone().expect("confirmation shown");
    assert_eq!(pending.ids, vec![1, 3]);
    assert_eq!(pending.lines.len(), 2);
    assert!(pending.lines.iter().all(|line| !line.contains("GZ-X")));
    assert_eq!(pending.prompt("types"), "Delete the following 2 types?");
}

#[tokio::test]
async fn declined_delete_keeps_selection() {
    let mut t = loaded(three_types()).await;

    controller::press_delete(&mut t.ctx);
    controller::toggle_row(&mut t.ctx, 1);
    controller::press_delete(&mut t.ctx);
    controller::cancel_delete(&mut t.ctx);

    let state = table(&t);
    assert!(state.pending_delete.is_none());
    assert!(state.delete_mode.is_active());
    assert!(state.delete_mode.is_checked(1));
    assert_eq!(t.ctx.queued_commands(), 0);
}
