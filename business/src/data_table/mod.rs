//! Server-backed table of [`DataRow`](crate::model::DataRow)s with a
//! client-side model filter.

pub mod commands;
pub mod controller;
mod state;

pub use commands::{
    DataListCompute, DataListInput, DeleteDataCommand, DeleteDataCompute, DeleteDataInput,
    RefreshDataCommand, UploadDataCommand, UploadDataCompute, UploadDataInput,
};
pub use state::{DataTableState, UploadDialog};

use ffgz_states::StateCtx;

pub fn register(ctx: &mut StateCtx) {
    ctx.add_state(DataTableState::default());
    ctx.add_state(DataListInput::default());
    ctx.add_state(UploadDataInput::default());
    ctx.add_state(DeleteDataInput::default());

    ctx.record_compute(DataListCompute::default());
    ctx.record_compute(UploadDataCompute::default());
    ctx.record_compute(DeleteDataCompute::default());

    ctx.record_command(RefreshDataCommand);
    ctx.record_command(UploadDataCommand);
    ctx.record_command(DeleteDataCommand);
}
