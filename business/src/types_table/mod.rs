//! Server-backed table of [`TypeRecord`](crate::model::TypeRecord)s.

pub mod commands;
pub mod controller;
mod state;

pub use commands::{
    DeleteTypesCommand, DeleteTypesCompute, DeleteTypesInput, RefreshTypesCommand,
    SaveTypesCommand, SaveTypesCompute, SaveTypesInput, TypeListCompute, TypeListInput,
    UpdateTypeCommand, UpdateTypeCompute, UpdateTypeInput,
};
pub use state::{AddTypeDialog, EditTypeDialog, TypeForm, TypeTableState};

use ffgz_states::StateCtx;

pub fn register(ctx: &mut StateCtx) {
    ctx.add_state(TypeTableState::default());
    ctx.add_state(TypeListInput::default());
    ctx.add_state(SaveTypesInput::default());
    ctx.add_state(UpdateTypeInput::default());
    ctx.add_state(DeleteTypesInput::default());

    ctx.record_compute(TypeListCompute::default());
    ctx.record_compute(SaveTypesCompute::default());
    ctx.record_compute(UpdateTypeCompute::default());
    ctx.record_compute(DeleteTypesCompute::default());

    ctx.record_command(RefreshTypesCommand);
    ctx.record_command(SaveTypesCommand);
    ctx.record_command(UpdateTypeCommand);
    ctx.record_command(DeleteTypesCommand);
}
