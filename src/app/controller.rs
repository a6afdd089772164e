//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene::{self, RenderScene, SceneCache};
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Debug, Default)]
pub struct AppController {
    scene_cache: SceneCache,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Navigation ===
            AppCommand::Navigate { page } => handlers::navigation::navigate(state, page),
            AppCommand::RequestExit => handlers::navigation::request_exit(state),

            // === Kurven-Editoren ===
            AppCommand::SelectCurveTab { tab } => handlers::curve::select_curve_tab(state, tab)?,
            AppCommand::PressPointer { slot, pos } => handlers::curve::press(state, slot, pos)?,
            AppCommand::MovePointer { slot, pos } => {
                handlers::curve::move_pointer(state, slot, pos)?
            }
            AppCommand::ReleasePointer => handlers::curve::release(state),
            AppCommand::BeginFieldDrag {
                slot,
                index,
                axis,
                pointer,
            } => handlers::curve::begin_field_drag(state, slot, index, axis, pointer)?,
            AppCommand::EnterCoordinate {
                slot,
                index,
                axis,
                text,
            } => handlers::curve::enter_coordinate(state, slot, index, axis, &text)?,
            AppCommand::SetRelative { slot, enabled } => {
                handlers::curve::set_relative(state, slot, enabled)?
            }
            AppCommand::SetEnforceBounds { slot, enabled } => {
                handlers::curve::set_enforce_bounds(state, slot, enabled)?
            }

            // === Metronom ===
            AppCommand::SetTempo { text } => handlers::metronome::set_tempo(state, &text)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
            AppCommand::ReloadOptions => handlers::options::reload(state),
            AppCommand::SaveOptions => handlers::options::save(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    ///
    /// Unveränderte Editoren liefern ihre DrawList aus dem Cache.
    pub fn build_render_scene(&mut self, state: &AppState) -> RenderScene {
        render_scene::build(state, &mut self.scene_cache)
    }

    /// Anzahl bisher neu aufgezeichneter DrawLists.
    pub fn scene_rebuilds(&self) -> u64 {
        self.scene_cache.rebuilds()
    }
}
