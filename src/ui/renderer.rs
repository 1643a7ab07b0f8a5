use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Computes the view model for the terminal height and prints the frame with
/// ANSI styling. Does not clear the screen; every line is padded to `cols`.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows);

    components::render_frame(&viewmodel, &state.theme, cols, rows);
}
