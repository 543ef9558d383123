use crate::{routes::students::render_student_panel, state::RosterState};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<RosterState>) -> Markup {
    state.controller().load_students().await;
    let view = state.controller().snapshot().await;

    state.render(html! {
        div class="p-8 max-w-7xl mx-auto" {
            (render_student_panel(&view))
        }
    })
}
