use crate::{
    controller::ViewState,
    data::{
        IdForm,
        student::{Student, StudentForm},
    },
    error::{ParseAgeSnafu, RosterResult},
    maud_conveniences::{form_submit_button, render_table, simple_form_element, title},
    state::RosterState,
};
use axum::{
    Form,
    extract::{Query, State},
};
use maud::{Markup, html};
use serde::Deserialize;
use snafu::ResultExt;
use url::form_urlencoded::byte_serialize;

const PANEL_TARGET: &str = "#student_panel";

fn id_query(path: &str, id: &str) -> String {
    let id: String = byte_serialize(id.as_bytes()).collect();
    format!("{path}?id={id}")
}

fn student_row(student: &Student) -> [Markup; 7] {
    [
        html! {(student.id)},
        html! {(student.first_name)},
        html! {(student.last_name)},
        html! {(student.email)},
        html! {(student.age)},
        html! {(student.current_college)},
        html! {
            button class="bg-blue-600 hover:bg-blue-800 font-bold py-1 px-3 rounded mr-2 text-sm" hx-post=(id_query("/internal/students/select", &student.id)) hx-target=(PANEL_TARGET) hx-swap="outerHTML" {
                "Update"
            }
            button class="bg-red-600 hover:bg-red-800 font-bold py-1 px-3 rounded mr-2 text-sm" hx-delete=(id_query("/students", &student.id)) hx-target=(PANEL_TARGET) hx-swap="outerHTML" {
                "Delete"
            }
        },
    ]
}

fn student_form(selected: Option<&Student>) -> Markup {
    let form = selected.map(Student::to_form).unwrap_or_default();
    let age = selected.map(|_| form.age.to_string());

    html! {
        div class="bg-gray-800 p-8 rounded shadow-md max-w-md" {
            @if selected.is_some() {
                (title("Update Student"))
            } @else {
                (title("Add Student"))
            }

            form hx-put="/students" hx-trigger="submit" hx-target=(PANEL_TARGET) hx-swap="outerHTML" class="p-4" {
                @if let Some(selected) = selected {
                    input type="hidden" name="id" id="id" value=(selected.id);
                }
                (simple_form_element("first_name", "First Name", true, None, selected.map(|_| form.first_name.as_str())))
                (simple_form_element("last_name", "Last Name", true, None, selected.map(|_| form.last_name.as_str())))
                (simple_form_element("email", "Email", true, Some("email"), selected.map(|_| form.email.as_str())))
                (simple_form_element("age", "Age", true, Some("number"), age.as_deref()))
                (simple_form_element("current_college", "Current College", true, None, selected.map(|_| form.current_college.as_str())))

                div class="flex items-center justify-between" {
                    @if selected.is_some() {
                        (form_submit_button(Some("Update Student")))
                    } @else {
                        (form_submit_button(Some("Add Student")))
                    }
                    button type="button" class="bg-gray-700 hover:bg-gray-600 text-gray-300 font-bold py-2 px-4 rounded" hx-post="/internal/students/cancel" hx-target=(PANEL_TARGET) hx-swap="outerHTML" {
                        "Cancel"
                    }
                }
            }
        }
    }
}

pub fn render_student_panel(view: &ViewState) -> Markup {
    html! {
        div id="student_panel" class="flex flex-col space-y-4" {
            div class="flex flex-row items-center justify-between" {
                (title("Students"))
                button class="bg-slate-600 hover:bg-slate-800 font-bold py-2 px-4 rounded" hx-post="/internal/students/refresh" hx-target=(PANEL_TARGET) hx-swap="outerHTML" {
                    "Refresh"
                }
            }
            (render_table(
                ["ID", "First Name", "Last Name", "Email", "Age", "Current College", "Actions"],
                view.students.iter().map(student_row).collect(),
            ))
            (student_form(view.selected.as_ref()))
        }
    }
}

async fn current_panel(state: &RosterState) -> Markup {
    render_student_panel(&state.controller().snapshot().await)
}

pub async fn internal_get_students(State(state): State<RosterState>) -> Markup {
    current_panel(&state).await
}

pub async fn internal_post_refresh(State(state): State<RosterState>) -> Markup {
    state.controller().load_students().await;
    current_panel(&state).await
}

#[derive(Deserialize)]
pub struct StudentSubmission {
    #[serde(default)]
    id: Option<String>,
    first_name: String,
    last_name: String,
    email: String,
    age: String,
    current_college: String,
}

impl StudentSubmission {
    fn into_parts(self) -> RosterResult<(StudentForm, Option<String>)> {
        let Self {
            id,
            first_name,
            last_name,
            email,
            age,
            current_college,
        } = self;

        let age = age
            .trim()
            .parse()
            .context(ParseAgeSnafu { original: age.clone() })?;
        let id = id.filter(|id| !id.is_empty());

        Ok((
            StudentForm {
                first_name,
                last_name,
                email,
                age,
                current_college,
            },
            id,
        ))
    }
}

pub async fn put_student(
    State(state): State<RosterState>,
    Form(submission): Form<StudentSubmission>,
) -> RosterResult<Markup> {
    let (student, id) = submission.into_parts()?;
    state.controller().handle_submit(student, id).await;

    Ok(current_panel(&state).await)
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Query(IdForm { id }): Query<IdForm>,
) -> Markup {
    state.controller().handle_delete(id).await;
    current_panel(&state).await
}

pub async fn internal_post_select(
    State(state): State<RosterState>,
    Query(IdForm { id }): Query<IdForm>,
) -> Markup {
    state.controller().select_for_update(&id).await;
    current_panel(&state).await
}

pub async fn internal_post_cancel(State(state): State<RosterState>) -> Markup {
    state.controller().cancel().await;
    current_panel(&state).await
}
