use crate::{
    api::StudentApi,
    data::student::{Student, StudentForm},
    error::RosterResult,
};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub students: Vec<Student>,
    pub selected: Option<Student>,
}

//the list is only ever replaced by a refetch, failures are logged and dropped
#[derive(Clone)]
pub struct StudentController {
    api: Arc<dyn StudentApi>,
    view: Arc<RwLock<ViewState>>,
}

impl std::fmt::Debug for StudentController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudentController")
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl StudentController {
    pub fn new(api: Arc<dyn StudentApi>) -> Self {
        Self {
            api,
            view: Arc::default(),
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        self.view.read().await.clone()
    }

    // no lock is held across the request, so overlapping loads land in whatever order they resolve
    pub async fn load_students(&self) {
        match self.api.fetch_students().await {
            Ok(students) => {
                debug!(count = students.len(), "Loaded students");
                self.view.write().await.students = students;
            }
            Err(e) => error!(?e, "Error fetching students"),
        }
    }

    pub async fn handle_submit(&self, student: StudentForm, id: Option<String>) {
        if let Err(e) = self.try_submit(&student, id.as_deref()).await {
            error!(?e, ?id, "Error submitting student form");
        }
    }

    async fn try_submit(&self, student: &StudentForm, id: Option<&str>) -> RosterResult<()> {
        let saved = self.api.submit_student(student, id).await?;
        info!(id = %saved.id, created = id.is_none(), "Saved student");

        self.view.write().await.selected = None;
        self.load_students().await;
        Ok(())
    }

    pub async fn handle_delete(&self, id: String) {
        match self.api.delete_student(&id).await {
            Ok(()) => {
                info!(%id, "Deleted student");
                self.load_students().await;
            }
            Err(e) => error!(?e, %id, "Error deleting student"),
        }
    }

    pub async fn select_for_update(&self, id: &str) {
        let mut view = self.view.write().await;
        let found = view.students.iter().find(|student| student.id == id).cloned();
        match found {
            Some(student) => view.selected = Some(student),
            None => warn!(%id, "Tried to select a student that isn't in the current list"),
        }
    }

    pub async fn cancel(&self) {
        self.view.write().await.selected = None;
    }
}
