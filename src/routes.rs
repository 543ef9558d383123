use crate::{
    routes::{
        index::get_index_route,
        students::{
            delete_student, internal_get_students, internal_post_cancel, internal_post_refresh,
            internal_post_select, put_student,
        },
    },
    state::RosterState,
};
use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

pub mod index;
pub mod students;

pub fn build_router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(get_index_route))
        .route("/students", put(put_student).delete(delete_student))
        .route("/internal/students", get(internal_get_students))
        .route("/internal/students/refresh", post(internal_post_refresh))
        .route("/internal/students/select", post(internal_post_select))
        .route("/internal/students/cancel", post(internal_post_cancel))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{ApiConfig, DEFAULT_SERVER_IP, RuntimeConfiguration},
        controller::test_support::{FakeStudentApi, student},
    };
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header::CONTENT_TYPE},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state_over(api: Arc<FakeStudentApi>) -> RosterState {
        let config = RuntimeConfiguration::from_parts(
            ApiConfig::from_base_url("http://backend.test/api").expect("config"),
            DEFAULT_SERVER_IP,
        );
        RosterState::with_api(config, api)
    }

    async fn send(state: &RosterState, request: Request<Body>) -> (StatusCode, String) {
        let response = build_router(state.clone())
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, String::from_utf8(body.to_vec()).expect("utf8"))
    }

    fn empty(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    fn form(method: Method, uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("request")
    }

    #[tokio::test]
    async fn index_loads_and_renders_students() {
        let api = Arc::new(FakeStudentApi::with_students(vec![student("1", "Ann")]));
        let state = state_over(api.clone());

        let (status, body) = send(&state, empty(Method::GET, "/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(api.fetch_count(), 1);
        assert!(body.contains("<!DOCTYPE html>"));
        assert!(body.contains("Ann"));
        assert!(body.contains("Current College"));
        assert!(body.contains("Add Student"));
    }

    #[tokio::test]
    async fn delete_refetches_and_renders_empty_table() {
        let api = Arc::new(FakeStudentApi::with_students(vec![student("1", "Ann")]));
        let state = state_over(api.clone());
        send(&state, empty(Method::GET, "/")).await;

        let (status, body) = send(&state, empty(Method::DELETE, "/students?id=1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(api.fetch_count(), 2);
        assert!(!body.contains("Ann"));
        assert!(!body.contains("<td "));
    }

    #[tokio::test]
    async fn create_submission_appears_with_server_id() {
        let api = Arc::new(FakeStudentApi::default());
        let state = state_over(api.clone());

        let (status, body) = send(
            &state,
            form(
                Method::PUT,
                "/students",
                "id=&first_name=Bo&last_name=Diaz&email=bo%40uni.edu&age=19&current_college=Kings",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Bo"));
        let view = state.controller().snapshot().await;
        assert_eq!(view.students.len(), 1);
        assert_eq!(view.students[0].age, 19);
        assert!(!view.students[0].id.is_empty());
    }

    #[tokio::test]
    async fn select_prefills_form_and_cancel_clears_it() {
        let api = Arc::new(FakeStudentApi::with_students(vec![student("1", "Ann")]));
        let state = state_over(api);
        send(&state, empty(Method::GET, "/")).await;

        let (_, body) = send(&state, empty(Method::POST, "/internal/students/select?id=1")).await;
        assert!(body.contains("Update Student"));
        assert!(body.contains(r#"name="id" id="id" value="1""#));

        let (_, body) = send(&state, empty(Method::POST, "/internal/students/cancel")).await;
        assert!(!body.contains("Update Student"));
        assert!(body.contains("Ann"));
    }

    #[tokio::test]
    async fn backend_failure_still_renders_stale_list() {
        let api = Arc::new(FakeStudentApi::with_students(vec![student("1", "Ann")]));
        let state = state_over(api.clone());
        send(&state, empty(Method::GET, "/")).await;

        api.set_failing(true);
        let (status, body) = send(&state, empty(Method::DELETE, "/students?id=1")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Ann"));
    }

    #[tokio::test]
    async fn negative_age_is_passed_through() {
        let api = Arc::new(FakeStudentApi::default());
        let state = state_over(api.clone());

        let (status, _) = send(
            &state,
            form(
                Method::PUT,
                "/students",
                "first_name=Bo&last_name=Diaz&email=bo%40uni.edu&age=-3&current_college=Kings",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(state.controller().snapshot().await.students[0].age, -3);
    }

    #[tokio::test]
    async fn non_numeric_age_is_rejected_before_calling_backend() {
        let api = Arc::new(FakeStudentApi::default());
        let state = state_over(api.clone());

        let (status, body) = send(
            &state,
            form(
                Method::PUT,
                "/students",
                "first_name=Bo&last_name=Diaz&email=bo%40uni.edu&age=old&current_college=Kings",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Unable to parse age"));
        assert!(api.students.lock().expect("poisoned").is_empty());
        assert_eq!(api.fetch_count(), 0);
    }

    #[tokio::test]
    async fn panel_fragment_does_not_fetch() {
        let api = Arc::new(FakeStudentApi::with_students(vec![student("1", "Ann")]));
        let state = state_over(api.clone());

        let (_, body) = send(&state, empty(Method::GET, "/internal/students")).await;
        assert!(!body.contains("Ann"));
        assert_eq!(api.fetch_count(), 0);

        let (_, body) = send(&state, empty(Method::POST, "/internal/students/refresh")).await;
        assert!(body.contains("Ann"));
        assert_eq!(api.fetch_count(), 1);
    }
}
