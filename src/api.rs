use crate::{
    config::ApiConfig,
    data::student::{Student, StudentForm},
    error::{DecodeResponseSnafu, RosterResult, SendRequestSnafu, UnsuccessfulStatusSnafu},
};
use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use snafu::ResultExt;

#[async_trait]
pub trait StudentApi: Send + Sync {
    async fn fetch_students(&self) -> RosterResult<Vec<Student>>;
    //no id means create
    async fn submit_student(&self, student: &StudentForm, id: Option<&str>) -> RosterResult<Student>;
    async fn delete_student(&self, id: &str) -> RosterResult<()>;
}

#[derive(Clone, Debug)]
pub struct HttpStudentApi {
    client: Client,
    base_url: Url,
}

impl HttpStudentApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url().clone(),
        }
    }

    fn students_url(&self, id: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        //config refuses cannot-be-a-base urls, so this always has segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("students");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        url
    }

    async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<&StudentForm>,
    ) -> RosterResult<Response> {
        debug!(%method, %url, "Calling student API");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.context(SendRequestSnafu {
            method: method.clone(),
            url: url.clone(),
        })?;

        let status = response.status();
        snafu::ensure!(
            status.is_success(),
            UnsuccessfulStatusSnafu {
                status,
                method,
                url
            }
        );

        Ok(response)
    }
}

#[async_trait]
impl StudentApi for HttpStudentApi {
    async fn fetch_students(&self) -> RosterResult<Vec<Student>> {
        let url = self.students_url(None);
        self.execute(Method::GET, url.clone(), None)
            .await?
            .json()
            .await
            .context(DecodeResponseSnafu { url })
    }

    async fn submit_student(&self, student: &StudentForm, id: Option<&str>) -> RosterResult<Student> {
        let (method, url) = match id {
            Some(id) => (Method::PUT, self.students_url(Some(id))),
            None => (Method::POST, self.students_url(None)),
        };

        self.execute(method, url.clone(), Some(student))
            .await?
            .json()
            .await
            .context(DecodeResponseSnafu { url })
    }

    async fn delete_student(&self, id: &str) -> RosterResult<()> {
        self.execute(Method::DELETE, self.students_url(Some(id)), None)
            .await?;
        Ok(())
    }
}
