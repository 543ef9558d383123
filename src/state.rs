use crate::{
    api::{HttpStudentApi, StudentApi},
    config::RuntimeConfiguration,
    controller::StudentController,
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RosterState {
    config: RuntimeConfiguration,
    controller: StudentController,
}

impl RosterState {
    pub fn new(config: RuntimeConfiguration) -> Self {
        let api = HttpStudentApi::new(&config.api_config());
        Self::with_api(config, Arc::new(api))
    }

    pub fn with_api(config: RuntimeConfiguration, api: Arc<dyn StudentApi>) -> Self {
        Self {
            config,
            controller: StudentController::new(api),
        }
    }

    pub fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    pub fn controller(&self) -> &StudentController {
        &self.controller
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Students" }
                }
                body class="bg-gray-900 min-h-screen text-white" {
                    (markup)
                }
            }
        }
    }
}
