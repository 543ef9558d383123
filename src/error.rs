use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use reqwest::{Method, Url};
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse URL {:?}", original))]
    ParseUrl {
        source: url::ParseError,
        original: String,
    },
    #[snafu(display("{} cannot be used as a base URL", url))]
    UnusableBaseUrl { url: Url },
    #[snafu(display("Unable to parse age {:?}", original))]
    ParseAge {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Error sending {} request to {}", method, url))]
    SendRequest {
        source: reqwest::Error,
        method: Method,
        url: Url,
    },
    #[snafu(display("Student API answered {} for {} {}", status, method, url))]
    UnsuccessfulStatus {
        status: reqwest::StatusCode,
        method: Method,
        url: Url,
    },
    #[snafu(display("Unable to decode response body from {}", url))]
    DecodeResponse { source: reqwest::Error, url: Url },
}

impl IntoResponse for RosterError {
    #[allow(clippy::match_same_arms)]
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const BG: StatusCode = StatusCode::BAD_GATEWAY; //backend misbehaved
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Roster Error "}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::BadEnvVar { .. } | Self::ParseUrl { .. } => ISE,
            Self::UnusableBaseUrl { .. } => ISE,
            Self::ParseAge { .. } => BI,
            Self::SendRequest { .. } => BG,
            Self::UnsuccessfulStatus { .. } => BG,
            Self::DecodeResponse { .. } => BG,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()).into_string())).into_response()
    }
}
