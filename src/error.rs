/// Failure to obtain the date page. Kept separate from "page had no events".
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("{url} returned an empty document")]
    EmptyBody { url: String },
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;
