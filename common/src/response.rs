// -------------------------------------
// *     Response/Error from pages     *
// -------------------------------------

#[derive(Debug)]
pub enum Response {
    RenderWithStatus(String, u16),  //string is the markup, status is the status code returned
    MessageWithStatus(String, u16), //Not an html page, just a message
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Template not found: {0}")]
    Template(String),   //Nobody registered a template with this name. Always a 500
    #[error("{0}")]
    NotFound(String),   //Normal "not found" error
    #[error("{0}")]
    User(String),       //A user-generated error, usually related to request. Should produce 400
    #[error("{0}")]
    Other(String) //Something "general" happened, who the heck knows?
}

impl Error {
    pub fn to_status(&self) -> u16 {
        match self {
            Self::Template(_) => 500,
            Self::NotFound(_) => 404,
            Self::User(_) => 400,
            Self::Other(_) => 500
        }
    }
}


/// Response is powerful enough to represent both errors and responses, so this function flattens
/// a result of either response or error into just a response.
pub fn flatten(result: Result<Response, Error>) -> Response
{
    match result
    {
        Ok(response) => response,
        Err(error) => {
            let status = error.to_status();
            if status >= 500 {
                tracing::error!(status, "{}", error);
            }
            Response::MessageWithStatus(error.to_string(), status)
        }
    }
}

#[cfg(feature = "axum")]
fn status_code(status: u16) -> axum::http::StatusCode {
    axum::http::StatusCode::from_u16(status).unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::RenderWithStatus(html, status) =>
                (status_code(status), axum::response::Html(html)).into_response(),
            Response::MessageWithStatus(msg, status) =>
                (status_code(status), msg).into_response(),
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        flatten(Err(self)).into_response()
    }
}
