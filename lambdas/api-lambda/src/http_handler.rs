use lambda_http::{Body, Error, Request, Response};
use std::sync::Arc;
use students_shared::{request, response, students, AppState};

/// Main Lambda handler - every method on /students lands here
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    tracing::info!("Students API invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == "OPTIONS" {
        return response::preflight();
    }

    let request = match request::from_event(&event) {
        Ok(request) => request,
        Err(err) => return response::from_outcome(Err(err)),
    };

    students::dispatch(state.store.as_ref(), &request).await
}
