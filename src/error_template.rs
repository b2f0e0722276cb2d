use http::status::StatusCode;
use leptos::*;
use thiserror::Error;

/// Page-level failures rendered by [`ErrorTemplate`].
#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Full-page error view; sets the HTTP status of the SSR response from the
/// first error it shows.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside), _) => outside,
        (None, Some(errors)) => errors.get_untracked(),
        (None, None) => Errors::default(),
    };

    // anything that is not an AppError is reported as a 500
    let errors: Vec<(StatusCode, String)> = errors
        .into_iter()
        .map(|(_, error)| match error.downcast_ref::<AppError>() {
            Some(app_error) => (app_error.status_code(), app_error.to_string()),
            None => (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
        })
        .collect();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some((status, _))) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(*status);
        }
    }

    view! {
        <section class="section error-page">
            <div class="container narrow">
                <h1>{if errors.len() > 1 { "Errors" } else { "Error" }}</h1>
                {errors
                    .into_iter()
                    .map(|(status, message)| view! {
                        <h2>{status.to_string()}</h2>
                        <p>"Error: " {message}</p>
                    })
                    .collect_view()}
                <a class="button primary" href="/">"Back to the portfolio"</a>
            </div>
        </section>
    }
}
