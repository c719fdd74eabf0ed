use std::collections::HashMap;
use std::io::Cursor;

use axum::extract::{Form, FromRequest, Multipart, Query, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use super::page::{self, PageData};
use super::AppState;

/// Form fields from the query string and the request body.
///
/// The body may be urlencoded or `multipart/form-data`; any other body is
/// ignored. A body field shadows a query field of the same name, and the
/// first occurrence of a repeated name wins.
#[derive(Debug, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    /// Value of `name`, empty when absent.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut fields = HashMap::new();
        for (k, v) in pairs {
            fields.entry(k.into()).or_insert_with(|| v.into());
        }
        Self(fields)
    }
}

enum BodyKind {
    UrlEncoded,
    Multipart,
    Other,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return BodyKind::Other;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.as_str() {
        "application/x-www-form-urlencoded" => BodyKind::UrlEncoded,
        "multipart/form-data" => BodyKind::Multipart,
        _ => BodyKind::Other,
    }
}

impl<S: Send + Sync> FromRequest<S> for FormFields {
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map_err(IntoResponse::into_response)?;
        let FormFields(mut fields) = query.into_iter().collect();

        let kind = body_kind(req.headers());
        let body: FormFields = match kind {
            BodyKind::UrlEncoded => {
                let Form(pairs) =
                    Form::<Vec<(String, String)>>::from_request(req, state)
                        .await
                        .map_err(IntoResponse::into_response)?;
                pairs.into_iter().collect()
            }
            BodyKind::Multipart => {
                let mut multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                let mut pairs = Vec::new();
                while let Some(field) = multipart
                    .next_field()
                    .await
                    .map_err(IntoResponse::into_response)?
                {
                    let Some(name) = field.name().map(str::to_owned) else {
                        continue;
                    };
                    let value = field.text().await.map_err(IntoResponse::into_response)?;
                    pairs.push((name, value));
                }
                pairs.into_iter().collect()
            }
            BodyKind::Other => FormFields::default(),
        };
        fields.extend(body.0);
        Ok(Self(fields))
    }
}

type HandlerError = (StatusCode, &'static str);

fn translate(state: &AppState, input: &str) -> Result<String, HandlerError> {
    state
        .transliterator
        .translate(Cursor::new(input.as_bytes()))
        .map_err(|e| {
            error!("translation error: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "translation error")
        })
}

/// `GET /`: the form, pre-filled with the sample text.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&PageData {
        input: &state.sample_text,
        output: None,
        table: state.transliterator.table(),
    }))
}

/// `POST /`: translate the `inputtext` field and show it under the form.
pub async fn submit(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<Html<String>, HandlerError> {
    let input = fields.get("inputtext");
    let output = translate(&state, input)?;
    Ok(Html(page::render(&PageData {
        input,
        output: Some(&output),
        table: state.transliterator.table(),
    })))
}

/// `GET|POST /phoru/`: plain-text translation of `q`.
pub async fn api(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<String, HandlerError> {
    let q = fields.get("q");
    if q.is_empty() {
        return Ok(String::new());
    }
    translate(&state, q)
}

/// Fallback for unknown paths.
pub async fn not_found() -> HandlerError {
    (StatusCode::NOT_FOUND, "not found")
}
