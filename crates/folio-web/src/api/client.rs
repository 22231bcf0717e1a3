//! API client implementation
//!
//! Makes HTTP requests to the content backend's JSON API.

use std::cell::RefCell;

use folio_core::action::Verb;
use folio_core::config::ClientConfig;
use folio_core::pagination::push_query;
use folio_core::types::*;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData, RequestCredentials};

use super::types::*;

thread_local! {
    static CONFIG: RefCell<ClientConfig> = RefCell::new(ClientConfig::default());
}

/// Fetch runtime settings published by the hosting server.
///
/// Failures leave the built-in defaults in place.
pub async fn load_config() {
    let result = async {
        let response = Request::get("/config.json")
            .send()
            .await
            .map_err(ApiError::network)?;
        read::<ClientConfig>(response).await
    }
    .await;

    match result {
        Ok(config) => {
            log::debug!("Loaded client config, api base {}", config.api_base);
            CONFIG.with(|c| *c.borrow_mut() = config);
        }
        Err(e) => log::warn!("Using default client config: {}", e),
    }
}

pub fn config() -> ClientConfig {
    CONFIG.with(|c| c.borrow().clone())
}

fn api_url(endpoint: &str) -> String {
    let base = CONFIG.with(|c| c.borrow().api_base.clone());
    format!("{}{}", base.trim_end_matches('/'), endpoint)
}

fn with_query(endpoint: &str, params: &[(String, String)]) -> String {
    let mut url = endpoint.to_string();
    for (key, value) in params {
        push_query(&mut url, key, value);
    }
    url
}

fn builder(verb: Verb, endpoint: &str) -> RequestBuilder {
    let url = api_url(endpoint);
    let request = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    };
    request
        .header("Accept", "application/json")
        .header("X-Requested-With", "XMLHttpRequest")
        .credentials(RequestCredentials::Include)
}

async fn error_from(response: Response) -> ApiError {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    if status == 422 {
        if let Ok(errors) = serde_json::from_str::<FieldErrors>(&text) {
            return ApiError::validation(errors);
        }
    }

    // Laravel-style bodies carry a `message`; fall back to the raw text
    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            if text.is_empty() {
                format!("Request failed with status {}", status)
            } else {
                text
            }
        });

    ApiError::new(format!("HTTP{}", status), message)
}

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response.json().await.map_err(ApiError::parse)
}

async fn read_empty(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    Ok(())
}

async fn get<T: DeserializeOwned>(endpoint: &str) -> Result<T, ApiError> {
    let response = builder(Verb::Get, endpoint)
        .send()
        .await
        .map_err(ApiError::network)?;
    read(response).await
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    verb: Verb,
    endpoint: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = builder(verb, endpoint)
        .json(body)
        .map_err(|e| ApiError::new("SerializeError", e.to_string()))?
        .send()
        .await
        .map_err(ApiError::network)?;
    read(response).await
}

/// Issue a body-less request, as produced by a row action
pub async fn send(verb: Verb, endpoint: &str) -> Result<(), ApiError> {
    log::debug!("{} {}", verb, endpoint);
    let response = builder(verb, endpoint)
        .send()
        .await
        .map_err(ApiError::network)?;
    read_empty(response).await
}

// ============= Admin: generic collections =============

/// One page of an admin collection
pub async fn list<T: DeserializeOwned>(
    collection: &str,
    page: u32,
    params: &[(String, String)],
) -> Result<Paginated<T>, ApiError> {
    let mut query = vec![
        ("page".to_string(), page.to_string()),
        ("per_page".to_string(), config().per_page.to_string()),
    ];
    query.extend_from_slice(params);
    get(&with_query(&format!("/{}", collection), &query)).await
}

pub async fn fetch<T: DeserializeOwned>(collection: &str, id: u64) -> Result<T, ApiError> {
    get(&format!("/{}/{}", collection, id)).await
}

/// Create when `id` is `None`, update otherwise
pub async fn save<B: Serialize>(collection: &str, id: Option<u64>, body: &B) -> Result<Saved, ApiError> {
    match id {
        None => send_json(Verb::Post, &format!("/{}", collection), body).await,
        Some(id) => send_json(Verb::Put, &format!("/{}/{}", collection, id), body).await,
    }
}

/// Multipart save carrying the JSON payload plus newly picked images
pub async fn save_with_images<B: Serialize>(
    collection: &str,
    id: Option<u64>,
    body: &B,
    images: Vec<File>,
) -> Result<Saved, ApiError> {
    let payload = serde_json::to_string(body).map_err(|e| ApiError::new("SerializeError", e.to_string()))?;
    let form = FormData::new().map_err(|_| ApiError::new("FormError", "FormData unavailable"))?;
    let js_err = |_| ApiError::new("FormError", "Failed to build upload form");

    form.append_with_str("payload", &payload).map_err(js_err)?;
    for file in &images {
        form.append_with_blob_and_filename("images[]", file, &file.name())
            .map_err(js_err)?;
    }

    let endpoint = match id {
        None => format!("/{}", collection),
        Some(id) => {
            // Multipart bodies travel as POST with a method override
            form.append_with_str("_method", "PUT").map_err(js_err)?;
            format!("/{}/{}", collection, id)
        }
    };

    log::debug!("Uploading {} image(s) to {}", images.len(), endpoint);
    let response = builder(Verb::Post, &endpoint)
        .body(form)
        .map_err(|e| ApiError::new("FormError", e.to_string()))?
        .send()
        .await
        .map_err(ApiError::network)?;
    read(response).await
}

// ============= Admin: dashboard & lookups =============

pub async fn get_dashboard_stats() -> Result<DashboardStats, ApiError> {
    get("/dashboard").await
}

/// Every term of a taxonomy, for select boxes
pub async fn taxonomy_options(kind: TaxonomyKind) -> Result<Vec<Taxonomy>, ApiError> {
    get(&format!("/{}/options", kind.collection())).await
}

pub async fn list_permissions() -> Result<Vec<Permission>, ApiError> {
    get("/permissions").await
}

pub async fn role_options() -> Result<Vec<Role>, ApiError> {
    get("/roles/options").await
}

pub async fn current_user() -> Result<User, ApiError> {
    get("/me").await
}

pub async fn logout() -> Result<(), ApiError> {
    send(Verb::Post, "/logout").await
}

// ============= Public site =============

pub async fn public_posts(page: u32, params: &[(String, String)]) -> Result<Paginated<Post>, ApiError> {
    let mut query = vec![("page".to_string(), page.to_string())];
    query.extend_from_slice(params);
    get(&with_query("/public/posts", &query)).await
}

pub async fn public_post(slug: &str) -> Result<Post, ApiError> {
    get(&format!("/public/posts/{}", urlencoding::encode(slug))).await
}

pub async fn public_projects(
    page: u32,
    params: &[(String, String)],
) -> Result<Paginated<Project>, ApiError> {
    let mut query = vec![("page".to_string(), page.to_string())];
    query.extend_from_slice(params);
    get(&with_query("/public/projects", &query)).await
}

pub async fn public_project(slug: &str) -> Result<Project, ApiError> {
    get(&format!("/public/projects/{}", urlencoding::encode(slug))).await
}

pub async fn public_page(slug: &str) -> Result<StaticPage, ApiError> {
    get(&format!("/public/pages/{}", urlencoding::encode(slug))).await
}

pub async fn public_terms(kind: TaxonomyKind) -> Result<Vec<Taxonomy>, ApiError> {
    get(&format!("/public/{}", kind.collection())).await
}
