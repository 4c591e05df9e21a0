#![allow(dead_code)]

//! In-process fake of the TaskPro REST API.
//!
//! Serves `/api/token/`, `/api/register/`, `/api/tasks/` and
//! `/api/tasks/{id}/` on an ephemeral port and records every request it sees.

use axum::extract::{Path, RawQuery, Request, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use taskpro::api::Transport;
use taskpro::libs::notify::MemoryNotifier;
use taskpro::libs::session::SessionStore;
use taskpro::libs::task::{Priority, Task, TaskId};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct StoredTask {
    pub owner: String,
    pub task: Task,
}

#[derive(Debug, Default)]
pub struct ApiState {
    pub users: HashMap<String, String>,
    /// access token -> username
    pub tokens: HashMap<String, String>,
    pub tasks: Vec<StoredTask>,
    pub next_id: i64,
    /// `Authorization` header of every request, in arrival order.
    pub authorizations: Vec<Option<String>>,
    /// `METHOD /path?query` of every request, in arrival order.
    pub requests: Vec<String>,
    /// When set, every request is answered with this status and raw body.
    pub forced: Option<(StatusCode, String)>,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    pub state: Arc<Mutex<ApiState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds an ephemeral port, serves the API in the background and returns
    /// the base URL.
    pub async fn spawn(&self) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let router = self.router();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    fn router(&self) -> Router {
        let api = Router::new()
            .route("/token/", post(token))
            .route("/register/", post(register))
            .route("/tasks/", get(list_tasks).post(create_task))
            .route("/tasks/{id}/", put(update_task).delete(delete_task));

        Router::new()
            .nest("/api", api)
            .layer(middleware::from_fn_with_state(self.clone(), record))
            .with_state(self.clone())
    }

    pub fn add_user(&self, username: &str, password: &str) {
        self.state.lock().users.insert(username.to_owned(), password.to_owned());
    }

    /// Registers `username` and hands out a valid access token for it.
    pub fn issue_token(&self, username: &str) -> String {
        let mut state = self.state.lock();
        let token = format!("access-{}-{}", username, state.tokens.len() + 1);
        state.tokens.insert(token.clone(), username.to_owned());
        token
    }

    pub fn revoke_tokens(&self) {
        self.state.lock().tokens.clear();
    }

    pub fn add_task(&self, owner: &str, title: &str, due_date: &str, priority: Priority, status: bool) -> TaskId {
        let mut state = self.state.lock();
        state.next_id += 1;
        let task = Task {
            id: TaskId::Number(state.next_id),
            title: title.to_owned(),
            description: Some(format!("{} details", title)),
            due_date: due_date.to_owned(),
            priority,
            status,
        };
        let id = task.id.clone();
        state.tasks.push(StoredTask {
            owner: owner.to_owned(),
            task,
        });
        id
    }

    pub fn task(&self, id: &TaskId) -> Option<Task> {
        self.state.lock().tasks.iter().find(|t| &t.task.id == id).map(|t| t.task.clone())
    }

    pub fn task_count(&self) -> usize {
        self.state.lock().tasks.len()
    }

    pub fn force(&self, status: StatusCode, body: &str) {
        self.state.lock().forced = Some((status, body.to_owned()));
    }

    pub fn unforce(&self) {
        self.state.lock().forced = None;
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.lock().requests.clone()
    }

    pub fn authorizations(&self) -> Vec<Option<String>> {
        self.state.lock().authorizations.clone()
    }

    /// Number of list requests received so far.
    pub fn list_calls(&self) -> usize {
        self.state.lock().requests.iter().filter(|r| r.starts_with("GET /api/tasks/")).count()
    }
}

/// Transport against `base_url` with a recording notifier.
pub fn transport(base_url: &str, session: Arc<dyn SessionStore>) -> (Transport, Arc<MemoryNotifier>) {
    let notifier = Arc::new(MemoryNotifier::new());
    let transport = Transport::new(base_url, session, notifier.clone());
    (transport, notifier)
}

/// A base URL nothing listens on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

async fn record(State(api): State<FakeApi>, request: Request, next: Next) -> Response {
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let line = format!(
        "{} {}",
        request.method(),
        request.uri().path_and_query().map(|p| p.as_str()).unwrap_or("")
    );

    let forced = {
        let mut state = api.state.lock();
        state.authorizations.push(authorization);
        state.requests.push(line);
        state.forced.clone()
    };
    if let Some((status, body)) = forced {
        return (status, body).into_response();
    }
    next.run(request).await
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"detail": "Given token not valid for any token type"})),
    )
        .into_response()
}

fn owner(state: &ApiState, headers: &HeaderMap) -> Result<String, Response> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(|token| state.tokens.get(token).cloned())
        .ok_or_else(unauthorized)
}

#[derive(Deserialize)]
struct CredentialsBody {
    username: String,
    password: String,
}

async fn token(State(api): State<FakeApi>, Json(body): Json<CredentialsBody>) -> Response {
    let mut state = api.state.lock();
    if state.users.get(&body.username) != Some(&body.password) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "No active account found with the given credentials"})),
        )
            .into_response();
    }
    let access = format!("access-{}-{}", body.username, state.tokens.len() + 1);
    state.tokens.insert(access.clone(), body.username);
    Json(json!({"access": access, "refresh": "refresh-token"})).into_response()
}

async fn register(State(api): State<FakeApi>, Json(body): Json<CredentialsBody>) -> Response {
    let mut state = api.state.lock();
    if state.users.contains_key(&body.username) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"username": ["A user with that username already exists."]})),
        )
            .into_response();
    }
    state.users.insert(body.username.clone(), body.password);
    (StatusCode::CREATED, Json(json!({"username": body.username}))).into_response()
}

#[derive(Deserialize)]
struct TaskBody {
    title: String,
    #[serde(default)]
    description: String,
    due_date: String,
    priority: Priority,
    status: Option<bool>,
}

async fn list_tasks(State(api): State<FakeApi>, headers: HeaderMap, RawQuery(query): RawQuery) -> Response {
    let state = api.state.lock();
    let owner = match owner(&state, &headers) {
        Ok(owner) => owner,
        Err(response) => return response,
    };

    let status = query
        .as_deref()
        .unwrap_or("")
        .split('&')
        .find_map(|pair| pair.strip_prefix("status="))
        .map(str::to_owned);
    let mut tasks: Vec<Task> = state
        .tasks
        .iter()
        .filter(|t| t.owner == owner)
        .filter(|t| match status.as_deref() {
            Some("complete") => t.task.status,
            Some("incomplete") => !t.task.status,
            _ => true,
        })
        .map(|t| t.task.clone())
        .collect();
    tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    Json(tasks).into_response()
}

async fn create_task(State(api): State<FakeApi>, headers: HeaderMap, Json(body): Json<TaskBody>) -> Response {
    let mut state = api.state.lock();
    let owner = match owner(&state, &headers) {
        Ok(owner) => owner,
        Err(response) => return response,
    };
    if body.title.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"title": ["This field may not be blank."]})),
        )
            .into_response();
    }

    state.next_id += 1;
    let task = Task {
        id: TaskId::Number(state.next_id),
        title: body.title,
        description: Some(body.description),
        due_date: body.due_date,
        priority: body.priority,
        status: body.status.unwrap_or(false),
    };
    state.tasks.push(StoredTask {
        owner,
        task: task.clone(),
    });
    (StatusCode::CREATED, Json(task)).into_response()
}

async fn update_task(
    State(api): State<FakeApi>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<TaskBody>,
) -> Response {
    let mut state = api.state.lock();
    let owner = match owner(&state, &headers) {
        Ok(owner) => owner,
        Err(response) => return response,
    };
    let stored = match state
        .tasks
        .iter_mut()
        .find(|t| t.owner == owner && t.task.id == TaskId::Number(id))
    {
        Some(stored) => stored,
        None => return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response(),
    };

    stored.task.title = body.title;
    stored.task.description = Some(body.description);
    stored.task.due_date = body.due_date;
    stored.task.priority = body.priority;
    if let Some(status) = body.status {
        stored.task.status = status;
    }
    Json(stored.task.clone()).into_response()
}

async fn delete_task(State(api): State<FakeApi>, Path(id): Path<i64>, headers: HeaderMap) -> Response {
    let mut state = api.state.lock();
    let owner = match owner(&state, &headers) {
        Ok(owner) => owner,
        Err(response) => return response,
    };
    let before = state.tasks.len();
    state.tasks.retain(|t| !(t.owner == owner && t.task.id == TaskId::Number(id)));
    if state.tasks.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}
