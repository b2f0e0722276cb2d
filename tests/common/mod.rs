//! In-process stand-in for the portfolio backend.
//!
//! Binds an axum server on an ephemeral port, records every request it
//! receives and answers with whatever the test's responder returns.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use serde_json::{json, Value};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use portfolio_site::app::portfolio::{ApiConfig, PortfolioClient};

/// A request as the backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

/// What the backend answers.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl Reply {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self::raw(status, &body.to_string())
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

type Responder = dyn Fn(&Recorded) -> Reply + Send + Sync;

struct MockState {
    seen: Mutex<Vec<Recorded>>,
    respond: Box<Responder>,
}

pub struct MockBackend {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start<F>(respond: F) -> Self
    where
        F: Fn(&Recorded) -> Reply + Send + Sync + 'static,
    {
        let state = Arc::new(MockState {
            seen: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        });

        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend crashed");
        });

        Self { addr, state }
    }

    /// Backend that serves [`dataset`] the way the real one does.
    pub async fn with_dataset() -> Self {
        Self::start(serve_dataset).await
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> PortfolioClient {
        self.client_with_timeout(Duration::from_secs(5))
    }

    pub fn client_with_timeout(&self, timeout: Duration) -> PortfolioClient {
        PortfolioClient::new(ApiConfig::new(&self.url(), timeout)).expect("build client")
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.seen.lock().expect("request log poisoned").clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request reached the backend")
    }
}

async fn record(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let recorded = Recorded {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body,
    };

    let reply = (state.respond)(&recorded);
    state
        .seen
        .lock()
        .expect("request log poisoned")
        .push(recorded);

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    (reply.status, reply.body).into_response()
}

fn ok(data: Value) -> Reply {
    Reply::json(StatusCode::OK, json!({ "success": true, "data": data }))
}

/// Answers like the real backend with [`dataset`].
pub fn serve_dataset(request: &Recorded) -> Reply {
    serve(&dataset(), request)
}

/// Answers like the real backend: `{success, data}` envelopes under `/api`,
/// `project_type` filtering with `All` meaning no filter.
pub fn serve(data: &Value, request: &Recorded) -> Reply {
    match (request.method.as_str(), request.path.as_str()) {
        ("GET", "/api/profile") => ok(data["profile"].clone()),
        ("PUT", "/api/profile") => match serde_json::from_str::<Value>(&request.body) {
            Ok(update) => {
                let mut profile = data["profile"].clone();
                if let (Some(profile), Some(update)) = (profile.as_object_mut(), update.as_object()) {
                    for (key, value) in update {
                        profile.insert(key.clone(), value.clone());
                    }
                }
                Reply::json(
                    StatusCode::OK,
                    json!({ "success": true, "data": profile, "message": "Profile updated successfully" }),
                )
            }
            Err(_) => Reply::json(StatusCode::UNPROCESSABLE_ENTITY, json!({ "message": "invalid profile" })),
        },
        ("GET", "/api/education") => ok(data["education"].clone()),
        ("GET", "/api/skills") => ok(data["skills"].clone()),
        ("GET", "/api/projects") => {
            let wanted = request
                .query
                .as_deref()
                .and_then(|query| query.strip_prefix("project_type="))
                .filter(|wanted| *wanted != "All");
            let projects: Vec<Value> = data["projects"]
                .as_array()
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .filter(|project| wanted.map_or(true, |wanted| project["type"] == wanted))
                .collect();
            ok(Value::Array(projects))
        }
        ("GET", "/api/achievements") => ok(data["achievements"].clone()),
        ("GET", "/api/creative-works") => ok(data["creativeWorks"].clone()),
        ("GET", "/api/photography") => ok(data["photography"].clone()),
        _ => Reply::json(StatusCode::NOT_FOUND, json!({ "detail": "Not Found" })),
    }
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

/// An `ERROR` event as it was emitted.
#[derive(Debug, Clone, Default)]
pub struct LoggedError {
    pub message: String,
    pub fields: HashMap<String, String>,
}

impl LoggedError {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn insert(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.insert(field.name().to_string(), value);
        }
    }
}

impl Visit for LoggedError {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.insert(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.insert(field, format!("{value:?}"));
    }
}

/// Layer that keeps every `ERROR` event emitted on the current thread.
#[derive(Clone, Default)]
pub struct ErrorLog {
    events: Arc<Mutex<Vec<LoggedError>>>,
}

impl ErrorLog {
    /// Captures until the guard is dropped. Tests using this must run on a
    /// current-thread runtime so the client's events reach this thread.
    pub fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn events(&self) -> Vec<LoggedError> {
        self.events.lock().expect("log capture poisoned").clone()
    }
}

impl<S: Subscriber> Layer<S> for ErrorLog {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::ERROR {
            return;
        }

        let mut logged = LoggedError::default();
        event.record(&mut logged);
        self.events.lock().expect("log capture poisoned").push(logged);
    }
}

/// The canonical portfolio dataset.
pub fn dataset() -> Value {
    json!({
        "profile": {
            "name": "TANISHK TIWARI",
            "title": "B.Tech Student | Future Tech Innovator",
            "location": "Delhi, India",
            "phone": "+91 9119937716",
            "email": "tiwaritanishk555ltp@gmail.com",
            "github": "https://github.com/tiwaritanishk",
            "linkedin": "https://linkedin.com/in/tanishk-tiwari",
            "website": "https://vedic-math-project.com",
            "summary": "B.Tech student at Cluster Innovation Centre, University of Delhi, specializing in Information Technology and Mathematical Innovations."
        },
        "education": [
            {
                "institution": "Cluster Innovation Centre, University of Delhi",
                "degree": "B.Tech in Information Technology and Mathematical Innovations",
                "duration": "Aug 2024 – Present",
                "grade": "SGPA: 9.36"
            },
            {
                "institution": "Kendriya Vidyalaya, Lalitpur (CBSE)",
                "degree": "High School (XII), Science Stream",
                "duration": "2024",
                "grade": "Percentage: 96.2%"
            },
            {
                "institution": "Kendriya Vidyalaya, Lalitpur (CBSE)",
                "degree": "Secondary School (X)",
                "duration": "2022",
                "grade": "Percentage: 97.0%"
            }
        ],
        "skills": {
            "programming": ["Python", "Java", "C"],
            "webDev": ["HTML", "CSS"],
            "tools": ["GitHub", "VS Code", "Mathematica", "MATLAB", "Canva", "Figma"],
            "cad": ["Fusion 360", "FreeCAD"],
            "concepts": ["OOP", "Data Structures", "Graph Theory", "Linear Algebra", "Calculus", "Engineering Physics"]
        },
        "projects": [
            {
                "id": 1,
                "title": "Object Avoiding Robot",
                "date": "2024",
                "description": "Autonomous robot that navigates and avoids obstacles using sensors.",
                "image": "https://assets.example.com/object-avoiding-robot.png",
                "technologies": ["Arduino", "C++", "Sensors"],
                "type": "Robotics"
            },
            {
                "id": 2,
                "title": "Line Following Robot",
                "date": "2024",
                "description": "Line following robot that placed 2nd at Convoke Techfest.",
                "technologies": ["Arduino", "C++", "IR Sensors"],
                "type": "Robotics"
            },
            {
                "id": 3,
                "title": "Red Ball Game",
                "date": "2024",
                "description": "Red Ball game using Python and Linear Algebra for the physics.",
                "technologies": ["Python", "Linear Algebra", "Physics"],
                "type": "Game"
            },
            {
                "id": 6,
                "title": "Vedic Mathematics Website",
                "date": "Dec 2024",
                "description": "Educational website promoting Vedic Maths among school students.",
                "technologies": ["Google Sites", "Web Design", "Content Creation"],
                "type": "Web",
                "link": "https://vedic-math-project.com"
            },
            {
                "id": 7,
                "title": "CAD Stress Analysis & Optimization",
                "date": "Jun 2025",
                "description": "3D figures in Fusion 360 with stress analysis in FreeCAD.",
                "technologies": ["Fusion 360", "FreeCAD", "3D Printing"],
                "type": "CAD"
            },
            {
                "id": 8,
                "title": "Random Graph Generator & Graph Coloring",
                "date": "Dec 2024",
                "description": "Random graphs with greedy and backtracking vertex coloring.",
                "technologies": ["Python", "Graph Theory", "Algorithms"],
                "type": "Software"
            },
            {
                "id": 9,
                "title": "Research Paper: Solar Energy and Electric Vehicles",
                "date": "Currently Working",
                "description": "Integrating solar energy systems with electric vehicle technology.",
                "technologies": ["Research", "Solar Energy", "Electric Vehicles"],
                "type": "Research"
            }
        ],
        "achievements": [
            {
                "title": "Techfest – IIT Bombay | LNMIIT Jaipur",
                "description": "Participated in 'Meshmerize' and built a Line Following Robot",
                "date": "Apr 2025"
            },
            {
                "title": "Convoke Techfest - Cluster Innovation Centre",
                "description": "Secured 2nd place in the Line Follower Robot path traversal challenge",
                "date": "Oct 2024"
            }
        ],
        "creativeWorks": [
            {
                "id": 1,
                "title": "How content I was",
                "type": "Poetry",
                "date": "2024",
                "preview": "How content I was \nWith my head on your lap...",
                "fullContent": "How content I was \nWith my head on your lap.\nYour hand through my hairs."
            }
        ],
        "photography": [
            {
                "id": 1,
                "title": "Reflections in Crimson",
                "image": "https://assets.example.com/reflections.jpeg",
                "description": "Light and shadow over night-time water reflections."
            },
            {
                "id": 2,
                "title": "Dreams of Paris",
                "image": "https://assets.example.com/paris.jpeg",
                "description": "Parisian architecture under cloudy skies."
            }
        ]
    })
}
