//! Route handlers shared by the demo servers.
//!
//! Each function takes the state it needs and returns a ready-to-register
//! [`Handler`] — state is captured explicitly instead of read from globals,
//! so two servers in one process would each keep their own counters and
//! start times.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::handler::Handler;
use crate::models::{Greeting, HealthCheck, Message, ServerInfo, Stats};
use crate::request::Request;
use crate::response::Response;
use crate::state::AppState;

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// `GET /api` — service banner as JSON.
pub fn api(state: Arc<AppState>, features: &[&str]) -> impl Handler {
    let features: Vec<String> = features.iter().map(|&f| f.to_owned()).collect();
    move |_req: Request| {
        let state = Arc::clone(&state);
        let features = features.clone();
        async move {
            Response::json(&Message {
                text: format!("Welcome to the {} API", state.service()),
                version: state.version().to_owned(),
                timestamp: Utc::now(),
                service: state.service().to_owned(),
                features: if features.is_empty() { None } else { Some(features) },
            })
        }
    }
}

/// `GET /health` — always healthy while the process can answer at all.
pub fn health(state: Arc<AppState>) -> impl Handler {
    move |_req: Request| {
        let state = Arc::clone(&state);
        async move {
            Response::json(&HealthCheck {
                status: "healthy".to_owned(),
                timestamp: now_rfc3339(),
                uptime: state.uptime_string(),
            })
        }
    }
}

/// `GET /info` — service metadata and the registered endpoint list.
pub fn info(state: Arc<AppState>) -> impl Handler {
    move |_req: Request| {
        let state = Arc::clone(&state);
        async move {
            Response::json(&ServerInfo {
                service: state.service().to_owned(),
                version: state.version().to_owned(),
                start_time: state
                    .started_at()
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
                endpoints: state.endpoints().to_vec(),
            })
        }
    }
}

/// `GET /time` — current wall clock and uptime, plain text.
pub fn time(state: Arc<AppState>) -> impl Handler {
    move |_req: Request| {
        let state = Arc::clone(&state);
        async move {
            let now = Utc::now().format("%A, %B %-d, %Y at %-I:%M:%S %p UTC");
            Response::text(format!(
                "Server Time: {now}\nUptime: {}",
                state.uptime_string()
            ))
        }
    }
}

/// `GET /stats` — request totals and uptime.
///
/// `total_requests` reads the same counter the
/// [`trace`](crate::middleware::trace) middleware increments, so the value
/// includes the request currently being served.
pub fn stats(state: Arc<AppState>) -> impl Handler {
    move |_req: Request| {
        let state = Arc::clone(&state);
        async move {
            Response::json(&Stats {
                total_requests: state.counter().total(),
                server_uptime: state.uptime_string(),
                current_time: now_rfc3339(),
                service: state.service().to_owned(),
            })
        }
    }
}

/// `GET /greet?name=X` — personalized greeting, `"Friend"` when no name is
/// given.
pub fn greet(state: Arc<AppState>) -> impl Handler {
    move |req: Request| {
        let state = Arc::clone(&state);
        async move {
            let name = req.query("name").unwrap_or("Friend".into());
            Response::json(&Greeting {
                greeting: format!("Hello, {name}!"),
                timestamp: now_rfc3339(),
                server: state.service().to_owned(),
            })
        }
    }
}
