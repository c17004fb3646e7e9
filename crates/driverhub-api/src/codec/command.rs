//! HTTP request to [`Command`] decoding.

use axum::http::Method;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use driverhub_protocols::{Command, Parameters};

use super::catalog::builtin_routes;
use super::template::{decode_path, UriTemplate};
use crate::error::DecodeError;
use crate::transport::HttpRequest;

const SESSION_ID: &str = "sessionId";

/// A command name bound to a method and path template.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: String,
    pub method: Method,
    pub template: UriTemplate,
}

/// A matched route whose body has not been parsed yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    name: String,
    session_id: Option<String>,
    path_parameters: Vec<(String, String)>,
}

impl RouteMatch {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Builds the command from the request body and the path captures.
    pub fn into_command(self, body: &[u8]) -> Result<Command, DecodeError> {
        let mut parameters = parse_body(body)?;
        if self.session_id.is_some() {
            parameters.retain(|key, _| key != SESSION_ID);
        }
        for (key, value) in self.path_parameters {
            parameters.insert(key, Value::String(value));
        }
        Ok(Command::new(self.name, self.session_id, parameters))
    }
}

/// Translates HTTP requests into commands through a route table.
///
/// Routes are tried in definition order; the first whose method and template
/// match wins. The table may be extended while requests are being decoded.
pub struct CommandCodec {
    routes: RwLock<Vec<Route>>,
}

impl CommandCodec {
    /// A codec with no routes.
    pub fn empty() -> Self {
        Self {
            routes: RwLock::new(Vec::new()),
        }
    }

    /// A codec pre-populated with the built-in route catalog.
    pub fn new() -> Self {
        let codec = Self::empty();
        {
            let mut routes = codec.routes.write();
            routes.extend(builtin_routes().into_iter().map(|route| Route {
                name: route.name.to_string(),
                method: route.method,
                template: UriTemplate::parse(route.template),
            }));
        }
        codec
    }

    /// Binds `name` to `method` and `template`.
    ///
    /// Any route already using the same name, or the same method and
    /// template, is replaced.
    pub fn define_command(&self, name: impl Into<String>, method: Method, template: &str) {
        let route = Route {
            name: name.into(),
            method,
            template: UriTemplate::parse(template),
        };
        let mut routes = self.routes.write();
        let before = routes.len();
        routes.retain(|existing| {
            existing.name != route.name
                && !(existing.method == route.method && existing.template == route.template)
        });
        debug!(
            command = %route.name,
            method = %route.method,
            template = %route.template,
            replaced = before - routes.len(),
            "Defined command"
        );
        routes.push(route);
    }

    /// Decodes a request into a command.
    ///
    /// Path captures override body parameters of the same name. A captured
    /// `sessionId` becomes the command's session id and any `sessionId` in
    /// the body is dropped.
    pub fn decode(&self, request: &HttpRequest) -> Result<Command, DecodeError> {
        self.match_route(request)?.into_command(&request.body)
    }

    /// Finds the route for a request without reading its body.
    pub fn match_route(&self, request: &HttpRequest) -> Result<RouteMatch, DecodeError> {
        let segments = decode_path(request.path())?;
        let routes = self.routes.read();
        let (route, captures) = routes
            .iter()
            .filter(|route| route.method == request.method)
            .find_map(|route| route.template.matches(&segments).map(|c| (route, c)))
            .ok_or_else(|| DecodeError::no_route(&request.method, request.path()))?;

        let mut session_id = None;
        let mut path_parameters = Vec::with_capacity(captures.len());
        for (key, value) in captures {
            if key == SESSION_ID {
                session_id = Some(value);
            } else {
                path_parameters.push((key.to_string(), value));
            }
        }
        Ok(RouteMatch {
            name: route.name.clone(),
            session_id,
            path_parameters,
        })
    }

    /// Snapshot of the route table in match order.
    pub fn routes(&self) -> Vec<Route> {
        self.routes.read().clone()
    }

    /// Whether a route is bound to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.routes.read().iter().any(|route| route.name == name)
    }

    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }
}

impl Default for CommandCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_body(body: &[u8]) -> Result<Parameters, DecodeError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Parameters::new());
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(DecodeError::InvalidBody {
            message: format!("expected a JSON object, got {}", json_type(&other)),
            source: None,
        }),
        Err(err) => Err(DecodeError::InvalidBody {
            message: err.to_string(),
            source: Some(err),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
