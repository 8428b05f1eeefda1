//! Route patterns, path parameters and the view registry.
//!
//! Navigation is capability-based: each route pattern is registered with a
//! factory that builds its view, so a route can only reach what its factory
//! was given. Views request navigation through a clonable [`Navigator`]
//! handle; the owner of the [`Router`] applies queued intents with
//! [`Router::process_pending`], one at a time.

use std::collections::HashMap;
use std::fmt;

use tokio::sync::mpsc;

use crate::error::{Error, Result};
use crate::views::View;

/// Path of the listing route.
pub const PESSOA_LISTAR: &str = "/pessoa/listar";
/// Path of the creation route.
pub const PESSOA_CADASTRAR: &str = "/pessoa/cadastrar";
/// Pattern of the edit route; `:id` is the record to load.
pub const PESSOA_EDITAR: &str = "/pessoa/editar/:id";

/// Concrete edit path for a persisted record.
pub fn editar_path(id: i64) -> String {
    format!("/pessoa/editar/{id}")
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern of literal and `:name` segments.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parses a pattern such as `/pessoa/editar/:id`. Segments starting
    /// with `:` capture the corresponding path segment by name.
    pub fn parse(pattern: &str) -> Self {
        let segments = split_segments(pattern)
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(segment.to_string()),
            })
            .collect();
        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// Matches a concrete path, yielding the captured parameters.
    /// Leading and trailing slashes are not significant.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let segments: Vec<&str> = split_segments(path).collect();
        if segments.len() != self.segments.len() {
            return None;
        }
        let mut params = HashMap::new();
        for (expected, actual) in self.segments.iter().zip(segments) {
            match expected {
                Segment::Literal(literal) if literal == actual => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), actual.to_string());
                }
            }
        }
        Some(RouteParams { params })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Parameters captured from a matched path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Parameters of a path with no captures.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Clonable handle for queueing navigation intents.
///
/// Views hold a `Navigator` and call [`go`](Navigator::go) after a
/// successful save; the router applies the intent later, so a view never
/// re-enters the registry that built it.
#[derive(Debug, Clone)]
pub struct Navigator {
    sender: mpsc::UnboundedSender<String>,
}

impl Navigator {
    /// A navigator plus the receiving side of its queue. The router builds
    /// its own pair; tests use this to observe navigation events directly.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Queues a navigation to `path`.
    pub fn go(&self, path: impl Into<String>) {
        let path = path.into();
        if self.sender.send(path.clone()).is_err() {
            log::warn!("navigation to {path} dropped, no router is listening");
        }
    }
}

type ViewFactory<V> = Box<dyn Fn() -> V + Send + Sync>;

/// Registry of route patterns and the factories that build their views.
///
/// The first registered pattern that matches wins. The activated view is
/// installed as the current outlet even when activation fails: the view
/// has already informed the user and renders its empty state.
pub struct Router<V> {
    routes: Vec<(RoutePattern, ViewFactory<V>)>,
    navigator: Navigator,
    pending: mpsc::UnboundedReceiver<String>,
    outlet: Option<V>,
    current_path: Option<String>,
}

impl<V: View> Router<V> {
    pub fn new() -> Self {
        let (navigator, pending) = Navigator::channel();
        Self {
            routes: Vec::new(),
            navigator,
            pending,
            outlet: None,
            current_path: None,
        }
    }

    /// The handle views use to queue navigations back into this router.
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    /// Registers a pattern with the factory that builds its view.
    pub fn register<F>(&mut self, pattern: &str, factory: F)
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        let pattern = RoutePattern::parse(pattern);
        log::debug!("registered route {pattern}");
        self.routes.push((pattern, Box::new(factory)));
    }

    /// Resolves `path`, builds the route's view, activates it and installs
    /// it as the current outlet. An unregistered path is an error; a failed
    /// activation is not, the view itself already notified the user.
    pub async fn navigate(&mut self, path: &str) -> Result<()> {
        let matched = self
            .routes
            .iter()
            .enumerate()
            .find_map(|(index, (pattern, _))| pattern.matches(path).map(|params| (index, params)));
        let (index, params) = match matched {
            Some(found) => found,
            None => return Err(Error::general(format!("no route matches {path}"))),
        };

        log::debug!("navigating to {path}");
        let mut view = (self.routes[index].1)();
        if let Err(err) = view.activate(&params).await {
            log::warn!("activation of {path} failed: {err}");
        }
        self.current_path = Some(path.to_string());
        self.outlet = Some(view);
        Ok(())
    }

    /// Applies navigations queued by views since the last call, in order.
    /// A navigation performed while draining is picked up in the same call.
    pub async fn process_pending(&mut self) -> Result<()> {
        while let Ok(path) = self.pending.try_recv() {
            self.navigate(&path).await?;
        }
        Ok(())
    }

    /// The currently installed view, if any navigation happened yet.
    pub fn outlet(&self) -> Option<&V> {
        self.outlet.as_ref()
    }

    pub fn outlet_mut(&mut self) -> Option<&mut V> {
        self.outlet.as_mut()
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }
}

impl<V: View> Default for Router<V> {
    fn default() -> Self {
        Self::new()
    }
}
