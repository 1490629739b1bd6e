/*---------- Imports ----------*/
use crate::config::HandlerConfig;
use crate::handlers::hello;
use crate::models::response::ResponseDescriptor;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};
use thiserror::Error as ThisError;

/*---------- Types ----------*/
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<ResponseDescriptor, Error>> + Send>>;
pub type Route =
    Arc<dyn Fn(Arc<HandlerConfig>, LambdaEvent<Value>) -> HandlerFuture + Send + Sync>;

/*---------- Enums ----------*/
#[derive(ThisError, Debug, PartialEq, Eq)]
pub enum RouterError {
    #[error("no handler registered under \"{0}\"")]
    UnknownHandler(String),
}

/// Table of named handlers. The binary picks one entry at startup.
#[derive(Default, Clone)]
pub struct Router {
    routes: HashMap<String, Route>,
}

/// Strips the module prefix from a platform handler string, so both
/// `handler.hello` and `hello` name the `hello` route.
pub fn handler_name_from(raw: &str) -> &str {
    raw.rsplit('.').next().unwrap_or(raw)
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_routes() -> Self {
        Self::new().route(hello::NAME, |config, event| {
            Box::pin(async move { hello::handler(&config, event).await })
        })
    }

    pub fn route<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(Arc<HandlerConfig>, LambdaEvent<Value>) -> HandlerFuture + Send + Sync + 'static,
    {
        self.routes.insert(name.to_owned(), Arc::new(handler));
        self
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn resolve(&self, name: &str) -> Result<Route, RouterError> {
        match self.routes.get(handler_name_from(name)) {
            Some(route) => Ok(route.clone()),
            None => Err(RouterError::UnknownHandler(name.to_owned())),
        }
    }

    /// Resolves the route for a platform handler string at startup. Bare names
    /// that match nothing, such as `bootstrap` or the binary name, fall back
    /// to `hello`. Unknown `<module>.<name>` strings are still rejected.
    pub fn select(&self, raw: &str) -> Result<Route, RouterError> {
        match self.resolve(raw) {
            Ok(route) => Ok(route),
            Err(error) if raw.contains('.') => Err(error),
            Err(_) => {
                tracing::warn!(
                    handler = raw,
                    routes = ?self.names(),
                    "Unknown handler name, falling back to \"{}\"",
                    hello::NAME
                );

                self.resolve(hello::NAME)
            }
        }
    }

    pub async fn dispatch(
        &self,
        name: &str,
        config: Arc<HandlerConfig>,
        event: LambdaEvent<Value>,
    ) -> Result<ResponseDescriptor, Error> {
        let route = self.resolve(name)?;

        route(config, event).await
    }
}
