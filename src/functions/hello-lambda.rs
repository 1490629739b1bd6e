/*---------- Imports ----------*/
use hello_lambda::config::HandlerConfig;
use hello_lambda::handlers::hello;
use hello_lambda::router::Router;
use hello_lambda::utils::logging;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::{env, sync::Arc};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();

    let config = Arc::new(HandlerConfig::from_env());
    let handler_name = env::var("_HANDLER").unwrap_or_else(|_| hello::NAME.to_owned());
    let route = Router::default_routes().select(&handler_name)?;

    tracing::info!(handler = %handler_name, "Starting function");

    let handler = service_fn(|event: LambdaEvent<Value>| route(config.clone(), event));

    lambda_runtime::run(handler).await?;

    Ok(())
}
