/*---------- Imports ----------*/
use crate::config::HandlerConfig;
use crate::models::response::{ResponseBody, ResponseDescriptor};
use crate::utils::http::HttpResponse;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;

/*---------- Constants ----------*/
pub const NAME: &str = "hello";
const SUCCESS_MESSAGE: &str = "hello handler executed successfully!";

pub fn greeting(config: &HandlerConfig) -> String {
    format!("{} {}", SUCCESS_MESSAGE, config.greeting_value())
}

/// Logs the configured value and answers with a greeting plus an echo of the
/// event. Fails only when the event payload can't be serialized.
pub async fn handler<T: Serialize>(
    config: &HandlerConfig,
    event: LambdaEvent<T>,
) -> Result<ResponseDescriptor, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        "Hello handler called......{}",
        config.greeting_value()
    );

    let body = ResponseBody::new(greeting(config), &event.payload).to_pretty_json()?;

    Ok(HttpResponse::build_success_response(body))
}
