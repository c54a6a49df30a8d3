use lambda_runtime::{service_fn, Error, LambdaEvent};
use match_day_notifier_lambda::handler::{handler, Clients};
use match_day_notifier_lambda::rapidapi::build_agent;
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_max_level(tracing::Level::INFO)
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    let aws = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let clients = Clients {
        http: build_agent(),
        sns: aws_sdk_sns::Client::new(&aws),
    };
    let clients = &clients;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(clients, event).await
    }))
    .await
}
