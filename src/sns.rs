use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;
use tracing::{info, instrument};

use crate::error::DispatchError;

/// Destination for the formatted summary.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish `message` and return the acknowledgement id, if the service sent one.
    async fn publish(&self, message: &str) -> Result<Option<String>, DispatchError>;
}

/// SNS client bound to a single topic.
#[derive(Debug, Clone)]
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsPublisher {
    pub fn new(client: aws_sdk_sns::Client, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }
}

#[async_trait]
impl Publisher for SnsPublisher {
    #[instrument(skip(self, message), fields(topic = %self.topic_arn, bytes = message.len()))]
    async fn publish(&self, message: &str) -> Result<Option<String>, DispatchError> {
        let result = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(message)
            .send()
            .await;

        match result {
            Ok(output) => {
                let message_id = output.message_id().map(str::to_string);
                info!(message_id = message_id.as_deref().unwrap_or("none"), "Published to SNS topic");
                Ok(message_id)
            }
            Err(e) => Err(DispatchError::Publish(DisplayErrorContext(&e).to_string())),
        }
    }
}
