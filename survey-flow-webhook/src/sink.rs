use reqwest::{Client, Url};
use survey_flow::{DELIVERY_TIMEOUT, DeliveryError, DeliverySink, SubmissionPayload};
use tracing::debug;

/// How a payload is encoded for the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Transport {
    /// GET with the flattened payload as query parameters.
    Query,

    /// POST with the structured payload as a JSON body.
    #[default]
    Json,
}

/// HTTP delivery sink.
///
/// Each attempt is bounded by [`DELIVERY_TIMEOUT`]; timeouts, transport
/// errors, and non-success statuses all come back as typed
/// [`DeliveryError`]s for the session state machine to absorb.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: Client,
    endpoint: Url,
    transport: Transport,
}

impl WebhookSink {
    /// Create a sink delivering to `endpoint` with the given transport.
    pub fn new(endpoint: Url, transport: Transport) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(DELIVERY_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint,
            transport,
        })
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the transport.
    pub fn transport(&self) -> Transport {
        self.transport
    }
}

impl DeliverySink for WebhookSink {
    async fn deliver(&self, payload: &SubmissionPayload) -> Result<(), DeliveryError> {
        let request = match self.transport {
            Transport::Query => self
                .client
                .get(self.endpoint.clone())
                .query(&payload.query_pairs()),
            Transport::Json => self.client.post(self.endpoint.clone()).json(payload),
        };

        debug!(endpoint = %self.endpoint, transport = ?self.transport, "sending submission");
        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                DeliveryError::Timeout
            } else {
                DeliveryError::network(err)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(DeliveryError::Server {
                status: status.as_u16(),
            })
        }
    }
}
