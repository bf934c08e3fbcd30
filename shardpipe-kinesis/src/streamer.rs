use aws_config::{sts::AssumeRoleProvider, BehaviorVersion, SdkConfig};
use aws_sdk_kinesis::{
    config::{retry::RetryConfig, timeout::TimeoutConfig, Builder, Region},
    Client,
};
use shardpipe_types::{export::async_trait, ConnectOptions, StreamErr, StreamKey, Streamer};
use std::time::Duration;
use url::Url;

use crate::{
    KinesisErr, KinesisProducer, KinesisProducerOptions, KinesisResult, DEFAULT_SESSION_NAME,
};

#[derive(Debug, Clone)]
pub struct KinesisStreamer {
    client: Client,
    options: KinesisConnectOptions,
}

#[derive(Debug, Default, Clone)]
pub struct KinesisConnectOptions {
    region: Option<String>,
    role_arn: Option<String>,
    session_name: Option<String>,
    endpoint: Option<Url>,
    timeout: Option<Duration>,
}

#[async_trait]
impl Streamer for KinesisStreamer {
    type Error = KinesisErr;
    type Producer = KinesisProducer;
    type ConnectOptions = KinesisConnectOptions;
    type ProducerOptions = KinesisProducerOptions;

    /// Resolve credentials and build the client. Nothing is sent until you create a producer.
    async fn connect(options: Self::ConnectOptions) -> KinesisResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = options.region() {
            loader = loader.region(Region::new(region.to_owned()));
        }
        let shared = loader.load().await;

        let mut config = client_config(&shared, &options)?;
        if let Some(role_arn) = options.role_arn() {
            let provider = AssumeRoleProvider::builder(role_arn)
                .session_name(options.session_name())
                .configure(&shared)
                .build()
                .await;
            config = config.credentials_provider(provider);
        }

        Ok(KinesisStreamer {
            client: Client::from_conf(config.build()),
            options,
        })
    }

    /// Records are not buffered, so there is nothing to flush.
    async fn disconnect(self) -> KinesisResult<()> {
        Ok(())
    }

    /// It will list the shards of the stream once.
    async fn create_producer(
        &self,
        stream: StreamKey,
        options: Self::ProducerOptions,
    ) -> KinesisResult<Self::Producer> {
        KinesisProducer::create(self.client.clone(), stream, options).await
    }
}

/// Every call is attempted once: the SDK's retry policy is switched off.
fn client_config(shared: &SdkConfig, options: &KinesisConnectOptions) -> KinesisResult<Builder> {
    let mut config = Builder::from(shared).retry_config(RetryConfig::disabled());
    if let Some(endpoint) = options.endpoint() {
        if endpoint.host_str().is_none() {
            return Err(StreamErr::Connect(format!(
                "endpoint `{endpoint}` has no host"
            )));
        }
        config = config.endpoint_url(endpoint.as_str().trim_end_matches('/'));
    }
    if let Ok(timeout) = options.timeout() {
        config = config.timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(timeout)
                .build(),
        );
    }
    Ok(config)
}

impl KinesisStreamer {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn options(&self) -> &KinesisConnectOptions {
        &self.options
    }
}

impl ConnectOptions for KinesisConnectOptions {
    type Error = KinesisErr;

    fn timeout(&self) -> KinesisResult<Duration> {
        self.timeout.ok_or(StreamErr::TimeoutNotSet)
    }

    /// Timeout for each Kinesis call. If unset, the SDK default applies.
    fn set_timeout(&mut self, v: Duration) -> KinesisResult<&mut Self> {
        self.timeout = Some(v);
        Ok(self)
    }
}

impl KinesisConnectOptions {
    /// If unset, the region is resolved from the environment / profile.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
    pub fn set_region(&mut self, region: Option<String>) -> &mut Self {
        self.region = region;
        self
    }

    /// Role to assume via STS, on top of the default credentials chain.
    pub fn role_arn(&self) -> Option<&str> {
        self.role_arn.as_deref()
    }
    pub fn set_role_arn(&mut self, role_arn: Option<String>) -> &mut Self {
        self.role_arn = role_arn;
        self
    }

    /// Defaults to [`DEFAULT_SESSION_NAME`]. Only relevant when a role is assumed.
    pub fn session_name(&self) -> &str {
        self.session_name.as_deref().unwrap_or(DEFAULT_SESSION_NAME)
    }
    pub fn set_session_name(&mut self, session_name: Option<String>) -> &mut Self {
        self.session_name = session_name;
        self
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }
    /// Override the Kinesis endpoint, e.g. `http://localhost:4566` for localstack.
    /// STS is not affected.
    pub fn set_endpoint(&mut self, endpoint: Option<Url>) -> &mut Self {
        self.endpoint = endpoint;
        self
    }
}
