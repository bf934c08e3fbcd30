use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::LevelFilter;
use shardpipe::{
    kinesis::{export::url::Url, KinesisConnectOptions, KinesisStreamer},
    stdio::{forward, stdin_reader, FailurePolicy, StdioErr, DEFAULT_FAILURE_POLICY},
    ConnectOptions, StreamKey, Streamer,
};
use std::time::Duration;

#[derive(Debug, Parser)]
#[clap(about = "Publish each line of stdin to a Kinesis stream, round-robin over its shards")]
struct Args {
    #[clap(long, help = "Name of the kinesis stream", env = "STREAM_NAME")]
    stream_name: StreamKey,
    #[clap(long, help = "Role to assume", env = "ROLE_ARN")]
    role_arn: Option<String>,
    #[clap(long, help = "AWS region e.g. us-east-1", env = "AWS_REGION")]
    aws_region: Option<String>,
    #[clap(
        long,
        help = "Endpoint for kinesis, used for dev with localstack e.g. http://localhost:4566",
        env = "KINESIS_ENDPOINT"
    )]
    kinesis_endpoint: Option<Url>,
    #[clap(
        long,
        value_parser = parse_duration,
        help = "Timeout of each kinesis request e.g. 5s, 500ms",
        env = "KINESIS_TIMEOUT"
    )]
    timeout: Option<Duration>,
    #[clap(long, help = "Exit at the first record that fails to publish")]
    fail_fast: bool,
    #[clap(long, help = "Enables debug logging")]
    debug: bool,
}

fn parse_duration(src: &str) -> Result<Duration> {
    if let Some(s) = src.strip_suffix("ms") {
        Ok(Duration::from_millis(s.parse()?))
    } else if let Some(s) = src.strip_suffix('s') {
        Ok(Duration::from_secs(s.parse()?))
    } else if let Some(s) = src.strip_suffix('m') {
        Ok(Duration::from_secs(s.parse::<u64>()? * 60))
    } else {
        Err(anyhow!("Failed to parse {} as Duration", src))
    }
}

impl Args {
    /// Unset options are printed as empty values.
    fn kinesis_config(&self) -> String {
        format!(
            "kinesis config stream-name={} role-arn={} aws-region={} endpoint={} timeout={}",
            self.stream_name,
            self.role_arn.as_deref().unwrap_or_default(),
            self.aws_region.as_deref().unwrap_or_default(),
            self.kinesis_endpoint.as_ref().map(Url::as_str).unwrap_or_default(),
            self.timeout.map(|t| format!("{t:?}")).unwrap_or_default(),
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let kinesis_config = args.kinesis_config();
    let Args {
        stream_name,
        role_arn,
        aws_region,
        kinesis_endpoint,
        timeout,
        fail_fast,
        debug,
    } = args;

    env_logger::Builder::new()
        .filter_level(if debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    log::info!("{kinesis_config}");
    log::info!("service config debug={debug} fail-fast={fail_fast}");

    let mut options = KinesisConnectOptions::default();
    options
        .set_region(aws_region)
        .set_role_arn(role_arn)
        .set_endpoint(kinesis_endpoint);
    if let Some(timeout) = timeout {
        options.set_timeout(timeout)?;
    }

    let streamer = KinesisStreamer::connect(options)
        .await
        .context("failed to create kinesis producer")?;
    let mut producer = streamer
        .create_producer(stream_name, Default::default())
        .await
        .context("failed to create kinesis producer")?;

    let policy = if fail_fast {
        FailurePolicy::Abort
    } else {
        DEFAULT_FAILURE_POLICY
    };
    let stats = forward(&mut stdin_reader(), &mut producer, policy).await;
    log::info!(
        "input closed records={} published={} failed={}",
        stats.records,
        stats.published,
        stats.failed
    );

    streamer.disconnect().await?;

    match stats.error {
        Some(StdioErr::Aborted(err)) => Err(anyhow!(err)),
        // stdin errors are logged by `forward` and do not change the exit code
        _ => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("5s").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert!(parse_duration("5").is_err());
        assert!(parse_duration("xs").is_err());
    }

    #[test]
    fn test_args() {
        let args = Args::try_parse_from([
            "shardpipe",
            "--stream-name",
            "clicks",
            "--kinesis-endpoint",
            "http://localhost:4566",
            "--timeout",
            "3s",
            "--debug",
        ])
        .unwrap();
        assert_eq!(args.stream_name.name(), "clicks");
        assert_eq!(args.timeout, Some(Duration::from_secs(3)));
        assert!(args.debug);
        assert!(!args.fail_fast);

        assert!(Args::try_parse_from(["shardpipe", "--stream-name", "bad name"]).is_err());
    }

    #[test]
    fn test_kinesis_config() {
        let args = Args::try_parse_from([
            "shardpipe",
            "--stream-name",
            "clicks",
            "--role-arn",
            "arn:aws:iam::123456789012:role/writer",
            "--aws-region",
            "eu-west-1",
            "--kinesis-endpoint",
            "http://localhost:4566",
            "--timeout",
            "500ms",
        ])
        .unwrap();
        assert_eq!(
            args.kinesis_config(),
            "kinesis config stream-name=clicks role-arn=arn:aws:iam::123456789012:role/writer \
             aws-region=eu-west-1 endpoint=http://localhost:4566/ timeout=500ms"
        );

        let mut args = args;
        args.role_arn = None;
        args.aws_region = None;
        args.kinesis_endpoint = None;
        args.timeout = None;
        assert_eq!(
            args.kinesis_config(),
            "kinesis config stream-name=clicks role-arn= aws-region= endpoint= timeout="
        );
        assert!(!args.kinesis_config().contains("None"));
    }
}
