use aws_sdk_kinesis::{
    error::{DisplayErrorContext, SdkError},
    operation::{list_shards::ListShardsError, put_record::PutRecordError},
};
use shardpipe_types::{StreamErr, StreamResult};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Different types of Kinesis errors.
pub enum KinesisErr {
    #[error("failed to list shards: {0}")]
    ListShards(String),
    #[error("failed to list shards: stream not found: {0}")]
    StreamNotFound(String),
    #[error("failed to list shards: request limit exceeded: {0}")]
    LimitExceeded(String),
    #[error("stream `{0}` has no shards")]
    NoShards(String),
    #[error("failed to put record: {0}")]
    PutRecord(String),
    #[error("failed to put record: provisioned throughput exceeded: {0}")]
    ThroughputExceeded(String),
}

/// A type alias for convenience.
pub type KinesisResult<T> = StreamResult<T, KinesisErr>;

pub(crate) fn list_shards_err(err: SdkError<ListShardsError>) -> StreamErr<KinesisErr> {
    let e = format!("{}", DisplayErrorContext(&err));
    StreamErr::Backend(match err.as_service_error() {
        Some(err) if err.is_resource_not_found_exception() => KinesisErr::StreamNotFound(e),
        Some(err) if err.is_limit_exceeded_exception() => KinesisErr::LimitExceeded(e),
        _ => KinesisErr::ListShards(e),
    })
}

pub(crate) fn put_record_err(err: SdkError<PutRecordError>) -> StreamErr<KinesisErr> {
    let e = format!("{}", DisplayErrorContext(&err));
    StreamErr::Backend(match err.as_service_error() {
        Some(err) if err.is_provisioned_throughput_exceeded_exception() => {
            KinesisErr::ThroughputExceeded(e)
        }
        _ => KinesisErr::PutRecord(e),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use aws_sdk_kinesis::types::error::{
        LimitExceededException, ProvisionedThroughputExceededException,
        ResourceNotFoundException,
    };
    use aws_smithy_runtime_api::http::{Response as HttpResponse, StatusCode};
    use aws_smithy_types::body::SdkBody;

    fn response() -> HttpResponse {
        HttpResponse::new(StatusCode::try_from(400u16).unwrap(), SdkBody::empty())
    }

    fn backend(err: StreamErr<KinesisErr>) -> KinesisErr {
        match err {
            StreamErr::Backend(err) => err,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_list_shards_err() {
        let not_found = ListShardsError::ResourceNotFoundException(
            ResourceNotFoundException::builder()
                .message("Stream clicks under account 000000000000 not found.")
                .build(),
        );
        let err = backend(list_shards_err(SdkError::service_error(
            not_found,
            response(),
        )));
        assert!(matches!(err, KinesisErr::StreamNotFound(_)));
        assert!(err
            .to_string()
            .starts_with("failed to list shards: stream not found: "));
        assert!(err.to_string().contains("Stream clicks"));

        let limit = ListShardsError::LimitExceededException(
            LimitExceededException::builder().message("slow down").build(),
        );
        let err = backend(list_shards_err(SdkError::service_error(limit, response())));
        assert!(matches!(err, KinesisErr::LimitExceeded(_)));
        assert!(err.to_string().starts_with("failed to list shards: "));

        let err = backend(list_shards_err(SdkError::timeout_error("connect timed out")));
        assert!(matches!(err, KinesisErr::ListShards(_)));
        assert!(err.to_string().starts_with("failed to list shards: "));
    }

    #[test]
    fn test_put_record_err() {
        let throttled = PutRecordError::ProvisionedThroughputExceededException(
            ProvisionedThroughputExceededException::builder()
                .message("Rate exceeded for shard shardId-000000000001")
                .build(),
        );
        let err = backend(put_record_err(SdkError::service_error(
            throttled,
            response(),
        )));
        assert!(matches!(err, KinesisErr::ThroughputExceeded(_)));
        assert!(err.to_string().contains("shardId-000000000001"));

        let not_found = PutRecordError::ResourceNotFoundException(
            ResourceNotFoundException::builder().build(),
        );
        let err = backend(put_record_err(SdkError::service_error(
            not_found,
            response(),
        )));
        assert!(matches!(err, KinesisErr::PutRecord(_)));
        assert!(err.to_string().starts_with("failed to put record: "));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            KinesisErr::ListShards("dispatch failure".to_owned()).to_string(),
            "failed to list shards: dispatch failure"
        );
        assert_eq!(
            KinesisErr::NoShards("clicks".to_owned()).to_string(),
            "stream `clicks` has no shards"
        );
        let err: StreamErr<KinesisErr> =
            StreamErr::Backend(KinesisErr::PutRecord("timeout".to_owned()));
        assert_eq!(
            err.to_string(),
            "Backend error: failed to put record: timeout"
        );
    }
}
