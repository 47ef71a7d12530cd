//! Retrying [`TagService`] decorator.
//!
//! Retries belong to the service layer: the reconciliation engine sends each
//! request once and reports whatever comes back. Wrapping the transport in
//! [`RetryingTagService`] bounds every call by the configured timeout and
//! repeats calls that failed with a transient error.
//!
//! Creates are the exception: after a timeout or a dropped connection the
//! service may already have stored the tag, and repeating the create would
//! come back as a conflict for a tag nobody recorded. They are only repeated
//! when the service said it was unavailable.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use cloudtag_tags::{
	CreateTagRequest, DeleteTagRequest, ModifyTagRequest, RemoteTag, ServiceError, ServiceResult,
	TagService,
};

use crate::config::RetryConfig;

/// [`TagService`] wrapper adding per-call timeouts and exponential backoff.
pub struct RetryingTagService<S> {
	inner: S,
	request_timeout: Duration,
	retry: RetryConfig,
}

impl<S: TagService> RetryingTagService<S> {
	pub fn new(inner: S, request_timeout: Duration, retry: RetryConfig) -> Self {
		Self {
			inner,
			request_timeout,
			retry,
		}
	}

	pub fn inner(&self) -> &S {
		&self.inner
	}

	/// Backoff before retry number `attempt` (0-indexed): doubles from
	/// `wait_min` and is clamped to `wait_max`.
	fn delay(&self, attempt: u32) -> Duration {
		let factor = 2u32.saturating_pow(attempt);
		self.retry
			.wait_min
			.saturating_mul(factor)
			.min(self.retry.wait_max)
	}

	async fn call<T, F, Fut>(
		&self,
		operation: &'static str,
		retryable: fn(&ServiceError) -> bool,
		mut request: F,
	) -> ServiceResult<T>
	where
		F: FnMut() -> Fut,
		Fut: Future<Output = ServiceResult<T>>,
	{
		let mut attempt = 0;
		loop {
			let result = match tokio::time::timeout(self.request_timeout, request()).await {
				Ok(result) => result,
				Err(_) => Err(ServiceError::Timeout(self.request_timeout)),
			};

			match result {
				Err(error) if retryable(&error) && attempt < self.retry.max_retries => {
					let delay = self.delay(attempt);
					attempt += 1;
					tracing::warn!(
						operation,
						attempt,
						max_retries = self.retry.max_retries,
						delay_ms = delay.as_millis() as u64,
						error = %error,
						"retrying tag service call after transient error"
					);
					tokio::time::sleep(delay).await;
				}
				other => return other,
			}
		}
	}
}

#[async_trait]
impl<S: TagService> TagService for RetryingTagService<S> {
	async fn create_tag(&self, request: CreateTagRequest) -> ServiceResult<RemoteTag> {
		self.call("create_tag", refused_before_processing, || {
			self.inner.create_tag(request.clone())
		})
		.await
	}

	async fn list_tags(&self) -> ServiceResult<Vec<RemoteTag>> {
		self.call("list_tags", ServiceError::is_transient, || self.inner.list_tags())
			.await
	}

	async fn modify_tag(&self, request: ModifyTagRequest) -> ServiceResult<RemoteTag> {
		self.call("modify_tag", ServiceError::is_transient, || {
			self.inner.modify_tag(request.clone())
		})
		.await
	}

	async fn delete_tag(&self, request: DeleteTagRequest) -> ServiceResult<()> {
		self.call("delete_tag", ServiceError::is_transient, || {
			self.inner.delete_tag(request.clone())
		})
		.await
	}
}

/// The service turned the request away without acting on it.
fn refused_before_processing(error: &ServiceError) -> bool {
	matches!(error, ServiceError::Unavailable(_))
}
