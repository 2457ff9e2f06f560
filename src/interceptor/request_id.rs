//! Request ID layer.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tower::{Layer, Service};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tower layer that assigns a request ID to requests that lack one.
#[derive(Clone, Copy, Default)]
pub struct RequestIdLayer;

impl RequestIdLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

#[derive(Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, ReqBody> Service<http::Request<ReqBody>> for RequestIdService<S>
where
    S: Service<http::Request<ReqBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: http::Request<ReqBody>) -> Self::Future {
        if req.headers().get(REQUEST_ID_HEADER).is_none() {
            let request_id = Uuid::new_v4().to_string();
            req.headers_mut().insert(
                REQUEST_ID_HEADER,
                request_id.parse().expect("UUID is valid header value"),
            );
        }

        // Swap the ready service out; the clone waits for readiness again.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move { inner.call(req).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Request as HttpRequest;
    use std::convert::Infallible;
    use tower::ServiceExt;

    // Echoes the request ID it saw back as the response body.
    #[derive(Clone)]
    struct MockService;

    impl<B> Service<HttpRequest<B>> for MockService {
        type Response = http::Response<String>;
        type Error = Infallible;
        type Future = std::future::Ready<Result<Self::Response, Self::Error>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, req: HttpRequest<B>) -> Self::Future {
            let request_id = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .map(|v| v.to_str().unwrap_or("-"))
                .unwrap_or("-")
                .to_string();

            std::future::ready(Ok(http::Response::new(request_id)))
        }
    }

    #[tokio::test]
    async fn assigns_request_id_when_missing() {
        let service = RequestIdLayer::new().layer(MockService);

        let req = HttpRequest::builder().uri("/test").body(()).unwrap();
        let body = service.oneshot(req).await.unwrap().into_body();

        assert!(Uuid::parse_str(&body).is_ok(), "expected UUID, got: {}", body);
    }

    #[tokio::test]
    async fn preserves_existing_request_id() {
        let service = RequestIdLayer::new().layer(MockService);

        let req = HttpRequest::builder()
            .uri("/test")
            .header(REQUEST_ID_HEADER, "caller-supplied-id")
            .body(())
            .unwrap();
        let body = service.oneshot(req).await.unwrap().into_body();

        assert_eq!(body, "caller-supplied-id");
    }
}
