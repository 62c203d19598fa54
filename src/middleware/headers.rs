//! Response headers middleware: CORS and content hardening.

use crate::config::ResponseHeadersConfig;
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{self, HeaderValue},
};
use std::{
    future::{Ready, ready},
    pin::Pin,
};

/// Response headers middleware factory
pub struct ResponseHeaders {
    config: ResponseHeadersConfig,
}

impl ResponseHeaders {
    pub fn new(config: ResponseHeadersConfig) -> Self {
        Self { config }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ResponseHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = ResponseHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ResponseHeadersMiddleware {
            service,
            config: self.config.clone(),
        }))
    }
}

pub struct ResponseHeadersMiddleware<S> {
    service: S,
    config: ResponseHeadersConfig,
}

impl<S, B> Service<ServiceRequest> for ResponseHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        let config = self.config.clone();

        Box::pin(async move {
            let mut res = fut.await?;
            let headers = res.headers_mut();

            if let Ok(value) = HeaderValue::from_str(&config.allow_origin) {
                headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
            }

            if config.content_type_options {
                headers.insert(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                );
            }

            if let Ok(value) = HeaderValue::from_str(&config.referrer_policy) {
                headers.insert(header::REFERRER_POLICY, value);
            }

            Ok(res)
        })
    }
}
