//! Request metrics middleware.

use crate::{config::MetricsConfig, services::AppMetrics, utils::http::route_label};
use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    time::Instant,
};

/// Counts requests and observes latency per route pattern.
///
/// Needs [`AppMetrics`] as app data; does nothing when it is missing or
/// when [`MetricsConfig::enabled`] is false.
pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsService { service }))
    }
}

pub struct MetricsService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MetricsService<S>
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
        let started = Instant::now();
        let method = req.method().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let request = res.request();

            let enabled = request
                .app_data::<web::Data<MetricsConfig>>()
                .is_none_or(|config| config.enabled);
            if let (true, Some(metrics)) = (enabled, request.app_data::<web::Data<AppMetrics>>()) {
                // Routing has happened by now, so the pattern is known.
                let route = route_label(request);
                metrics.record_request(&method, &route, res.status().as_u16(), started.elapsed());
                metrics.update_uptime();
            }

            Ok(res)
        })
    }
}
