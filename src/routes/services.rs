use axum::response::IntoResponse;
use saiyana_contact::ServiceType;
use strum::VariantArray;

use crate::template;

#[derive(askama::Template)]
#[template(path = "services.html")]
pub struct ServicesTemplate {
    pub services: Vec<ServiceCard>,
}

pub struct ServiceCard {
    pub service: ServiceType,
    pub description: &'static str,
}

fn describe(service: ServiceType) -> &'static str {
    match service {
        ServiceType::Warehousing => {
            "Temperature-controlled storage with real-time inventory tracking"
        }
        ServiceType::Distribution => {
            "Route-optimized delivery across regional and national networks"
        }
        ServiceType::SupplyChain => "End-to-end supply chain planning and forecasting",
        ServiceType::Transportation => {
            "Dedicated fleet and carrier management for every load size"
        }
    }
}

pub async fn page() -> impl IntoResponse {
    let services = ServiceType::VARIANTS
        .iter()
        .map(|service| ServiceCard {
            service: *service,
            description: describe(*service),
        })
        .collect();

    template::render(ServicesTemplate { services })
}
