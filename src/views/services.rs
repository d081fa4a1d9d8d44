//! Services page view. Static content only, so nothing is scheduled.

use crate::models::ServiceOffering;
use crate::site::pages;

#[derive(Debug, Default)]
pub struct ServicesView;

impl ServicesView {
    pub fn mount() -> Self {
        Self
    }

    pub fn offerings(&self) -> Vec<ServiceOffering> {
        pages::service_offerings()
    }
}
