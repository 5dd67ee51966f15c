//! DTOs de la API
//!
//! Requests, responses y el envelope uniforme de la API.

pub mod auth_dto;
pub mod company_dto;
pub mod dashboard_dto;
pub mod response;
pub mod review_dto;
