//! Controladores de la aplicación
//!
//! La lógica de decisión por dominio: validar entrada, consultar el
//! Record Store y mapear a errores tipados.

pub mod auth_controller;
pub mod company_controller;
pub mod dashboard_controller;
pub mod promotion_controller;
pub mod review_controller;
