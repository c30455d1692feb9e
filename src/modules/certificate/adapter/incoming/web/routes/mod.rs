mod create_certificate;
mod delete_certificate;
mod get_certificates;
mod get_single_certificate;
mod update_certificate;

pub use create_certificate::create_certificate_handler;
pub use delete_certificate::delete_certificate_handler;
pub use get_certificates::get_certificates_handler;
pub use get_single_certificate::get_single_certificate_handler;
pub use update_certificate::update_certificate_handler;
