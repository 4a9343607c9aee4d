mod get_by_id;
mod service;

pub use get_by_id::GetCustomerByIdQuery;
pub use service::CustomerQueryService;
