mod get_by_id;
mod service;

pub use get_by_id::GetProfileByIdQuery;
pub use service::ProfileQueryService;
