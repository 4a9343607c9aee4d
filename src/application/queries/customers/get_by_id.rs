use super::CustomerQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CustomerDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::customer::CustomerId,
};

pub struct GetCustomerByIdQuery {
    pub id: i64,
}

impl CustomerQueryService {
    pub async fn get_customer_by_id(
        &self,
        actor: &AuthenticatedUser,
        query: GetCustomerByIdQuery,
    ) -> ApplicationResult<CustomerDto> {
        let id = CustomerId::new(query.id)?;

        // Self-service callers only ever see their own record; any other id
        // reads as absent so the record's existence is not disclosed. The
        // check runs before the repository is touched.
        if actor.role.is_customer() && !actor.owns_customer_record(id) {
            return Err(ApplicationError::not_found("customer not found"));
        }

        let customer = self
            .customer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("customer not found"))?;
        Ok(customer.into())
    }
}
