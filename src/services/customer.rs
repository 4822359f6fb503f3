//! Customer operations.

use crate::domain::types::CustomerId;
use crate::dto::customer::CustomerDto;
use crate::forms::customer::{
    CustomerForm, CustomerPatchForm, CustomerPatchPayload, CustomerPayload,
};
use crate::repository::{CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Returns every customer ordered by name.
pub fn list_customers<R>(repo: &R) -> ServiceResult<Vec<CustomerDto>>
where
    R: CustomerReader + ?Sized,
{
    let customers = repo.list_customers().map_err(|err| {
        log::error!("Failed to list customers: {err}");
        err
    })?;

    Ok(customers.into_iter().map(CustomerDto::from).collect())
}

pub fn get_customer<R>(repo: &R, id: CustomerId) -> ServiceResult<CustomerDto>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(id)?
        .map(CustomerDto::from)
        .ok_or(ServiceError::NotFound)
}

pub fn create_customer<R>(repo: &R, form: CustomerForm) -> ServiceResult<CustomerDto>
where
    R: CustomerWriter + ?Sized,
{
    let payload = CustomerPayload::try_from(form)?;

    let customer = repo
        .create_customer(&payload.into_new_customer())
        .map_err(|err| {
            log::error!("Failed to create customer: {err}");
            err
        })?;

    Ok(CustomerDto::from(customer))
}

pub fn update_customer<R>(repo: &R, id: CustomerId, form: CustomerForm) -> ServiceResult<CustomerDto>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let payload = CustomerPayload::try_from(form)?;

    let current = repo.get_customer_by_id(id)?.ok_or(ServiceError::NotFound)?;
    let expected_version = payload.version.unwrap_or(current.version);

    let customer = repo.update_customer(id, expected_version, &payload.into_update())?;

    Ok(CustomerDto::from(customer))
}

pub fn patch_customer<R>(
    repo: &R,
    id: CustomerId,
    form: CustomerPatchForm,
) -> ServiceResult<CustomerDto>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let payload = CustomerPatchPayload::try_from(form)?;

    let current = repo.get_customer_by_id(id)?.ok_or(ServiceError::NotFound)?;
    let expected_version = payload.version.unwrap_or(current.version);
    let updates = payload.patch.apply_to(&current);

    let customer = repo.update_customer(id, expected_version, &updates)?;

    Ok(CustomerDto::from(customer))
}

pub fn delete_customer<R>(repo: &R, id: CustomerId) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    if repo.delete_customer(id)? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}
