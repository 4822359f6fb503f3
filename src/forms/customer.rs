use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, PatchCustomer, UpdateCustomer};
use crate::domain::types::CustomerName;
use crate::forms::{FormError, not_blank, present};

/// Complete customer state sent with `POST` and `PUT`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    pub version: Option<i32>,
    #[validate(required, length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: Option<String>,
}

#[derive(Debug)]
pub struct CustomerPayload {
    pub version: Option<i32>,
    pub name: CustomerName,
}

impl TryFrom<CustomerForm> for CustomerPayload {
    type Error = FormError;

    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = form.name.ok_or(FormError::Missing("name"))?;

        Ok(Self {
            version: form.version,
            name: CustomerName::new(name).map_err(FormError::field("name"))?,
        })
    }
}

impl CustomerPayload {
    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer::new(self.name)
    }

    pub fn into_update(self) -> UpdateCustomer {
        UpdateCustomer { name: self.name }
    }
}

/// Partial customer changes sent with `PATCH`.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatchForm {
    pub version: Option<i32>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
}

#[derive(Debug)]
pub struct CustomerPatchPayload {
    pub version: Option<i32>,
    pub patch: PatchCustomer,
}

impl TryFrom<CustomerPatchForm> for CustomerPatchPayload {
    type Error = FormError;

    fn try_from(form: CustomerPatchForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = present(form.name)
            .map(CustomerName::new)
            .transpose()
            .map_err(FormError::field("name"))?;

        Ok(Self {
            version: form.version,
            patch: PatchCustomer { name },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_form_requires_name() {
        assert!(matches!(
            CustomerPayload::try_from(CustomerForm::default()),
            Err(FormError::Validation(_))
        ));

        let payload = CustomerPayload::try_from(CustomerForm {
            version: Some(2),
            name: Some(" Customer 1 ".into()),
        })
        .unwrap();
        assert_eq!(payload.version, Some(2));
        assert_eq!(payload.name.as_str(), "Customer 1");
    }

    #[test]
    fn blank_patch_name_keeps_stored_value() {
        let payload = CustomerPatchPayload::try_from(CustomerPatchForm {
            version: None,
            name: Some("  ".into()),
        })
        .unwrap();
        assert_eq!(payload.patch.name, None);
    }
}
