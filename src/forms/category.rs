use serde::Deserialize;
use validator::Validate;

use crate::domain::category::NewCategory;
use crate::domain::types::CategoryName;
use crate::forms::{FormError, not_blank};

/// Body of `POST /api/v1/category`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(required, length(min = 1, max = 50), custom(function = "not_blank"))]
    pub name: Option<String>,
}

impl TryFrom<CategoryForm> for NewCategory {
    type Error = FormError;

    fn try_from(form: CategoryForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = form.name.ok_or(FormError::Missing("name"))?;
        let name = CategoryName::new(name).map_err(FormError::field("name"))?;

        Ok(NewCategory::new(name))
    }
}
