//! Category operations and beer/category linking.

use crate::domain::category::NewCategory;
use crate::domain::types::{BeerId, CategoryId};
use crate::dto::beer::BeerDto;
use crate::dto::category::CategoryDto;
use crate::forms::category::CategoryForm;
use crate::repository::{BeerReader, CategoryReader, CategoryWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader + ?Sized,
{
    let categories = repo.list_categories()?;
    Ok(categories.into_iter().map(CategoryDto::from).collect())
}

pub fn get_category<R>(repo: &R, id: CategoryId) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(id)?
        .map(CategoryDto::from)
        .ok_or(ServiceError::NotFound)
}

/// Creates a category; a taken name surfaces as a conflict.
pub fn create_category<R>(repo: &R, form: CategoryForm) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter + ?Sized,
{
    let new_category = NewCategory::try_from(form)?;

    let category = repo.create_category(&new_category).map_err(|err| {
        log::error!("Failed to create category: {err}");
        err
    })?;

    Ok(CategoryDto::from(category))
}

pub fn delete_category<R>(repo: &R, id: CategoryId) -> ServiceResult<()>
where
    R: CategoryWriter + ?Sized,
{
    if repo.delete_category(id)? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}

fn ensure_both_exist<R>(repo: &R, beer_id: BeerId, category_id: CategoryId) -> ServiceResult<()>
where
    R: BeerReader + CategoryReader + ?Sized,
{
    repo.get_beer_by_id(beer_id)?.ok_or(ServiceError::NotFound)?;
    repo.get_category_by_id(category_id)?
        .ok_or(ServiceError::NotFound)?;
    Ok(())
}

/// Categories the beer is linked to.
pub fn list_beer_categories<R>(repo: &R, beer_id: BeerId) -> ServiceResult<Vec<CategoryDto>>
where
    R: BeerReader + CategoryReader + ?Sized,
{
    repo.get_beer_by_id(beer_id)?.ok_or(ServiceError::NotFound)?;

    let categories = repo.list_beer_categories(beer_id)?;
    Ok(categories.into_iter().map(CategoryDto::from).collect())
}

/// Beers linked to the category, ordered by name.
pub fn list_category_beers<R>(repo: &R, category_id: CategoryId) -> ServiceResult<Vec<BeerDto>>
where
    R: CategoryReader + ?Sized,
{
    repo.get_category_by_id(category_id)?
        .ok_or(ServiceError::NotFound)?;

    let beers = repo.list_category_beers(category_id)?;
    Ok(beers.into_iter().map(BeerDto::from).collect())
}

/// Links the beer to the category. Linking twice is a no-op.
pub fn add_beer_category<R>(repo: &R, beer_id: BeerId, category_id: CategoryId) -> ServiceResult<()>
where
    R: BeerReader + CategoryReader + CategoryWriter + ?Sized,
{
    ensure_both_exist(repo, beer_id, category_id)?;
    repo.add_beer_category(beer_id, category_id)?;
    Ok(())
}

/// Unlinks the beer from the category; unlinking an absent link succeeds.
pub fn remove_beer_category<R>(
    repo: &R,
    beer_id: BeerId,
    category_id: CategoryId,
) -> ServiceResult<()>
where
    R: BeerReader + CategoryReader + CategoryWriter + ?Sized,
{
    ensure_both_exist(repo, beer_id, category_id)?;
    if !repo.remove_beer_category(beer_id, category_id)? {
        log::debug!("Beer {beer_id} was not linked to category {category_id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::CategoryName;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn category(name: &str) -> Category {
        let now = Utc::now().naive_utc();
        Category {
            id: CategoryId::new(),
            version: 0,
            name: CategoryName::new(name).unwrap(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn linking_unknown_beer_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_beer_by_id().returning(|_| Ok(None));
        repo.expect_add_beer_category().never();

        let result = add_beer_category(&repo, BeerId::new(), CategoryId::new());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn listing_beers_of_unknown_category_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_category_by_id().returning(|_| Ok(None));
        repo.expect_list_category_beers().never();

        assert!(matches!(
            list_category_beers(&repo, CategoryId::new()),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn duplicate_name_is_a_conflict() {
        let mut repo = MockRepository::new();
        repo.expect_create_category().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "Unique constraint violation: categories.name".into(),
            ))
        });

        let result = create_category(
            &repo,
            CategoryForm {
                name: Some("Seasonal".into()),
            },
        );

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn list_maps_to_dtos() {
        let mut repo = MockRepository::new();
        repo.expect_list_categories()
            .returning(|| Ok(vec![category("Hoppy"), category("Seasonal")]));

        let names: Vec<_> = list_categories(&repo)
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();

        assert_eq!(names, vec!["Hoppy", "Seasonal"]);
    }
}
