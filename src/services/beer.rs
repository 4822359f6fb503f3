//! Beer catalogue operations, including the listing query resolver.

use crate::domain::types::{BeerId, BeerStyle};
use crate::dto::beer::{BeerDto, BeerListQuery};
use crate::forms::beer::{BeerForm, BeerPatchForm, BeerPatchPayload, BeerPayload};
use crate::pagination::{Page, PageRequest, SortOrder, SortProperty};
use crate::repository::{BeerReader, BeerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Which of the four listing shapes a request resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BeerFilter {
    All,
    ByName(String),
    ByStyle(BeerStyle),
    ByNameAndStyle(String, BeerStyle),
}

impl BeerFilter {
    /// Picks the filter from the optional criteria; a name without any
    /// non-whitespace character counts as absent.
    pub fn resolve(name: Option<&str>, style: Option<BeerStyle>) -> Self {
        let name = name.filter(|name| !name.trim().is_empty());
        match (name, style) {
            (Some(name), Some(style)) => BeerFilter::ByNameAndStyle(name.to_string(), style),
            (Some(name), None) => BeerFilter::ByName(name.to_string()),
            (None, Some(style)) => BeerFilter::ByStyle(style),
            (None, None) => BeerFilter::All,
        }
    }
}

/// Page request for a beer listing, always ordered by name.
pub fn build_page_request(page_number: Option<i64>, page_size: Option<i64>) -> PageRequest {
    PageRequest::from_params(
        page_number,
        page_size,
        vec![SortOrder::asc(SortProperty::Name)],
    )
}

/// Lists one page of beers matching the query.
pub fn list_beers<R>(repo: &R, query: BeerListQuery) -> ServiceResult<Page<BeerDto>>
where
    R: BeerReader + ?Sized,
{
    let page = build_page_request(query.page_number, query.page_size);
    let filter = BeerFilter::resolve(query.beer_name.as_deref(), query.beer_style);

    let mut beers = match &filter {
        BeerFilter::All => repo.list_all_beers(&page),
        BeerFilter::ByName(name) => repo.list_beers_by_name(name, &page),
        BeerFilter::ByStyle(style) => repo.list_beers_by_style(*style, &page),
        BeerFilter::ByNameAndStyle(name, style) => {
            repo.list_beers_by_name_and_style(name, *style, &page)
        }
    }
    .map_err(|err| {
        log::error!("Failed to list beers ({filter:?}): {err}");
        err
    })?;

    if query.show_inventory == Some(false) {
        beers.iter_mut().for_each(|beer| beer.redact_inventory());
    }

    Ok(beers.map(BeerDto::from))
}

pub fn get_beer<R>(repo: &R, id: BeerId) -> ServiceResult<BeerDto>
where
    R: BeerReader + ?Sized,
{
    repo.get_beer_by_id(id)?
        .map(BeerDto::from)
        .ok_or(ServiceError::NotFound)
}

/// Validates the form and stores a new beer.
pub fn create_beer<R>(repo: &R, form: BeerForm) -> ServiceResult<BeerDto>
where
    R: BeerWriter + ?Sized,
{
    let payload = BeerPayload::try_from(form)?;

    let beer = repo.create_beer(&payload.into_new_beer()).map_err(|err| {
        log::error!("Failed to create beer: {err}");
        err
    })?;

    Ok(BeerDto::from(beer))
}

/// Replaces every mutable field of the beer.
pub fn update_beer<R>(repo: &R, id: BeerId, form: BeerForm) -> ServiceResult<BeerDto>
where
    R: BeerReader + BeerWriter + ?Sized,
{
    let payload = BeerPayload::try_from(form)?;

    let current = repo.get_beer_by_id(id)?.ok_or(ServiceError::NotFound)?;
    let expected_version = payload.version.unwrap_or(current.version);

    let beer = repo.update_beer(id, expected_version, &payload.into_update())?;

    Ok(BeerDto::from(beer))
}

/// Overwrites only the fields present in the form.
pub fn patch_beer<R>(repo: &R, id: BeerId, form: BeerPatchForm) -> ServiceResult<BeerDto>
where
    R: BeerReader + BeerWriter + ?Sized,
{
    let payload = BeerPatchPayload::try_from(form)?;

    let current = repo.get_beer_by_id(id)?.ok_or(ServiceError::NotFound)?;
    let expected_version = payload.version.unwrap_or(current.version);
    let updates = payload.patch.apply_to(&current);

    let beer = repo.update_beer(id, expected_version, &updates)?;

    Ok(BeerDto::from(beer))
}

pub fn delete_beer<R>(repo: &R, id: BeerId) -> ServiceResult<()>
where
    R: BeerWriter + ?Sized,
{
    if repo.delete_beer(id)? {
        Ok(())
    } else {
        Err(ServiceError::NotFound)
    }
}
