//! Sample data inserted into an empty database on startup.

use rust_decimal::Decimal;

use crate::domain::beer::NewBeer;
use crate::domain::customer::NewCustomer;
use crate::domain::types::{BeerName, BeerStyle, CustomerName, Price, Upc};
use crate::repository::{BeerReader, BeerWriter, CustomerReader, CustomerWriter};
use crate::services::ServiceResult;

fn sample_beers() -> ServiceResult<Vec<NewBeer>> {
    let rows = [
        ("Galaxy Cat", BeerStyle::PaleAle, "12356", 122, Decimal::new(1299, 2)),
        ("Crank", BeerStyle::PaleAle, "12356222", 392, Decimal::new(1199, 2)),
        ("Sunshine City", BeerStyle::Ipa, "12356223", 144, Decimal::new(1399, 2)),
    ];

    rows.into_iter()
        .map(|(name, style, upc, quantity, price)| -> ServiceResult<NewBeer> {
            Ok(NewBeer::new(
                BeerName::new(name)?,
                style,
                Upc::new(upc)?,
                Some(quantity),
                Price::new(price)?,
            ))
        })
        .collect()
}

fn sample_customers() -> ServiceResult<Vec<NewCustomer>> {
    ["Customer 1", "Customer 2", "Customer 3"]
        .into_iter()
        .map(|name| -> ServiceResult<NewCustomer> { Ok(NewCustomer::new(CustomerName::new(name)?)) })
        .collect()
}

/// Seeds beers and customers into tables that are still empty.
///
/// Returns the number of beers and customers inserted.
pub fn seed<R>(repo: &R) -> ServiceResult<(usize, usize)>
where
    R: BeerReader + BeerWriter + CustomerReader + CustomerWriter + ?Sized,
{
    let mut beers = 0;
    if repo.count_beers()? == 0 {
        for beer in sample_beers()? {
            repo.create_beer(&beer)?;
            beers += 1;
        }
    }

    let mut customers = 0;
    if repo.count_customers()? == 0 {
        for customer in sample_customers()? {
            repo.create_customer(&customer)?;
            customers += 1;
        }
    }

    if beers + customers > 0 {
        log::info!("Seeded {beers} beers and {customers} customers");
    }

    Ok((beers, customers))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::beer::Beer;
    use crate::domain::types::BeerId;
    use crate::repository::mock::MockRepository;

    #[test]
    fn non_empty_tables_are_left_alone() {
        let mut repo = MockRepository::new();
        repo.expect_count_beers().returning(|| Ok(3));
        repo.expect_count_customers().returning(|| Ok(1));
        repo.expect_create_beer().never();
        repo.expect_create_customer().never();

        assert_eq!(seed(&repo).unwrap(), (0, 0));
    }

    #[test]
    fn empty_beer_table_gets_three_beers() {
        let mut repo = MockRepository::new();
        repo.expect_count_beers().returning(|| Ok(0));
        repo.expect_count_customers().returning(|| Ok(2));
        repo.expect_create_beer().times(3).returning(|new_beer| {
            let now = Utc::now().naive_utc();
            Ok(Beer {
                id: BeerId::new(),
                version: 0,
                name: new_beer.name.clone(),
                style: new_beer.style,
                upc: new_beer.upc.clone(),
                quantity_on_hand: new_beer.quantity_on_hand,
                price: new_beer.price,
                created_at: now,
                updated_at: now,
            })
        });

        assert_eq!(seed(&repo).unwrap(), (3, 0));
    }

    #[test]
    fn sample_upcs_are_distinct() {
        let beers = sample_beers().unwrap();
        let mut upcs: Vec<_> = beers.iter().map(|b| b.upc.as_str()).collect();
        upcs.dedup();
        assert_eq!(upcs.len(), 3);
    }
}
