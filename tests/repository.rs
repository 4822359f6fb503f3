use brewery_api::domain::beer::{NewBeer, UpdateBeer};
use brewery_api::domain::category::NewCategory;
use brewery_api::domain::customer::{NewCustomer, UpdateCustomer};
use brewery_api::domain::types::{
    BeerId, BeerName, BeerStyle, CategoryName, CustomerName, Price, Upc,
};
use brewery_api::pagination::{PageRequest, SortOrder, SortProperty};
use brewery_api::repository::errors::RepositoryError;
use brewery_api::repository::{
    BeerReader, BeerWriter, CategoryReader, CategoryWriter, CustomerReader, CustomerWriter,
};
use brewery_api::services::bootstrap;
use rust_decimal::Decimal;

mod common;

fn new_beer(name: &str, style: BeerStyle, upc: &str) -> NewBeer {
    NewBeer::new(
        BeerName::new(name).unwrap(),
        style,
        Upc::new(upc).unwrap(),
        Some(10),
        Price::new(Decimal::new(999, 2)).unwrap(),
    )
}

fn by_name(page: usize, size: usize) -> PageRequest {
    PageRequest::new(page, size, vec![SortOrder::asc(SortProperty::Name)])
}

fn names(beers: &[brewery_api::domain::beer::Beer]) -> Vec<&str> {
    beers.iter().map(|b| b.name.as_str()).collect()
}

#[test]
fn test_beer_repository_crud() {
    let test_db = common::TestDb::new("test_beer_repository_crud.db");
    let repo = test_db.repo();

    let created = repo
        .create_beer(&new_beer("Galaxy Cat", BeerStyle::PaleAle, "12356"))
        .unwrap();
    assert_eq!(created.version, 0);
    assert_eq!(created.quantity_on_hand, Some(10));
    assert_eq!(created.price.get(), Decimal::new(999, 2));

    let fetched = repo.get_beer_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let updates = UpdateBeer {
        name: BeerName::new("Galaxy Dog").unwrap(),
        style: BeerStyle::Ipa,
        upc: created.upc.clone(),
        quantity_on_hand: None,
        price: Price::new(Decimal::new(1050, 2)).unwrap(),
    };
    let updated = repo.update_beer(created.id, 0, &updates).unwrap();
    assert_eq!(updated.version, 1);
    assert_eq!(updated.name.as_str(), "Galaxy Dog");
    assert_eq!(updated.quantity_on_hand, None);
    assert_eq!(updated.created_at, created.created_at);

    assert!(repo.delete_beer(created.id).unwrap());
    assert!(repo.get_beer_by_id(created.id).unwrap().is_none());
    assert!(!repo.delete_beer(created.id).unwrap());
}

#[test]
fn test_stale_version_is_rejected() {
    let test_db = common::TestDb::new("test_stale_version_is_rejected.db");
    let repo = test_db.repo();

    let beer = repo
        .create_beer(&new_beer("Crank", BeerStyle::PaleAle, "12356222"))
        .unwrap();
    let updates = UpdateBeer {
        name: BeerName::new("Crank 2").unwrap(),
        style: beer.style,
        upc: beer.upc.clone(),
        quantity_on_hand: beer.quantity_on_hand,
        price: beer.price,
    };

    repo.update_beer(beer.id, 0, &updates).unwrap();
    let stale = repo.update_beer(beer.id, 0, &updates);
    assert!(matches!(stale, Err(RepositoryError::Conflict(_))));

    let stored = repo.get_beer_by_id(beer.id).unwrap().unwrap();
    assert_eq!(stored.version, 1);

    let missing = repo.update_beer(BeerId::new(), 0, &updates);
    assert!(matches!(missing, Err(RepositoryError::NotFound)));
}

#[test]
fn test_duplicate_upc_is_a_constraint_violation() {
    let test_db = common::TestDb::new("test_duplicate_upc_is_a_constraint_violation.db");
    let repo = test_db.repo();

    repo.create_beer(&new_beer("One", BeerStyle::Ale, "111"))
        .unwrap();
    let duplicate = repo.create_beer(&new_beer("Two", BeerStyle::Ale, "111"));

    assert!(matches!(
        duplicate,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn test_beer_filters_and_sorting() {
    let test_db = common::TestDb::new("test_beer_filters_and_sorting.db");
    let repo = test_db.repo();

    repo.create_beer(&new_beer("Sunshine City", BeerStyle::Ipa, "1"))
        .unwrap();
    repo.create_beer(&new_beer("Hazy IPA", BeerStyle::Ipa, "2"))
        .unwrap();
    repo.create_beer(&new_beer("Galaxy Cat", BeerStyle::PaleAle, "3"))
        .unwrap();
    repo.create_beer(&new_beer("West Coast ipa", BeerStyle::PaleAle, "4"))
        .unwrap();
    repo.create_beer(&new_beer("100% Stout", BeerStyle::Stout, "5"))
        .unwrap();

    let all = repo.list_all_beers(&by_name(0, 25)).unwrap();
    assert_eq!(all.total_elements, 5);
    assert_eq!(
        names(&all.content),
        vec![
            "100% Stout",
            "Galaxy Cat",
            "Hazy IPA",
            "Sunshine City",
            "West Coast ipa"
        ]
    );

    let by_fragment = repo.list_beers_by_name("IpA", &by_name(0, 25)).unwrap();
    assert_eq!(names(&by_fragment.content), vec!["Hazy IPA", "West Coast ipa"]);

    let by_style = repo
        .list_beers_by_style(BeerStyle::Ipa, &by_name(0, 25))
        .unwrap();
    assert_eq!(names(&by_style.content), vec!["Hazy IPA", "Sunshine City"]);

    let both = repo
        .list_beers_by_name_and_style("ipa", BeerStyle::PaleAle, &by_name(0, 25))
        .unwrap();
    assert_eq!(names(&both.content), vec!["West Coast ipa"]);
    assert_eq!(both.total_elements, 1);

    let literal_percent = repo.list_beers_by_name("0%", &by_name(0, 25)).unwrap();
    assert_eq!(names(&literal_percent.content), vec!["100% Stout"]);

    let underscore = repo.list_beers_by_name("_", &by_name(0, 25)).unwrap();
    assert!(underscore.content.is_empty());
}

#[test]
fn test_beer_name_filter_folds_non_ascii_case() {
    let test_db = common::TestDb::new("test_beer_name_filter_folds_non_ascii_case.db");
    let repo = test_db.repo();

    repo.create_beer(&new_beer("ÄPFEL ALE", BeerStyle::Ale, "1"))
        .unwrap();
    repo.create_beer(&new_beer("Zebra", BeerStyle::Lager, "2"))
        .unwrap();
    repo.create_beer(&new_beer("apple", BeerStyle::Ale, "3"))
        .unwrap();

    for fragment in ["äpfel", "ÄPFEL", "Äpfel Ale"] {
        let found = repo.list_beers_by_name(fragment, &by_name(0, 25)).unwrap();
        assert_eq!(names(&found.content), vec!["ÄPFEL ALE"], "{fragment}");
    }

    let all = repo.list_all_beers(&by_name(0, 25)).unwrap();
    assert_eq!(names(&all.content), vec!["apple", "Zebra", "ÄPFEL ALE"]);
}

#[test]
fn test_renamed_beer_is_found_by_new_name() {
    let test_db = common::TestDb::new("test_renamed_beer_is_found_by_new_name.db");
    let repo = test_db.repo();

    let beer = repo
        .create_beer(&new_beer("Crank", BeerStyle::PaleAle, "1"))
        .unwrap();
    let updates = UpdateBeer {
        name: BeerName::new("Öl Nummer Eins").unwrap(),
        style: beer.style,
        upc: beer.upc.clone(),
        quantity_on_hand: beer.quantity_on_hand,
        price: beer.price,
    };
    repo.update_beer(beer.id, beer.version, &updates).unwrap();

    let found = repo.list_beers_by_name("öl", &by_name(0, 25)).unwrap();
    assert_eq!(names(&found.content), vec!["Öl Nummer Eins"]);
    assert!(
        repo.list_beers_by_name("crank", &by_name(0, 25))
            .unwrap()
            .content
            .is_empty()
    );
}

#[test]
fn test_max_expected_version_is_a_conflict() {
    let test_db = common::TestDb::new("test_max_expected_version_is_a_conflict.db");
    let repo = test_db.repo();

    let beer = repo
        .create_beer(&new_beer("Crank", BeerStyle::PaleAle, "1"))
        .unwrap();
    let updates = UpdateBeer {
        name: BeerName::new("Crank 2").unwrap(),
        style: beer.style,
        upc: beer.upc.clone(),
        quantity_on_hand: beer.quantity_on_hand,
        price: beer.price,
    };
    assert!(matches!(
        repo.update_beer(beer.id, i32::MAX, &updates),
        Err(RepositoryError::Conflict(_))
    ));
    let stored = repo.get_beer_by_id(beer.id).unwrap().unwrap();
    assert_eq!(stored, beer);

    let customer = repo
        .create_customer(&NewCustomer::new(CustomerName::new("Bob").unwrap()))
        .unwrap();
    let rename = UpdateCustomer {
        name: CustomerName::new("Bobby").unwrap(),
    };
    assert!(matches!(
        repo.update_customer(customer.id, i32::MAX, &rename),
        Err(RepositoryError::Conflict(_))
    ));
    assert_eq!(
        repo.get_customer_by_id(customer.id).unwrap().unwrap(),
        customer
    );
}

#[test]
fn test_beer_pagination() {
    let test_db = common::TestDb::new("test_beer_pagination.db");
    let repo = test_db.repo();

    for i in 0..7 {
        repo.create_beer(&new_beer(&format!("Beer {i}"), BeerStyle::Lager, &i.to_string()))
            .unwrap();
    }

    let second = repo.list_all_beers(&by_name(1, 3)).unwrap();
    assert_eq!(second.total_elements, 7);
    assert_eq!(second.total_pages, 3);
    assert_eq!(second.number, 1);
    assert_eq!(names(&second.content), vec!["Beer 3", "Beer 4", "Beer 5"]);

    let beyond = repo.list_all_beers(&by_name(5, 3)).unwrap();
    assert!(beyond.content.is_empty());
    assert_eq!(beyond.total_elements, 7);
}

#[test]
fn test_customer_repository_crud() {
    let test_db = common::TestDb::new("test_customer_repository_crud.db");
    let repo = test_db.repo();

    let bob = repo
        .create_customer(&NewCustomer::new(CustomerName::new("Bob").unwrap()))
        .unwrap();
    repo.create_customer(&NewCustomer::new(CustomerName::new("Alice").unwrap()))
        .unwrap();
    repo.create_customer(&NewCustomer::new(CustomerName::new("bart").unwrap()))
        .unwrap();
    assert_eq!(repo.count_customers().unwrap(), 3);

    let listed: Vec<_> = repo
        .list_customers()
        .unwrap()
        .into_iter()
        .map(|c| c.name.into_inner())
        .collect();
    assert_eq!(listed, vec!["Alice", "bart", "Bob"]);

    let updates = UpdateCustomer {
        name: CustomerName::new("Bobby").unwrap(),
    };
    let updated = repo.update_customer(bob.id, bob.version, &updates).unwrap();
    assert_eq!(updated.name.as_str(), "Bobby");
    assert_eq!(updated.version, bob.version + 1);

    assert!(matches!(
        repo.update_customer(bob.id, bob.version, &updates),
        Err(RepositoryError::Conflict(_))
    ));

    assert!(repo.delete_customer(bob.id).unwrap());
    assert!(repo.get_customer_by_id(bob.id).unwrap().is_none());
}

#[test]
fn test_category_links() {
    let test_db = common::TestDb::new("test_category_links.db");
    let repo = test_db.repo();

    let crank = repo
        .create_beer(&new_beer("Crank", BeerStyle::PaleAle, "1"))
        .unwrap();
    let cat = repo
        .create_beer(&new_beer("Galaxy Cat", BeerStyle::PaleAle, "2"))
        .unwrap();
    let hoppy = repo
        .create_category(&NewCategory::new(CategoryName::new("Hoppy").unwrap()))
        .unwrap();
    let seasonal = repo
        .create_category(&NewCategory::new(CategoryName::new("Seasonal").unwrap()))
        .unwrap();

    repo.add_beer_category(crank.id, hoppy.id).unwrap();
    repo.add_beer_category(crank.id, hoppy.id).unwrap();
    repo.add_beer_category(crank.id, seasonal.id).unwrap();
    repo.add_beer_category(cat.id, hoppy.id).unwrap();

    let crank_categories: Vec<_> = repo
        .list_beer_categories(crank.id)
        .unwrap()
        .into_iter()
        .map(|c| c.name.into_inner())
        .collect();
    assert_eq!(crank_categories, vec!["Hoppy", "Seasonal"]);

    let hoppy_beers = repo.list_category_beers(hoppy.id).unwrap();
    assert_eq!(names(&hoppy_beers), vec!["Crank", "Galaxy Cat"]);

    assert!(repo.remove_beer_category(crank.id, hoppy.id).unwrap());
    assert!(!repo.remove_beer_category(crank.id, hoppy.id).unwrap());
    assert_eq!(names(&repo.list_category_beers(hoppy.id).unwrap()), vec!["Galaxy Cat"]);
    assert_eq!(repo.list_beer_categories(crank.id).unwrap().len(), 1);

    assert!(repo.delete_beer(cat.id).unwrap());
    assert!(repo.list_category_beers(hoppy.id).unwrap().is_empty());

    assert!(repo.delete_category(seasonal.id).unwrap());
    assert!(repo.list_beer_categories(crank.id).unwrap().is_empty());

    let duplicate = repo.create_category(&NewCategory::new(CategoryName::new("Hoppy").unwrap()));
    assert!(matches!(
        duplicate,
        Err(RepositoryError::ConstraintViolation(_))
    ));
}

#[test]
fn test_seeding_is_idempotent() {
    let test_db = common::TestDb::new("test_seeding_is_idempotent.db");
    let repo = test_db.repo();

    assert_eq!(bootstrap::seed(&repo).unwrap(), (3, 3));
    assert_eq!(bootstrap::seed(&repo).unwrap(), (0, 0));

    assert_eq!(repo.count_beers().unwrap(), 3);
    assert_eq!(repo.count_customers().unwrap(), 3);
}
