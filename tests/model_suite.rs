//! Behaviour of the customer / restaurant / review model.
//!
//! Every test builds its own store, so no state leaks between tests.

use std::collections::HashSet;

use restaurant_reviews::{
    AttributeValue, Customer, CustomerId, ModelError, Restaurant, RestaurantId, ReviewId,
    ReviewStore,
};

struct World {
    store: ReviewStore,
    john_doe: CustomerId,
    jane_smith: CustomerId,
    java: RestaurantId,
    about_thyme: RestaurantId,
    john_review: ReviewId,
    jane_review: ReviewId,
}

fn setup() -> World {
    let mut store = ReviewStore::new();

    // Customers
    let john_doe = store.add_customer(Customer::new("John", "Doe")).unwrap();
    let jane_smith = store.add_customer(Customer::new("Jane", "Smith")).unwrap();

    // Restaurants
    let java = store.add_restaurant(Restaurant::new("Java")).unwrap();
    let about_thyme = store.add_restaurant(Restaurant::new("About Thyme")).unwrap();

    // Reviews
    let john_review = store.record_review(john_doe, java, 5).unwrap();
    let jane_review = store.record_review(jane_smith, about_thyme, 8).unwrap();

    World {
        store,
        john_doe,
        jane_smith,
        java,
        about_thyme,
        john_review,
        jane_review,
    }
}

mod customer {
    use super::*;

    #[test]
    fn init() {
        let w = setup();
        let john = w.store.customer(w.john_doe).unwrap();
        let jane = w.store.customer(w.jane_smith).unwrap();

        assert_eq!(john.given_name(), "John");
        assert_eq!(john.family_name(), "Doe");
        assert_eq!(jane.given_name(), "Jane");
        assert_eq!(jane.family_name(), "Smith");
    }

    #[test]
    fn given_name_change() {
        let mut w = setup();
        w.store.customer_mut(w.john_doe).unwrap().set_given_name("Joe");
        w.store
            .customer_mut(w.jane_smith)
            .unwrap()
            .set_attribute("given_name", "Sue".into())
            .unwrap();

        assert_eq!(w.store.customer(w.john_doe).unwrap().given_name(), "Joe");
        assert_eq!(w.store.customer(w.jane_smith).unwrap().given_name(), "Sue");
    }

    #[test]
    fn full_name() {
        let w = setup();
        for c in w.store.customers() {
            assert_eq!(c.full_name(), format!("{} {}", c.given_name(), c.family_name()));
        }
        assert_eq!(w.store.customer(w.john_doe).unwrap().full_name(), "John Doe");
        assert_eq!(w.store.customer(w.jane_smith).unwrap().full_name(), "Jane Smith");
    }

    #[test]
    fn all() {
        let w = setup();
        assert_eq!(w.store.customers().len(), 2);
    }

    #[test]
    fn restaurants_are_unique() {
        let mut w = setup();
        w.store.record_review(w.jane_smith, w.java, 7).unwrap();
        w.store.record_review(w.jane_smith, w.about_thyme, 10).unwrap();

        let restaurants = w.store.restaurants_for(w.jane_smith);
        let unique: HashSet<RestaurantId> = restaurants.iter().map(|r| r.id()).collect();
        assert_eq!(restaurants.len(), unique.len());
    }

    #[test]
    fn add_review() {
        let mut w = setup();
        let kilimanjaro = Restaurant::new("Kilimanjaro");
        let review = w.store.customer(w.john_doe).unwrap().review(&kilimanjaro, 2);
        let kilimanjaro = w.store.add_restaurant(kilimanjaro).unwrap();
        w.store.add_review(review).unwrap();

        assert!(w
            .store
            .restaurants_for(w.john_doe)
            .iter()
            .any(|r| r.id() == kilimanjaro));
    }

    #[test]
    fn num_reviews() {
        let w = setup();
        assert_eq!(w.store.num_reviews(w.john_doe), 1);
        assert_eq!(w.store.num_reviews(w.jane_smith), 1);
    }

    #[test]
    fn find_by_name() {
        let w = setup();
        assert_eq!(
            w.store.find_customer_by_name("John Doe").unwrap().full_name(),
            "John Doe"
        );
        assert!(w.store.find_customer_by_name("John Smith").is_none());
    }

    #[test]
    fn find_all_by_given_name() {
        let mut w = setup();
        w.store.add_customer(Customer::new("John", "Smith")).unwrap();
        assert_eq!(w.store.find_customers_by_given_name("John").len(), 2);
    }
}

mod restaurant {
    use super::*;

    #[test]
    fn init() {
        let w = setup();
        assert_eq!(w.store.restaurant(w.java).unwrap().name(), "Java");
        assert_eq!(w.store.restaurant(w.about_thyme).unwrap().name(), "About Thyme");
    }

    #[test]
    fn name_change() {
        let w = setup();
        let mut java = w.store.restaurant(w.java).unwrap().clone();
        let err = java.set_attribute("name", "New Java".into()).unwrap_err();

        assert!(matches!(err, ModelError::Immutable { .. }));
        assert_eq!(java.name(), "Java");
    }

    #[test]
    fn reviews() {
        let w = setup();
        assert_eq!(w.store.reviews_for(w.java).len(), 1);
    }

    #[test]
    fn customers_are_unique() {
        let mut w = setup();
        w.store.record_review(w.john_doe, w.java, 8).unwrap();

        let customers = w.store.customers_for(w.java);
        let unique: HashSet<CustomerId> = customers.iter().map(|c| c.id()).collect();
        assert_eq!(customers.len(), unique.len());
    }

    #[test]
    fn average_star_rating() {
        let mut w = setup();
        w.store.record_review(w.jane_smith, w.java, 10).unwrap();
        assert_eq!(w.store.average_star_rating(w.java).unwrap(), 7.5);
    }

    #[test]
    fn average_star_rating_without_reviews() {
        let mut w = setup();
        let empty = w.store.add_restaurant(Restaurant::new("Kilimanjaro")).unwrap();
        assert!(matches!(
            w.store.average_star_rating(empty),
            Err(ModelError::NoReviews(_))
        ));
    }
}

mod review {
    use super::*;

    #[test]
    fn init() {
        let w = setup();
        let john_review = w.store.review(w.john_review).unwrap();
        let jane_review = w.store.review(w.jane_review).unwrap();

        assert_eq!(w.store.restaurant(john_review.restaurant()).unwrap().name(), "Java");
        assert_eq!(
            w.store.restaurant(jane_review.restaurant()).unwrap().name(),
            "About Thyme"
        );
        assert_eq!(john_review.rating(), 5);
        assert_eq!(jane_review.rating(), 8);
    }

    #[test]
    fn all() {
        let w = setup();
        assert_eq!(w.store.reviews().len(), 2);
    }

    #[test]
    fn customer() {
        let w = setup();
        let john_review = w.store.review(w.john_review).unwrap();
        let jane_review = w.store.review(w.jane_review).unwrap();

        assert_eq!(w.store.customer(john_review.customer()).unwrap().full_name(), "John Doe");
        assert_eq!(w.store.customer(jane_review.customer()).unwrap().full_name(), "Jane Smith");
    }

    #[test]
    fn customer_change() {
        let mut w = setup();
        let any_other = w.store.add_customer(Customer::new("Any", "Other")).unwrap();
        let mut jane_review = w.store.review(w.jane_review).unwrap().clone();

        let err = jane_review
            .set_attribute("customer", AttributeValue::Reference(any_other.as_uuid()))
            .unwrap_err();

        assert!(matches!(err, ModelError::Immutable { .. }));
        assert_eq!(jane_review.customer(), w.jane_smith);
    }

    #[test]
    fn restaurant_change() {
        let w = setup();
        let mut john_review = w.store.review(w.john_review).unwrap().clone();

        let err = john_review
            .set_attribute("restaurant", AttributeValue::Reference(w.about_thyme.as_uuid()))
            .unwrap_err();

        assert!(matches!(err, ModelError::Immutable { .. }));
        assert_eq!(john_review.restaurant(), w.java);
    }
}
