// 📋 Text report over a store snapshot

use std::fmt;

use crate::store::StoreSnapshot;

/// Restaurants then customers, one block each
pub struct Report<'a>(pub &'a StoreSnapshot);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;

        writeln!(f, "Restaurants ({})", snapshot.restaurants.len())?;
        for r in &snapshot.restaurants {
            let average = match r.average_star_rating {
                Some(avg) => format!("{:.2}", avg),
                None => "no reviews".to_string(),
            };
            writeln!(
                f,
                "  {:<24} reviews: {:<3} average: {}",
                r.name, r.num_reviews, average
            )?;
            if !r.customers.is_empty() {
                writeln!(f, "    customers: {}", r.customers.join(", "))?;
            }
        }

        writeln!(f, "Customers ({})", snapshot.customers.len())?;
        for c in &snapshot.customers {
            writeln!(f, "  {:<24} reviews: {}", c.full_name, c.num_reviews)?;
            if !c.restaurants.is_empty() {
                writeln!(f, "    restaurants: {}", c.restaurants.join(", "))?;
            }
        }

        Ok(())
    }
}

/// Render the report as plain text
pub fn render(snapshot: &StoreSnapshot) -> String {
    Report(snapshot).to_string()
}
