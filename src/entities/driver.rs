use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub vehicle: String,
}

/// A driver paired with its availability flag at the time of the read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverAvailability {
    #[serde(flatten)]
    pub driver: Driver,
    pub available: bool,
}

impl Driver {
    pub fn new(id: &str, name: &str, phone: &str, vehicle: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            vehicle: vehicle.into(),
        }
    }

    /// The five drivers every engine starts with, in registration order.
    pub fn default_roster() -> Vec<Driver> {
        vec![
            Driver::new("driver101", "Peter Pandey", "555-0101", "Toyota Camry"),
            Driver::new("driver102", "Bruce Hariyali", "555-0102", "Honda Accord"),
            Driver::new("driver103", "Tony Thakkar", "555-0103", "Ford Focus"),
            Driver::new("driver104", "Steve Sharma", "555-0104", "Chevrolet Malibu"),
            Driver::new("driver105", "Natasha Nanda", "555-0105", "Nissan Altima"),
        ]
    }
}

#[test]
fn default_roster_has_unique_ids() {
    let roster = Driver::default_roster();
    let mut ids: Vec<&str> = roster.iter().map(|d| d.id.as_str()).collect();

    ids.sort();
    ids.dedup();

    assert_eq!(roster.len(), 5);
    assert_eq!(ids.len(), 5);
    assert_eq!(roster[0].id, "driver101");
    assert_eq!(roster[4].vehicle, "Nissan Altima");
}
