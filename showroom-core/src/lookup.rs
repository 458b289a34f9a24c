// Static manufacturer and category tables

use showroom_client::CarRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Manufacturer {
    pub name: &'static str,
    pub country: &'static str,
    pub founded: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub label: &'static str,
}

pub static MANUFACTURERS: &[Manufacturer] = &[
    Manufacturer { name: "Toyota", country: "Japan", founded: 1937 },
    Manufacturer { name: "Honda", country: "Japan", founded: 1948 },
    Manufacturer { name: "Ford", country: "United States", founded: 1903 },
    Manufacturer { name: "BMW", country: "Germany", founded: 1916 },
    Manufacturer { name: "Mercedes-Benz", country: "Germany", founded: 1926 },
    Manufacturer { name: "Audi", country: "Germany", founded: 1909 },
    Manufacturer { name: "Chevrolet", country: "United States", founded: 1911 },
    Manufacturer { name: "Nissan", country: "Japan", founded: 1933 },
    Manufacturer { name: "Volkswagen", country: "Germany", founded: 1937 },
    Manufacturer { name: "Hyundai", country: "South Korea", founded: 1967 },
    Manufacturer { name: "Kia", country: "South Korea", founded: 1944 },
    Manufacturer { name: "Mazda", country: "Japan", founded: 1920 },
    Manufacturer { name: "Subaru", country: "Japan", founded: 1953 },
    Manufacturer { name: "Lexus", country: "Japan", founded: 1989 },
    Manufacturer { name: "Porsche", country: "Germany", founded: 1931 },
    Manufacturer { name: "Ferrari", country: "Italy", founded: 1939 },
    Manufacturer { name: "Tesla", country: "United States", founded: 2003 },
    Manufacturer { name: "Volvo", country: "Sweden", founded: 1927 },
];

pub static CATEGORIES: &[Category] = &[
    Category { id: 1, label: "SUV" },
    Category { id: 2, label: "Sedan" },
    Category { id: 3, label: "Sports Car" },
    Category { id: 4, label: "Coupe" },
    Category { id: 5, label: "Hatchback" },
    Category { id: 6, label: "Truck" },
    Category { id: 7, label: "Convertible" },
    Category { id: 8, label: "Minivan" },
];

pub fn category_label(category_id: u32) -> Option<&'static str> {
    CATEGORIES
        .iter()
        .find(|c| c.id == category_id)
        .map(|c| c.label)
}

/// Look up a brand by exact name, ignoring case.
pub fn manufacturer(name: &str) -> Option<&'static Manufacturer> {
    MANUFACTURERS
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
}

/// Resolve the brand of a car from its name. Records carry no structured
/// brand, so the longest brand name contained in the car name wins.
pub fn manufacturer_for(car: &CarRecord) -> Option<&'static Manufacturer> {
    let name = car.name.to_lowercase();
    MANUFACTURERS
        .iter()
        .filter(|m| name.contains(&m.name.to_lowercase()))
        .max_by_key(|m| m.name.len())
}
