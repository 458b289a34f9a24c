use crate::lookup::{category_label, manufacturer_for};
use crate::render::Node;
use showroom_client::{CarRecord, Specifications};

pub const NO_MATCHES: &str = "No cars match your filters.";
pub const NO_COMPARISON: &str = "No cars selected for comparison.";
pub const NO_RECOMMENDATIONS: &str = "No recommendations available.";

fn badge(count: usize) -> Node {
    Node::Badge {
        label: "Compare".to_string(),
        count,
    }
}

fn category_text(car: &CarRecord) -> String {
    category_label(car.category_id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Unknown ({})", car.category_id))
}

fn manufacturer_text(car: &CarRecord) -> String {
    manufacturer_for(car)
        .map(|m| m.name.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

fn car_card(car: &CarRecord) -> Node {
    Node::Card {
        title: car.name.clone(),
        children: vec![
            Node::field("Year", car.year),
            Node::field("Category", category_text(car)),
            Node::field("Manufacturer", manufacturer_text(car)),
            Node::Muted(format!("id {}", car.id)),
        ],
    }
}

pub fn catalog_view(cars: &[&CarRecord], compare_count: usize) -> Vec<Node> {
    let mut nodes = vec![Node::heading("Car Showroom"), badge(compare_count)];
    if cars.is_empty() {
        nodes.push(Node::Empty(NO_MATCHES.to_string()));
    } else {
        nodes.push(Node::Muted(format!("{} cars", cars.len())));
        nodes.push(Node::List(cars.iter().map(|car| car_card(car)).collect()));
    }
    nodes
}

pub fn detail_view(car: &CarRecord, recommendations: &[&CarRecord], compare_count: usize) -> Vec<Node> {
    let mut nodes = vec![Node::heading(car.name.clone()), badge(compare_count)];
    nodes.push(Node::field("Year", car.year));
    nodes.push(Node::field("Category", category_text(car)));

    match manufacturer_for(car) {
        Some(m) => {
            nodes.push(Node::field("Manufacturer", m.name));
            nodes.push(Node::field("Country", m.country));
            nodes.push(Node::field("Founded", m.founded));
        }
        None => nodes.push(Node::field("Manufacturer", "Unknown")),
    }

    if let Some(image) = car.image_url() {
        nodes.push(Node::field("Image", image));
    }

    match &car.specifications {
        Some(specs) => nodes.push(Node::Card {
            title: "Specifications".to_string(),
            children: vec![
                Node::field("Engine", &specs.engine),
                Node::field("Horsepower", specs.horsepower),
                Node::field("Transmission", &specs.transmission),
                Node::field("Drivetrain", &specs.drivetrain),
            ],
        }),
        None => nodes.push(Node::Muted("Specifications unavailable".to_string())),
    }

    nodes.push(Node::Text(String::new()));
    nodes.push(Node::heading("You may also like"));
    if recommendations.is_empty() {
        nodes.push(Node::Empty(NO_RECOMMENDATIONS.to_string()));
    } else {
        nodes.push(Node::List(recommendations.iter().map(|car| car_card(car)).collect()));
    }
    nodes
}

/// Side-by-side table, one column per compared car.
pub fn compare_view(cars: &[CarRecord]) -> Vec<Node> {
    let mut nodes = vec![Node::heading("Compare Cars")];
    if cars.is_empty() {
        nodes.push(Node::Empty(NO_COMPARISON.to_string()));
        return nodes;
    }

    let mut headers = vec![String::new()];
    headers.extend(cars.iter().map(|car| car.name.clone()));

    let rows = vec![
        table_row("Year", cars.iter().map(|car| car.year.to_string())),
        table_row("Category", cars.iter().map(category_text)),
        table_row("Manufacturer", cars.iter().map(manufacturer_text)),
        table_row("Engine", cars.iter().map(|car| spec_text(car, |s| s.engine.clone()))),
        table_row(
            "Horsepower",
            cars.iter().map(|car| spec_text(car, |s| s.horsepower.to_string())),
        ),
        table_row(
            "Transmission",
            cars.iter().map(|car| spec_text(car, |s| s.transmission.clone())),
        ),
        table_row(
            "Drivetrain",
            cars.iter().map(|car| spec_text(car, |s| s.drivetrain.clone())),
        ),
    ];

    nodes.push(Node::Table { headers, rows });
    nodes
}

fn table_row(label: &str, values: impl Iterator<Item = String>) -> Vec<String> {
    let mut row = vec![label.to_string()];
    row.extend(values);
    row
}

fn spec_text(car: &CarRecord, field: impl Fn(&Specifications) -> String) -> String {
    car.specifications
        .as_ref()
        .map(field)
        .unwrap_or_else(|| "-".to_string())
}

pub fn alert_view(message: &str) -> Vec<Node> {
    vec![Node::Alert(message.to_string())]
}
