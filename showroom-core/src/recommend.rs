use showroom_client::CarRecord;

pub const MAX_RECOMMENDATIONS: usize = 3;

/// Up to three other cars in the same category as `current`, in catalog
/// order. With no same-category peers, the first three other cars.
pub fn recommend<'a>(current: &CarRecord, catalog: &'a [CarRecord]) -> Vec<&'a CarRecord> {
    let others = || catalog.iter().filter(|car| car.id != current.id);

    let same_category: Vec<&CarRecord> = others()
        .filter(|car| car.category_id == current.category_id)
        .take(MAX_RECOMMENDATIONS)
        .collect();

    if !same_category.is_empty() {
        return same_category;
    }
    others().take(MAX_RECOMMENDATIONS).collect()
}
