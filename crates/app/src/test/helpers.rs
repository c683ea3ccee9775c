//! Test Helpers

use cabins::cabins::{Cabin, CabinId};

/// Full-price cabin named after its zero-padded id.
pub(crate) fn make_cabin(id: i64) -> Cabin {
    Cabin {
        id: CabinId::new(id),
        name: format!("{id:03}"),
        max_capacity: 2,
        regular_price: 300,
        discount: 0,
        description: Some("Small cabin in the woods".to_string()),
        image: Some(format!(
            "https://example.com/storage/v1/object/public/cabin-images/cabin-{id:03}.jpg"
        )),
    }
}
