// src/categories.rs

/// Category ids and human readable labels for the TXT artist shop.
/// Static configuration, built into the binary; never mutated at runtime.
pub const CATEGORIES: &[(u32, &str)] = &[
    (6426, "2025 BLACK FRIDAY"),
    (6256, "PPULBATU"),
    (6, "MERCH"),
    (5, "ALBUM"),
    (186, "TOUR MERCH"),
    (44, "DVD/MEDIA"),
    (65, "GLOBAL MEMBERSHIP"),
    (112, "JAPAN MEMBERSHIP"),
    (80, "US MEMBERSHIP"),
    (776, "SEASON'S GREETINGS"),
    (392, "WEVERSE"),
    (6216, "WEVERSE MERCH"),
];

/// (category id, label) pair handed to the normalizer with each fetch batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryContext {
    pub id: u32,
    pub label: String,
}

/// Label for a category id; unknown ids fall back to the id itself.
pub fn label_for(id: u32) -> String {
    CATEGORIES
        .iter()
        .find(|(cid, _)| *cid == id)
        .map(|(_, label)| s!(*label))
        .unwrap_or_else(|| id.to_string())
}

pub fn context_for(id: u32) -> CategoryContext {
    CategoryContext { id, label: label_for(id) }
}

/// Every watched category id, in table order.
pub fn all_ids() -> Vec<u32> {
    CATEGORIES.iter().map(|(id, _)| *id).collect()
}
