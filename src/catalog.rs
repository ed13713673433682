//! The fixed category table the checklist is built from at startup.

use std::collections::HashSet;

use crate::{
    domain::{Accent, Category, Checklist, Denomination, Item, ItemId, Label, StyleTag},
    error::AppError,
};

use crate::domain::Denomination::{Amount, Label as Special};
use crate::domain::StyleTag::{Blue, Green};

pub struct CategorySpec {
    pub name: &'static str,
    pub accent: Accent,
    pub id_prefix: &'static str,
    /// Append the list position to ids, for lists that repeat a value.
    pub keyed_by_position: bool,
    pub entries: &'static [(Denomination, StyleTag)],
}

pub const CATALOG: [CategorySpec; 5] = [
    CategorySpec {
        name: "Adidas",
        accent: Accent::Black,
        id_prefix: "adidas",
        keyed_by_position: false,
        entries: &[
            (Amount(50), Green),
            (Amount(40), Green),
            (Amount(36), Green),
            (Amount(26), Green),
            (Amount(20), Green),
            (Amount(12), Green),
            (Amount(10), Green),
            (Amount(6), Green),
            (Amount(2), Green),
            (Special(Label::Half), Green),
            (Special(Label::Double), Green),
        ],
    },
    CategorySpec {
        name: "Busy",
        accent: Accent::Red,
        id_prefix: "busy",
        keyed_by_position: false,
        entries: &[
            (Special(Label::Delete), Blue),
            (Amount(40), Green),
            (Amount(32), Green),
            (Amount(30), Green),
            (Amount(22), Green),
            (Amount(18), Green),
            (Amount(12), Green),
            (Amount(10), Green),
            (Amount(4), Green),
            (Amount(1), Blue),
            (Special(Label::Double), Green),
        ],
    },
    CategorySpec {
        name: "Pepsi",
        accent: Accent::Blue,
        id_prefix: "pepsi",
        keyed_by_position: false,
        entries: &[
            (Amount(70), Blue),
            (Amount(40), Green),
            (Amount(30), Green),
            (Amount(20), Green),
            (Amount(14), Green),
            (Amount(10), Green),
            (Amount(3), Blue),
            (Amount(2), Green),
            (Special(Label::Double), Green),
            (Special(Label::Half), Green),
        ],
    },
    CategorySpec {
        name: "ElitShin",
        accent: Accent::Gray,
        id_prefix: "elitshin",
        keyed_by_position: true,
        entries: &[
            (Amount(40), Blue),
            (Amount(30), Green),
            (Amount(20), Green),
            (Amount(20), Green),
            (Amount(10), Green),
            (Amount(1), Green),
        ],
    },
    CategorySpec {
        name: "PEPSI",
        accent: Accent::Blue,
        id_prefix: "pepsi-big",
        keyed_by_position: false,
        entries: &[(Amount(500), Blue), (Amount(100), Blue), (Amount(50), Blue)],
    },
];

fn item_id(spec: &CategorySpec, index: usize, value: Denomination) -> ItemId {
    if spec.keyed_by_position {
        ItemId::new(format!("{}-{}-{}", spec.id_prefix, value, index))
    } else {
        ItemId::new(format!("{}-{}", spec.id_prefix, value))
    }
}

pub fn build_from(specs: &[CategorySpec]) -> Result<Checklist, AppError> {
    let mut names = HashSet::new();
    let mut categories = Vec::with_capacity(specs.len());

    for spec in specs {
        if !names.insert(spec.name) {
            return Err(AppError::DuplicateCategory(spec.name.to_string()));
        }

        let mut ids = HashSet::new();
        let mut items = Vec::with_capacity(spec.entries.len());
        for (index, &(value, style)) in spec.entries.iter().enumerate() {
            let id = item_id(spec, index, value);
            if !ids.insert(id.clone()) {
                return Err(AppError::DuplicateItemId {
                    category: spec.name.to_string(),
                    id: id.0,
                });
            }
            items.push(Item::new(id, value, style));
        }

        categories.push(Category {
            name: spec.name.to_string(),
            accent: spec.accent,
            items,
        });
    }

    tracing::debug!(categories = categories.len(), "catalog built");
    Ok(Checklist::new(categories))
}

pub fn build() -> Result<Checklist, AppError> {
    build_from(&CATALOG)
}
