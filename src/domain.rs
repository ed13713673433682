use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Half,
    Double,
    Delete,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Half => "half",
            Label::Double => "double",
            Label::Delete => "delete",
        }
    }
}

/// Face value or special label printed on a tracked item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(untagged)]
pub enum Denomination {
    Amount(i64),
    Label(Label),
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denomination::Amount(value) => write!(f, "{}", value),
            Denomination::Label(label) => f.write_str(label.as_str()),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTag {
    Blue,
    Green,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Black,
    Red,
    Blue,
    Gray,
}

/// Scope of a bulk reset. An omitted tag is modelled as `None` at the call site.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetTag {
    All,
    Green,
    Blue,
}

impl ResetTag {
    fn covers(self, style: StyleTag) -> bool {
        match self {
            ResetTag::All => true,
            ResetTag::Green => style == StyleTag::Green,
            ResetTag::Blue => style == StyleTag::Blue,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Item {
    pub id: ItemId,
    pub value: Denomination,
    pub checked: bool,
    style: StyleTag,
}

impl Item {
    pub fn new(id: ItemId, value: Denomination, style: StyleTag) -> Self {
        Self {
            id,
            value,
            checked: false,
            style,
        }
    }

    pub fn style(&self) -> StyleTag {
        self.style
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Category {
    pub name: String,
    pub accent: Accent,
    pub items: Vec<Item>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CheckedCounts {
    pub checked: usize,
    pub total: usize,
    pub blue_checked: usize,
    pub green_checked: usize,
}

/// One immutable version of the category/item collection.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Checklist {
    categories: Vec<Category>,
}

impl Checklist {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn item(&self, category_index: usize, item_id: &ItemId) -> Option<&Item> {
        self.category(category_index)?
            .items
            .iter()
            .find(|item| &item.id == item_id)
    }

    /// Flips `checked` on the matching item. Unknown ids and indices leave the
    /// snapshot unchanged.
    pub fn toggle(&self, category_index: usize, item_id: &ItemId) -> Checklist {
        let categories = self
            .categories
            .iter()
            .enumerate()
            .map(|(idx, category)| {
                if idx != category_index {
                    return category.clone();
                }
                Category {
                    items: category
                        .items
                        .iter()
                        .map(|item| {
                            if &item.id == item_id {
                                Item {
                                    checked: !item.checked,
                                    ..item.clone()
                                }
                            } else {
                                item.clone()
                            }
                        })
                        .collect(),
                    ..category.clone()
                }
            })
            .collect();

        Checklist { categories }
    }

    pub fn reset_by_tag(&self, tag: Option<ResetTag>) -> Checklist {
        let Some(tag) = tag else {
            return self.clone();
        };

        let categories = self
            .categories
            .iter()
            .map(|category| Category {
                items: category
                    .items
                    .iter()
                    .map(|item| {
                        if tag.covers(item.style) {
                            Item {
                                checked: false,
                                ..item.clone()
                            }
                        } else {
                            item.clone()
                        }
                    })
                    .collect(),
                ..category.clone()
            })
            .collect();

        Checklist { categories }
    }

    pub fn counts(&self) -> CheckedCounts {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .fold(CheckedCounts::default(), |mut counts, item| {
                counts.total += 1;
                if item.checked {
                    counts.checked += 1;
                    match item.style {
                        StyleTag::Blue => counts.blue_checked += 1,
                        StyleTag::Green => counts.green_checked += 1,
                    }
                }
                counts
            })
    }
}
