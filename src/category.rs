//! Per-category table builders
//!
//! Each data category carries a fixed column layout: the items key it is
//! read from, the published Turkish header labels, and an ordered list of
//! column transforms applied after normalization. The [`Category`] enum is
//! the single registration point; adding a category means one variant and
//! one spec entry.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::format::{format_link, format_phone, host_label};
use crate::model::Table;
use crate::normalize::{process_row, PLACEHOLDER};

const VERIFIED: &str = "Doğrulanmış";
const UNVERIFIED: &str = "Doğrulanmamış";

/// Failure while building a table from category input.
///
/// Missing or null *fields* inside a record are normalized to the
/// placeholder and never error; a missing items key or a malformed record
/// fails the whole conversion instead of silently corrupting a published
/// table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unknown category tag: {0}")]
    UnknownCategory(String),
    #[error("input has no \"{key}\" key for category {tag}")]
    MissingKey {
        key: &'static str,
        tag: &'static str,
    },
    #[error("\"{key}\" is not an array")]
    ExpectedArray { key: &'static str },
    #[error("item {index} is not an object")]
    ExpectedObject { index: usize },
    #[error("item {index} has {got} fields, expected {expected} columns")]
    RowWidth {
        index: usize,
        expected: usize,
        got: usize,
    },
}

/// Post-transform applied to one normalized cell, by column index.
///
/// Every transform is skipped when the cell is the placeholder; a missing
/// value is never formatted.
#[derive(Debug, Clone, Copy)]
enum Transform {
    /// Truthy flag -> verified/unverified label
    Verified,
    /// Markdown `tel:` link
    Phone,
    /// Markdown link with a constant display label
    Link(&'static str),
    /// Markdown link labeled with the URL's host
    HostLink,
}

/// Fixed column mapping for one category.
struct CategorySpec {
    /// Key holding the item list in the input mapping; exact names are the
    /// contract with the upstream data producer
    items_key: &'static str,
    /// Published header labels, in column order
    headers: &'static [&'static str],
    /// (column index, transform) pairs, applied in order
    transforms: &'static [(usize, Transform)],
    /// Join multi-valued fields with ", " instead of raw JSON
    list_aware: bool,
}

/// One of the fixed data-domain categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CityAccommodation,
    GatheringList,
    FoodItems,
    ContainerPharmacy,
    PhoneNumbers,
    UsefulLinks,
    Veterinary,
    HelpItems,
    StemCellDonation,
    BeneficialArticles,
    EvacuationPoints,
}

impl Category {
    /// All registered categories, in registration order
    pub const ALL: [Category; 11] = [
        Category::CityAccommodation,
        Category::GatheringList,
        Category::FoodItems,
        Category::ContainerPharmacy,
        Category::PhoneNumbers,
        Category::UsefulLinks,
        Category::Veterinary,
        Category::HelpItems,
        Category::StemCellDonation,
        Category::BeneficialArticles,
        Category::EvacuationPoints,
    ];

    /// Upstream category identifier
    pub fn tag(&self) -> &'static str {
        match self {
            Category::CityAccommodation => "city-accommodation",
            Category::GatheringList => "new-gathering-list",
            Category::FoodItems => "food-items",
            Category::ContainerPharmacy => "container-pharmacy",
            Category::PhoneNumbers => "phone-number-list",
            Category::UsefulLinks => "useful-links",
            Category::Veterinary => "data-vet",
            Category::HelpItems => "help-item-list",
            Category::StemCellDonation => "stem-cell-donation",
            Category::BeneficialArticles => "beneficial-articles",
            Category::EvacuationPoints => "evacuation-points",
        }
    }

    fn spec(&self) -> CategorySpec {
        use Transform::{HostLink, Link, Phone, Verified};

        match self {
            Category::CityAccommodation => CategorySpec {
                items_key: "items",
                headers: &[
                    "Şehir",
                    "Yer",
                    "Doğrulanma Durumu",
                    "Kaynak",
                    "Adres",
                    "Doğrulanma Tarihi",
                ],
                transforms: &[
                    (2, Verified),
                    (3, Link("Kaynak")),
                    (4, Link("Google Maps")),
                ],
                list_aware: false,
            },
            Category::GatheringList => CategorySpec {
                items_key: "items",
                headers: &["Yer", "Harita", "Kaynak"],
                transforms: &[(1, Link("Google Maps")), (2, Link("Kaynak"))],
                list_aware: false,
            },
            Category::FoodItems => CategorySpec {
                items_key: "items",
                headers: &[
                    "Yer",
                    "Adres",
                    "Kaynak",
                    "Telefon",
                    "Güncelleme Tarihi",
                    "Güncelleme Saati",
                ],
                transforms: &[
                    (1, Link("Google Maps")),
                    (2, Link("Kaynak")),
                    (3, Phone),
                ],
                list_aware: false,
            },
            Category::ContainerPharmacy => CategorySpec {
                items_key: "items",
                headers: &["İl", "İlçe", "Adres", "Harita"],
                transforms: &[(3, Link("Google Maps"))],
                list_aware: false,
            },
            Category::PhoneNumbers => CategorySpec {
                items_key: "phones",
                headers: &["İsim", "Numara"],
                transforms: &[(1, Phone)],
                list_aware: false,
            },
            Category::UsefulLinks => CategorySpec {
                items_key: "usefulLinks",
                headers: &["İsim", "URL"],
                transforms: &[(1, HostLink)],
                list_aware: false,
            },
            Category::Veterinary => CategorySpec {
                items_key: "vets",
                headers: &["Veteriner", "Telefon", "Adres", "Harita"],
                transforms: &[(1, Phone), (3, Link("Google Maps"))],
                list_aware: false,
            },
            Category::HelpItems => CategorySpec {
                items_key: "items",
                headers: &["İl", "Lokasyon", "Link", "Telefon", "Notlar"],
                transforms: &[(2, Link("Kaynak/Harita")), (3, Phone)],
                list_aware: false,
            },
            Category::StemCellDonation => CategorySpec {
                items_key: "items",
                headers: &["Bölge", "İl", "Adres/Harita", "Telefon"],
                transforms: &[(2, Link("Harita")), (3, Phone)],
                list_aware: false,
            },
            Category::BeneficialArticles => CategorySpec {
                items_key: "articles",
                headers: &["Başlık", "Yazar", "Link", "Konu"],
                transforms: &[(2, HostLink)],
                list_aware: false,
            },
            Category::EvacuationPoints => CategorySpec {
                items_key: "items",
                headers: &[
                    "İl",
                    "İlçe",
                    "Yer",
                    "Harita",
                    "Adres",
                    "İletişim",
                    "Kaynak",
                ],
                transforms: &[(3, Link("Google Maps"))],
                // Contact fields may hold several phone numbers
                list_aware: true,
            },
        }
    }

    /// Build this category's table from the input mapping.
    ///
    /// Emits one row per input item, in input order; no records are
    /// filtered or dropped.
    pub fn build(&self, data: &Value) -> Result<Table, BuildError> {
        let spec = self.spec();
        let items = data
            .get(spec.items_key)
            .ok_or(BuildError::MissingKey {
                key: spec.items_key,
                tag: self.tag(),
            })?
            .as_array()
            .ok_or(BuildError::ExpectedArray {
                key: spec.items_key,
            })?;

        let mut table = Table::new(spec.headers.iter().copied());
        for (index, item) in items.iter().enumerate() {
            let record = item
                .as_object()
                .ok_or(BuildError::ExpectedObject { index })?;

            let mut cells = process_row(record, spec.list_aware);
            if cells.len() != spec.headers.len() {
                return Err(BuildError::RowWidth {
                    index,
                    expected: spec.headers.len(),
                    got: cells.len(),
                });
            }

            for &(col, transform) in spec.transforms {
                if cells[col] == PLACEHOLDER {
                    continue;
                }
                let formatted = apply(transform, &cells[col]);
                cells[col] = formatted;
            }

            table.push_row(cells);
        }

        debug!(category = self.tag(), rows = table.row_count(), "built table");
        Ok(table)
    }
}

fn apply(transform: Transform, cell: &str) -> String {
    match transform {
        Transform::Verified => {
            if cell.eq_ignore_ascii_case("true") {
                VERIFIED.to_string()
            } else {
                UNVERIFIED.to_string()
            }
        }
        Transform::Phone => format_phone(cell),
        Transform::Link(label) => format_link(cell, label),
        Transform::HostLink => match host_label(cell) {
            Some(host) => format_link(cell, &host),
            None => cell.to_string(),
        },
    }
}

impl FromStr for Category {
    type Err = BuildError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.tag() == tag)
            .ok_or_else(|| BuildError::UnknownCategory(tag.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
