//! Catalogue of common Zimbabwean payroll items and their usual tax
//! treatment.

use serde::Serialize;

use crate::ItemKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonItem {
    pub name: &'static str,
    pub kind: ItemKind,
    /// Taxable for benefits, tax-deductible for deductions.
    pub taxable: bool,
}

const fn benefit(
    name: &'static str,
    taxable: bool,
) -> CommonItem {
    CommonItem {
        name,
        kind: ItemKind::Benefit,
        taxable,
    }
}

const fn deduction(name: &'static str) -> CommonItem {
    CommonItem {
        name,
        kind: ItemKind::Deduction,
        taxable: true,
    }
}

pub const COMMON_ITEMS: &[CommonItem] = &[
    benefit("Housing Allowance", true),
    benefit("Transport Allowance", true),
    deduction("Medical Aid Contributions"),
    deduction("Pension Contributions"),
    benefit("Fuel Allowance", true),
    deduction("NSSA Contributions"),
    deduction("Professional Subscriptions"),
    benefit("Car Benefit", true),
    benefit("Education Allowance", false),
    benefit("Meal Allowance", true),
];

/// Looks up a preset by name, ignoring case and surrounding whitespace.
pub fn find_common_item(name: &str) -> Option<&'static CommonItem> {
    let name = name.trim();
    COMMON_ITEMS
        .iter()
        .find(|item| item.name.eq_ignore_ascii_case(name))
}
