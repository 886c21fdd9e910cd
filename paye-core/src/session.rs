//! Per-user working state for a PAYE estimate.
//!
//! The engine is pure; everything that changes between calculations (the
//! benefit and deduction list, the last result) lives here. A session is a
//! plain owned value, so concurrent users each hold their own.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculations::TaxEngine;
use crate::presets::find_common_item;
use crate::validation::{self, ValidationError};
use crate::{Currency, ItemId, ItemKind, LineItem, PayPeriod, TaxResult};

#[derive(Debug, Clone, Default)]
pub struct PayrollSession {
    items: Vec<LineItem>,
    last_result: Option<TaxResult>,
    next_id: u64,
}

impl PayrollSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn last_result(&self) -> Option<&TaxResult> {
        self.last_result.as_ref()
    }

    pub fn has_result(&self) -> bool {
        self.last_result.is_some()
    }

    /// Adds a benefit or deduction from raw text input.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyItemName`], [`ValidationError::InvalidItemAmount`]
    /// or [`ValidationError::NonPositiveItemAmount`]; the item list is left
    /// unchanged.
    pub fn add_item(
        &mut self,
        name: &str,
        amount: &str,
        kind: ItemKind,
        taxable: bool,
    ) -> Result<&LineItem, ValidationError> {
        validation::item_name(name)?;
        let amount = validation::item_amount(amount)?;
        self.add_decimal_item(name, amount, kind, taxable)
    }

    /// Adds a benefit or deduction whose amount is already parsed.
    pub fn add_decimal_item(
        &mut self,
        name: &str,
        amount: Decimal,
        kind: ItemKind,
        taxable: bool,
    ) -> Result<&LineItem, ValidationError> {
        let item = LineItem::new(ItemId(self.next_id), name, amount, kind, taxable)?;
        self.next_id += 1;
        debug!(
            id = %item.id,
            name = %item.name,
            amount = %item.amount,
            kind = %item.kind,
            taxable = item.taxable,
            "added item"
        );
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Adds one of the [`crate::presets::COMMON_ITEMS`] with its usual tax
    /// treatment.
    pub fn add_common_item(
        &mut self,
        name: &str,
        amount: &str,
    ) -> Result<&LineItem, ValidationError> {
        let preset = find_common_item(name)
            .ok_or_else(|| ValidationError::UnknownCommonItem(name.trim().to_string()))?;
        self.add_item(preset.name, amount, preset.kind, preset.taxable)
    }

    /// Removes the item with `id`. Unknown ids are ignored.
    pub fn remove_item(
        &mut self,
        id: ItemId,
    ) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);
        debug!(%id, "removed item");
        Some(removed)
    }

    /// Parses `gross_income` and computes a fresh result from the current
    /// items. On success the result replaces the previous one; on failure
    /// the previous result is kept.
    pub fn calculate(
        &mut self,
        engine: &TaxEngine<'_>,
        gross_income: &str,
        currency: Currency,
        period: PayPeriod,
    ) -> Result<&TaxResult, ValidationError> {
        let gross_income = validation::gross_income(gross_income)?;
        self.calculate_decimal(engine, gross_income, currency, period)
    }

    pub fn calculate_decimal(
        &mut self,
        engine: &TaxEngine<'_>,
        gross_income: Decimal,
        currency: Currency,
        period: PayPeriod,
    ) -> Result<&TaxResult, ValidationError> {
        let result = engine.compute(gross_income, currency, period, &self.items)?;
        info!(
            %currency,
            %period,
            total_tax = %result.total_tax,
            net_income = %result.net_income,
            "estimate calculated"
        );
        Ok(&*self.last_result.insert(result))
    }

    /// Drops all items and the last result. Item ids are not reused.
    pub fn reset(&mut self) {
        self.items.clear();
        self.last_result = None;
        debug!("session reset");
    }
}
