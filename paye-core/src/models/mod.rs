mod currency;
mod line_item;
mod tax_bracket;
mod tax_result;

pub use currency::{Currency, PayPeriod};
pub use line_item::{ItemId, ItemKind, LineItem};
pub use tax_bracket::TaxBracket;
pub use tax_result::TaxResult;
