//! Card system: definitions and catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier shared by point and merchant cards
//! - `PointCard`: Goal (cube cost) plus points
//! - `MerchantCard`: Carried in the merchant row, not interpreted
//! - `CardCatalog`: Definition lookup and row building

pub mod definition;
pub mod registry;

pub use definition::{CardId, MerchantAction, MerchantCard, PointCard};
pub use registry::CardCatalog;
