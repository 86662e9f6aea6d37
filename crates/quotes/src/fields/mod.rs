//! Field catalogs for the quotes endpoint.
//!
//! Every queryable attribute is a named [`FieldDefinition`](crate::FieldDefinition)
//! constant. Fields returned for both equities and options live in [`shared`];
//! [`equity`] and [`derivative`] re-export them next to their own fields, so a
//! caller only needs the module for the instrument it is querying:
//!
//! ```
//! use tradeking_quotes::fields::{derivative, equity};
//!
//! assert_eq!(equity::YEARLY_HIGH.tag(), "wk52hi");
//! assert_eq!(derivative::STRIKE_PRICE.tag(), "strikeprice");
//! assert_eq!(equity::ASK_PRICE, derivative::ASK_PRICE);
//! ```
//!
//! See <https://developers.tradeking.com/documentation/market-ext-quotes-get-post>.

pub mod derivative;
pub mod equity;
pub mod shared;
