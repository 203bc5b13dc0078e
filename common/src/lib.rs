//! Price Check Common Library
//!
//! CLIとテストで共有されるレコード型・キーワード照合・レポート書式

pub mod error;
pub mod record;
pub mod query;
pub mod plan;
pub mod repr;

pub use error::{Error, Result};
pub use record::Record;
pub use query::{matches, Query};
pub use plan::{Fallback, Plan, ReportStyle, Target};
pub use repr::{py_dict, py_list, py_str};
