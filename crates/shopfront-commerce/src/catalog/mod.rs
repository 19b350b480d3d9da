//! Product catalog module.
//!
//! Raw product records, synthesized variants, and the projection that turns
//! a record into a display-ready view.

mod product;
mod projection;
mod variant;

pub use product::{Product, Rating, KNOWN_CATEGORIES};
pub use projection::{gallery, project, project_by_id, ProductView, GALLERY_LEN};
pub use variant::{select_default, synthesize, Variant};
