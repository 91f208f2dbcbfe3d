//! Repository implementations backed by `sqlx`.

mod row_mappers;
mod sql_requirement_catalog;

pub use row_mappers::CatalogRow;
pub use sql_requirement_catalog::SqlRequirementCatalog;
