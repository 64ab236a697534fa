pub use self::column::{CellValue, ColumnSpec};
pub use self::facets::Facets;
pub use self::filters::ColumnFilters;
pub use self::pager::Pager;
pub use self::sort::{SortOrder, SortState};
pub use self::view::TableView;
pub use self::visibility::ColumnVisibility;

mod column;
mod facets;
mod filters;
mod pager;
mod sort;
mod view;
mod visibility;
