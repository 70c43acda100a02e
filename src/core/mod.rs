pub mod bounds;
pub mod columns;
pub mod request_state;
pub mod selection;
pub mod series;

pub use bounds::{BoundsRect, GeoPoint};
pub use columns::{ColumnBindings, ResolvedFilter};
pub use request_state::{RequestState, SortDirection};
pub use selection::SelectionSnapshot;
pub use series::ChartSeries;
