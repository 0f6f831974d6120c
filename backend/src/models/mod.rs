pub mod record;
pub mod selection;

pub use record::{columns, Month, ParseMonthError, SalesRecord};
pub use selection::{
    year_options, ParseReportTypeError, ReportType, Selection, YEAR_MAX, YEAR_MIN,
};
