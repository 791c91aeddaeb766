// Pure list transforms
pub mod transforms;

// HTML fragment builders
pub mod formatting;

// Section definitions (search term, transform, cap, slot)
pub mod sections;

// Section runner and DCA checker
pub mod dashboard;

pub use dashboard::{Dashboard, DashboardSettings, DcaOutcome, LoadReport, SectionOutcome};
pub use sections::Section;
