// Shared, frontend-independent logic for the portfolio site.
//
// Everything in here is pure data in, data out. The terminal and web
// frontends own the event loop and the drawing; they hand user input to
// `ProjectsController` and read back blocks, wedges and legend entries.

pub mod aggregate;
pub mod chart;
pub mod commits;
pub mod error;
pub mod filter;
pub mod github;
pub mod loader;
pub mod nav;
pub mod project;
pub mod render;
pub mod selection;
pub mod stats;
pub mod theme;

pub use aggregate::{aggregate, CategoryBucket};
pub use chart::{draw_pie, LegendEntry, PieChart, PieSurface, Rgb, Wedge};
pub use error::{Error, Result};
pub use filter::filter_projects;
pub use project::ProjectRecord;
pub use render::{render_projects, HeadingLevel, ProjectBlock, ProjectList, ProjectSurface};
pub use selection::{ProjectsController, SelectionState};
pub use stats::StatEntry;
pub use theme::ColorScheme;
