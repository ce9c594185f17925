mod batch;
mod clip;
mod options;
mod report;

pub use batch::ClipBatch;
pub use clip::Clip;
pub use options::ClipOptions;
pub use report::{BatchReport, ShapeNotice, SubjectOutcome, SubjectReport};
