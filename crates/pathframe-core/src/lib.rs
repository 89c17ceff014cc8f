pub mod error;
pub mod settings;
pub mod tolerance;
pub mod traits;

pub use error::{PathframeError, Result};
pub use settings::CurveSettings;
pub use tolerance::Tolerance;
