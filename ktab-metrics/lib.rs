pub use self::progress::JobProgress;
pub use self::quantity::{CpuQuantity, MemoryQuantity, QuantityError};
pub use self::scaling::{ScaleDirection, ScalingEvent};
pub use self::usage::{QuotaUsage, usage_percent};

mod progress;
mod quantity;
mod scaling;
mod usage;
