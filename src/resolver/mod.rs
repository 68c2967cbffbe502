//! Hypothesis and accusation resolution.
//!
//! - `inquiry`: the ordered, mandatory-disclosure dispute protocol
//! - `accusation`: the terminal check against the envelope
//! - `respondent`: the seam through which players answer disputes

pub mod accusation;
pub mod inquiry;
pub mod respondent;

pub use accusation::{Accusation, AccusationOutcome};
pub use inquiry::{DisputeChoice, Hypothesis, Inquiry, InquiryStatus};
pub use respondent::{FirstMatch, Respondent};
