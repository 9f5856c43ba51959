//! # Script Module
//!
//! Reads VirtualDub selection scripts and pulls out the frame ranges kept by
//! `subset.AddRange` statements.
//!
//! ```rust
//! use vdscript_info::script::extract_selections;
//!
//! let text = "VirtualDub.subset.AddRange(446,444);\nVirtualDub.subset.AddRange(1397,194);\n";
//! let selections = extract_selections(text).unwrap();
//!
//! assert_eq!(selections[0].end_frame(), 889);
//! assert_eq!(selections[1].end_frame(), 1590);
//! ```

pub mod extractor;
pub mod source;
pub mod types;

pub use extractor::extract_selections;
pub use source::ScriptSource;
pub use types::{total_frames, Selection};
