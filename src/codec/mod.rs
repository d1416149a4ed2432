//! The project file codec.
//!
//! Projects persist as JSON: a title plus a map from stringified sequence id
//! to a sequence record, layers tagged by kind, modifier parameters keyed by
//! stringified template index, and every keyframe value stored in the tagged
//! canonical form of [`Value`](crate::value::model::Value). Loading rebuilds
//! a complete graph before anything is handed back, so a failed load never
//! leaves a caller with half a project.

/// Save/load entry points and record/graph conversion.
pub mod project_file;
/// Serde shapes mirroring the file format.
pub(crate) mod records;
