//! Beehive acoustic behavior classification service.
//!
//! Accepts base64-encoded audio clips from field devices, extracts MFCC
//! features, classifies the hive's behavioral state with a pretrained
//! random-forest model, persists an analysis record, and returns a label.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
