//! Integration tests for the cost simulation engine
//!
//! Tests are organized by topic:
//! - `paths` - Single cost-path mechanics and replenishment rule
//! - `ensembles` - Ensemble sampling, seeding and summary properties

mod paths;
