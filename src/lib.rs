//! Energy Estimator library
//!
//! This module exposes the estimation and pricing engines for use in the
//! command-line front ends and in tests.

pub mod core;
pub mod estimator;
pub mod i18n;
pub mod pricing;
pub mod report;
pub mod session;
