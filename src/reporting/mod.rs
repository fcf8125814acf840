//! Report generation domain: coordinates, dependency graphs, report trees and
//! the rules that classify a project's external dependencies.
pub mod domain;
pub mod policies;
pub mod services;
