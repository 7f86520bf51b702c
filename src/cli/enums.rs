//! Sort enums for CLI commands

use clap::ValueEnum;

/// Sort field options for timezones
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TzSortField {
    /// Keep the order returned by the API (default)
    None,
    /// Sort by timezone name
    Name,
    /// Sort by timezone ID
    Id,
}

impl std::fmt::Display for TzSortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TzSortField::None => write!(f, "none"),
            TzSortField::Name => write!(f, "name"),
            TzSortField::Id => write!(f, "id"),
        }
    }
}
