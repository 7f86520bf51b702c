//! Common traits for Mixpanel resources

/// Common trait for Mixpanel resources (organizations, projects, timezones)
///
/// All of them are identified by a numeric id and carry a display name.
pub trait MixpanelResource {
    /// Get the resource ID
    fn id(&self) -> i64;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Exact, case-sensitive name match
    fn has_name(&self, name: &str) -> bool {
        self.name() == name
    }

    /// Check if the resource matches by name or ID
    fn matches(&self, input: &str) -> bool {
        self.has_name(input) || input.parse::<i64>().is_ok_and(|id| id == self.id())
    }
}

/// Find the first resource with exactly the given name
pub fn find_by_name<'a, T: MixpanelResource>(items: &'a [T], name: &str) -> Option<&'a T> {
    items.iter().find(|item| item.has_name(name))
}
