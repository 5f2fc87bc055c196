use super::identifiable::Identifiable;

/// Trait for entities whose lifecycle can be recorded as activities.
///
/// Actors acting as owner or recipient of activities implement it as well,
/// since they are referenced the same way.
pub trait Trackable: Identifiable + Send + Sync + 'static {
    /// Type name used in references and default keys
    /// (e.g. "article" gives "article.create").
    fn trackable_type() -> &'static str;
}
