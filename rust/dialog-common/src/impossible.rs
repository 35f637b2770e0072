use std::convert::Infallible;
use std::marker::PhantomData;

/// An uninhabited placeholder for a capability that is statically absent.
///
/// Types that are generic over an optional collaborator (for example a
/// service that may or may not have a native dialog host) can name
/// `Impossible` in place of the collaborator they will never hold. Any trait
/// whose methods receive `&self` can be implemented for it by matching on the
/// uninhabited field:
///
/// ```rust,ignore
/// impl<T> DialogHost for Impossible<T> {
///     fn show(&self, message: &str) {
///         match self.0 {}
///     }
/// }
/// ```
///
/// The type parameter `T` (defaults to `()`) lets generic type aliases
/// consume all their parameters.
pub struct Impossible<T = ()>(
    /// The uninhabited field, public so downstream crates can write
    /// `match self.0 {}` in their own trait impls.
    pub Infallible,
    /// Marker for the otherwise unused type parameter.
    pub PhantomData<T>,
);

impl<T> std::fmt::Debug for Impossible<T> {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {}
    }
}
