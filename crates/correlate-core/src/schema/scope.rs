use crate::stmt::Select;
use std::fmt;
use std::sync::Arc;

/// A default filter attached to a relationship.
///
/// A scope is an opaque query transform, passed explicitly as data and
/// applied by the resolvers at a fixed point in their pipeline. It receives
/// the in-progress candidate subquery and returns a further-restricted one.
#[derive(Clone)]
pub struct Scope {
    f: Arc<dyn Fn(Select) -> Select + Send + Sync>,
}

impl Scope {
    pub fn new(f: impl Fn(Select) -> Select + Send + Sync + 'static) -> Self {
        Self { f: Arc::new(f) }
    }

    pub fn apply(&self, select: Select) -> Select {
        (self.f)(select)
    }

    /// Composes two scopes, applying `self` first.
    pub fn then(&self, other: &Scope) -> Scope {
        let first = self.clone();
        let second = other.clone();
        Scope::new(move |select| second.apply(first.apply(select)))
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scope")
    }
}
