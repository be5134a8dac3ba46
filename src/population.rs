//! Candidate populations.
//!
//! A host hands over candidates either as an ordered list or as an agent set. Both are
//! seen here as an ordered, 0-indexed slice; results are rebuilt in the same shape the
//! input came in.

/// The type of agent an [`AgentSet`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Turtle,
    Patch,
    Link,
}

/// A filterable collection of agents of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSet<T> {
    kind: AgentKind,
    agents: Vec<T>,
}

impl<T> AgentSet<T> {
    /// Create a set of `kind` agents, kept in the given order.
    pub fn new(kind: AgentKind, agents: Vec<T>) -> Self {
        Self { kind, agents }
    }

    /// The kind of agent this set holds.
    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    /// Number of agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the set holds no agents.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterate over the agents in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.agents.iter()
    }

    /// The agents as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.agents
    }

    /// Keep the agents matching `pred`, preserving order and kind.
    pub fn with<P>(&self, mut pred: P) -> Self
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        Self {
            kind: self.kind,
            agents: self.agents.iter().filter(|a| pred(a)).cloned().collect(),
        }
    }
}

/// The candidates a selection is drawn from.
#[derive(Debug, Clone, PartialEq)]
pub enum Population<T> {
    /// An ordered list.
    Ordered(Vec<T>),
    /// An agent set.
    Filterable(AgentSet<T>),
}

impl<T> Population<T> {
    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// The candidate at `index`, if any.
    pub fn item_at(&self, index: usize) -> Option<&T> {
        self.items().get(index)
    }

    /// All candidates in population order.
    pub fn items(&self) -> &[T] {
        match self {
            Self::Ordered(items) => items,
            Self::Filterable(set) => set.as_slice(),
        }
    }

    /// Build a population of the same shape from the candidates at `indices`, in the
    /// order given.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    pub fn rebuild(&self, indices: &[usize]) -> Self
    where
        T: Clone,
    {
        let items = self.items();
        let picked: Vec<T> = indices.iter().map(|&i| items[i].clone()).collect();
        match self {
            Self::Ordered(_) => Self::Ordered(picked),
            Self::Filterable(set) => Self::Filterable(AgentSet::new(set.kind(), picked)),
        }
    }

    /// Consume the population and return its candidates.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Ordered(items) => items,
            Self::Filterable(set) => set.agents,
        }
    }
}

impl<T> From<Vec<T>> for Population<T> {
    fn from(items: Vec<T>) -> Self {
        Self::Ordered(items)
    }
}

impl<T> From<AgentSet<T>> for Population<T> {
    fn from(set: AgentSet<T>) -> Self {
        Self::Filterable(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebuild_keeps_shape() {
        let list = Population::from(vec!['a', 'b', 'c', 'd']);
        assert_eq!(list.rebuild(&[1, 3]), Population::Ordered(vec!['b', 'd']));

        let set = Population::from(AgentSet::new(AgentKind::Patch, vec![10, 11, 12]));
        let rebuilt = set.rebuild(&[0, 2]);
        assert_eq!(
            rebuilt,
            Population::Filterable(AgentSet::new(AgentKind::Patch, vec![10, 12]))
        );
    }

    #[test]
    fn duplicates_by_value_are_distinct_positions() {
        let list = Population::from(vec![7, 7, 7]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.item_at(2), Some(&7));
        assert_eq!(list.item_at(3), None);
        assert_eq!(list.rebuild(&[0, 0, 2]).into_vec(), vec![7, 7, 7]);
    }

    #[test]
    fn with_filters_and_keeps_kind() {
        let turtles = AgentSet::new(AgentKind::Turtle, vec![1, 2, 3, 4, 5]);
        let even = turtles.with(|t| t % 2 == 0);
        assert_eq!(even.kind(), AgentKind::Turtle);
        assert_eq!(even.as_slice(), &[2, 4]);
        assert!(turtles.with(|_| false).is_empty());
        assert_eq!(turtles.iter().count(), 5);
    }
}
