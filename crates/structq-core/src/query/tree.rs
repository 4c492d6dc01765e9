use crate::{
    query::{order::OrderDirective, page::PageSpec},
    value::Value,
};
use structq_grammar::{Combinator, Operator};

///
/// ConditionLeaf
///
/// One rendered field predicate. `expr` is already-quoted SQL with `?`
/// markers and may hold several sub-predicates joined by `AND`/`OR`; the
/// renderer treats it as opaque text.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ConditionLeaf {
    expr: String,
    operator: Operator<'static>,
    atoms: usize,
    values: Vec<Value>,
}

impl ConditionLeaf {
    #[must_use]
    pub const fn new(
        expr: String,
        operator: Operator<'static>,
        atoms: usize,
        values: Vec<Value>,
    ) -> Self {
        Self {
            expr,
            operator,
            atoms,
            values,
        }
    }

    #[must_use]
    pub fn expr(&self) -> &str {
        &self.expr
    }

    #[must_use]
    pub const fn operator(&self) -> Operator<'static> {
        self.operator
    }

    /// Number of columns the field expression expanded to.
    #[must_use]
    pub const fn atoms(&self) -> usize {
        self.atoms
    }

    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

///
/// Node
///

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Leaf(ConditionLeaf),
    Group(ConditionGroup),
}

///
/// ConditionGroup
///
/// Leaves and child groups joined by one combinator, kept in the order the
/// record's fields were visited. Children are owned; the tree has no sharing.
///
/// Pagination and ordering found inside a child are moved into the parent
/// when the child is attached, so after a build only the root carries them.
///

#[derive(Clone, Debug, PartialEq)]
pub struct ConditionGroup {
    combinator: Combinator,
    nodes: Vec<Node>,
    page: PageSpec,
    order: Vec<OrderDirective>,
}

impl Default for ConditionGroup {
    fn default() -> Self {
        Self::new(Combinator::And)
    }
}

impl ConditionGroup {
    #[must_use]
    pub const fn new(combinator: Combinator) -> Self {
        Self {
            combinator,
            nodes: Vec::new(),
            page: PageSpec::new(0, 0),
            order: Vec::new(),
        }
    }

    #[must_use]
    pub const fn combinator(&self) -> Combinator {
        self.combinator
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn leaves(&self) -> impl Iterator<Item = &ConditionLeaf> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Leaf(leaf) => Some(leaf),
            Node::Group(_) => None,
        })
    }

    pub fn groups(&self) -> impl Iterator<Item = &Self> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Group(group) => Some(group),
            Node::Leaf(_) => None,
        })
    }

    /// True when neither this group nor any descendant holds a leaf.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leaves().next().is_none() && self.groups().all(Self::is_empty)
    }

    #[must_use]
    pub const fn page(&self) -> PageSpec {
        self.page
    }

    #[must_use]
    pub fn order(&self) -> &[OrderDirective] {
        &self.order
    }

    pub(crate) fn push_leaf(&mut self, leaf: ConditionLeaf) {
        self.nodes.push(Node::Leaf(leaf));
    }

    pub(crate) fn push_order(&mut self, directive: OrderDirective) {
        self.order.push(directive);
    }

    pub(crate) const fn page_mut(&mut self) -> &mut PageSpec {
        &mut self.page
    }

    /// Adopt `child`, draining its pagination and ordering into this group.
    pub(crate) fn attach(&mut self, mut child: Self) {
        self.page.merge_from(child.page);
        child.page = PageSpec::default();
        self.order.append(&mut child.order);

        self.nodes.push(Node::Group(child));
    }
}
